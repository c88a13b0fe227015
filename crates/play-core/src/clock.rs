//! Fuente de tiempo inyectable.
//!
//! El motor y los event stores nunca llaman a `Utc::now()` directamente; así
//! los tests fijan el reloj con `ManualClock`.
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

pub type SharedClock = Arc<dyn Clock + Send + Sync>;

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

pub fn system_clock() -> SharedClock {
    Arc::new(SystemClock)
}

/// Reloj manual con resolución de milisegundos.
#[derive(Debug)]
pub struct ManualClock {
    millis: AtomicI64,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self { millis: AtomicI64::new(start.timestamp_millis()) }
    }

    /// 2024-01-01T00:00:00Z
    pub fn at_epoch() -> Self {
        Self::new(Utc.timestamp_millis_opt(1_704_067_200_000)
                      .single()
                      .unwrap_or_default())
    }

    pub fn advance(&self, by: Duration) {
        self.millis.fetch_add(by.num_milliseconds(), Ordering::SeqCst);
    }

    pub fn set(&self, to: DateTime<Utc>) {
        self.millis.store(to.timestamp_millis(), Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        let ms = self.millis.load(Ordering::SeqCst);
        Utc.timestamp_millis_opt(ms).single().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_moves_both_ways() {
        let clock = ManualClock::at_epoch();
        let t0 = clock.now();
        clock.advance(Duration::seconds(5));
        assert_eq!(clock.now() - t0, Duration::seconds(5));
        clock.set(t0 - Duration::seconds(1));
        assert!(clock.now() < t0);
    }
}
