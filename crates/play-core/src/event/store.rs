use chrono::{DateTime, Utc};

use crate::clock::{system_clock, SharedClock};

/// Evento que el store puede sellar con id y timestamp.
pub trait Stamped: Clone {
    /// Evento sin id ni timestamp, tal como lo entrega quien lo emite.
    type Draft;

    fn stamp(draft: Self::Draft, id: u64, timestamp: DateTime<Utc>) -> Self;
    fn id(&self) -> u64;
    fn timestamp(&self) -> DateTime<Utc>;
}

/// Almacenamiento de eventos append-only.
pub trait EventStore<E: Stamped> {
    /// Sella el borrador y lo agrega; devuelve el evento completo.
    fn append(&mut self, draft: E::Draft) -> E;
    /// Eventos en orden de inserción.
    fn list(&self) -> Vec<E>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Única forma de borrar: vaciar todo (reset completo).
    fn clear(&mut self);
}

/// Store en memoria.
///
/// Invariantes: ids empiezan en 1, crecen de a uno y no se reutilizan (ni
/// siquiera después de `clear`); timestamps no decrecen aunque el reloj
/// retroceda.
pub struct InMemoryEventStore<E> {
    events: Vec<E>,
    next_id: u64,
    last_ts: Option<DateTime<Utc>>,
    clock: SharedClock,
}

impl<E> InMemoryEventStore<E> {
    pub fn with_clock(clock: SharedClock) -> Self {
        Self { events: Vec::new(),
               next_id: 1,
               last_ts: None,
               clock }
    }
}

impl<E> Default for InMemoryEventStore<E> {
    fn default() -> Self {
        Self::with_clock(system_clock())
    }
}

impl<E> std::fmt::Debug for InMemoryEventStore<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryEventStore")
         .field("len", &self.events.len())
         .field("next_id", &self.next_id)
         .finish()
    }
}

impl<E: Stamped> EventStore<E> for InMemoryEventStore<E> {
    fn append(&mut self, draft: E::Draft) -> E {
        let now = self.clock.now();
        let ts = match self.last_ts {
            Some(last) if last > now => last,
            _ => now,
        };
        let ev = E::stamp(draft, self.next_id, ts);
        self.next_id += 1;
        self.last_ts = Some(ts);
        self.events.push(ev.clone());
        ev
    }

    fn list(&self) -> Vec<E> {
        self.events.clone()
    }

    fn len(&self) -> usize {
        self.events.len()
    }

    fn clear(&mut self) {
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use chrono::Duration;
    use std::sync::Arc;

    #[derive(Debug, Clone)]
    struct Note {
        id: u64,
        ts: DateTime<Utc>,
        text: &'static str,
    }

    impl Stamped for Note {
        type Draft = &'static str;

        fn stamp(text: &'static str, id: u64, ts: DateTime<Utc>) -> Self {
            Self { id, ts, text }
        }

        fn id(&self) -> u64 {
            self.id
        }

        fn timestamp(&self) -> DateTime<Utc> {
            self.ts
        }
    }

    #[test]
    fn ids_survive_clear_and_timestamps_never_go_back() {
        let clock = Arc::new(ManualClock::at_epoch());
        let mut store: InMemoryEventStore<Note> = InMemoryEventStore::with_clock(clock.clone());
        let a = store.append("a");
        clock.advance(Duration::seconds(-30));
        let b = store.append("b");
        assert_eq!((a.id, b.id), (1, 2));
        assert_eq!(b.ts, a.ts);

        store.clear();
        assert!(store.is_empty());
        let c = store.append("c");
        assert_eq!(c.id, 3);
        assert_eq!(store.list().iter().map(|n| n.text).collect::<Vec<_>>(), vec!["c"]);
    }
}
