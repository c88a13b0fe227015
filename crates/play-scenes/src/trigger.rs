//! Frontera de triggers: el navegador sólo emite, un suscriptor externo
//! decide qué significa cada id.
use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use std::sync::mpsc::{channel, Receiver, Sender};

use crate::types::TriggerScope;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerFired {
    pub ids: Vec<String>,
    pub scope: TriggerScope,
    pub scene_key: String,
    pub participant_id: Option<String>,
    pub fired_at: DateTime<Utc>,
}

/// Suscriptores de triggers. Los receptores descartados se podan al publicar.
#[derive(Debug, Default)]
pub struct TriggerBus {
    subscribers: Vec<Sender<TriggerFired>>,
}

impl TriggerBus {
    pub fn subscribe(&mut self) -> Receiver<TriggerFired> {
        let (tx, rx) = channel();
        self.subscribers.push(tx);
        rx
    }

    /// Entrega el mensaje a cada receptor vivo; devuelve cuántos lo recibieron.
    pub fn publish(&mut self, message: &TriggerFired) -> usize {
        self.subscribers.retain(|tx| tx.send(message.clone()).is_ok());
        debug!("trigger {:?} delivered to {} subscriber(s)", message.ids, self.subscribers.len());
        self.subscribers.len()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}
