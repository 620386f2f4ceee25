//! Actor-tagged notifications collected by the frame driver.

use std::fmt;
use std::sync::mpsc::Sender;

use serde::{Deserialize, Serialize};
use status_core::{HealthEvent, StatusEvent};

use crate::actor::ActorId;

/// Payload of an [`ActorEvent`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ActorEventKind {
    Status(StatusEvent),
    Health(HealthEvent),
}

/// A component notification together with the actor that raised it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorEvent {
    pub actor: ActorId,
    pub kind: ActorEventKind,
}

impl ActorEvent {
    pub fn status(actor: ActorId, event: StatusEvent) -> Self {
        Self {
            actor,
            kind: ActorEventKind::Status(event),
        }
    }

    pub fn health(actor: ActorId, event: HealthEvent) -> Self {
        Self {
            actor,
            kind: ActorEventKind::Health(event),
        }
    }
}

impl fmt::Display for ActorEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ActorEventKind::Status(StatusEvent::Added { id }) => {
                write!(f, "{} gained {}", self.actor, id)
            }
            ActorEventKind::Status(StatusEvent::Ticked { id, remaining }) => {
                write!(f, "{} {} ({remaining:.2}s left)", self.actor, id)
            }
            ActorEventKind::Status(StatusEvent::Removed { id }) => {
                write!(f, "{} lost {}", self.actor, id)
            }
            ActorEventKind::Health(HealthEvent::Changed { health, fraction }) => {
                write!(
                    f,
                    "{} health {health:.1} ({:.0}%)",
                    self.actor,
                    fraction * 100.0
                )
            }
            ActorEventKind::Health(HealthEvent::Death) => write!(f, "{} died", self.actor),
        }
    }
}

/// Queue end handed to one actor's listeners.
///
/// Sends only fail once the driver holding the receiver is gone, so failures
/// are ignored.
#[derive(Debug, Clone)]
pub struct EventSink {
    actor: ActorId,
    sender: Sender<ActorEvent>,
}

impl EventSink {
    pub fn new(actor: ActorId, sender: Sender<ActorEvent>) -> Self {
        Self { actor, sender }
    }

    pub fn send_status(&self, event: &StatusEvent) {
        let _ = self
            .sender
            .send(ActorEvent::status(self.actor, event.clone()));
    }

    pub fn send_health(&self, event: &HealthEvent) {
        let _ = self
            .sender
            .send(ActorEvent::health(self.actor, event.clone()));
    }
}
