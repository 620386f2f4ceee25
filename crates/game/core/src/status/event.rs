/// Notifications raised by the slot engine.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum StatusEvent {
    /// A status occupied a free slot (or was restored from a save).
    Added { id: String },

    /// A status ticked; `remaining` is the duration after the tick.
    Ticked { id: String, remaining: f32 },

    /// A status left its slot (expiry, removal, clear or load).
    Removed { id: String },
}

impl StatusEvent {
    /// Identifier of the status this event is about.
    pub fn status_id(&self) -> &str {
        match self {
            Self::Added { id } | Self::Ticked { id, .. } | Self::Removed { id } => id,
        }
    }
}
