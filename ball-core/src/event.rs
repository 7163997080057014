//! Input events delivered by the host page.
//!
//! All coordinates are zone-local pixels; the host subtracts the zone's
//! bounding-box origin before building an event.

use serde::{Deserialize, Serialize};

use crate::{DecorationId, DecorationKind};

/// Key that deletes the selected decoration.
pub const DELETE_KEY: &str = "Delete";

/// All input events the decorator can receive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum InputEvent {
    /// A palette item was clicked; place it in the zone centre.
    PaletteClick {
        /// Palette `data-type` of the clicked item.
        kind: String,
    },

    /// A palette item was dropped into the zone.
    PaletteDrop {
        /// Palette `data-type` of the dragged item.
        kind: String,
        /// Drop X coordinate.
        x: f32,
        /// Drop Y coordinate.
        y: f32,
    },

    /// Primary button pressed.
    PointerDown {
        /// X coordinate.
        x: f32,
        /// Y coordinate.
        y: f32,
    },

    /// Pointer moved.
    PointerMove {
        /// X coordinate.
        x: f32,
        /// Y coordinate.
        y: f32,
    },

    /// Primary button released, anywhere on the page.
    PointerUp,

    /// Single click inside the zone.
    Click {
        /// X coordinate.
        x: f32,
        /// Y coordinate.
        y: f32,
    },

    /// Double click inside the zone.
    DoubleClick {
        /// X coordinate.
        x: f32,
        /// Y coordinate.
        y: f32,
    },

    /// Key pressed anywhere on the page.
    Key {
        /// Key name (`KeyboardEvent.key`).
        key: String,
    },
}

/// What handling an event did to the decorator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventOutcome {
    /// Nothing changed.
    Ignored,
    /// A decoration was placed.
    Placed(DecorationId, DecorationKind),
    /// A drag started on a decoration.
    DragStarted(DecorationId),
    /// The dragged decoration moved.
    Moved(DecorationId),
    /// The drag ended.
    DragEnded(DecorationId),
    /// A decoration was selected.
    Selected(DecorationId),
    /// The selection was cleared.
    SelectionCleared,
    /// A decoration was removed.
    Removed(DecorationId),
}

impl EventOutcome {
    /// Whether the view needs repainting.
    #[must_use]
    pub fn is_visible_change(&self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_use_tagged_json() {
        let event = InputEvent::PaletteDrop {
            kind: "star".to_string(),
            x: 10.0,
            y: 20.0,
        };
        let json = serde_json::to_string(&event).expect("serialize");
        assert!(json.contains("\"type\":\"PaletteDrop\""));
        let back: InputEvent = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, event);
    }

    #[test]
    fn ignored_is_not_visible() {
        assert!(!EventOutcome::Ignored.is_visible_change());
        assert!(EventOutcome::SelectionCleared.is_visible_change());
    }
}
