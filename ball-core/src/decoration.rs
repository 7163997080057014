//! Decorations - the stickers placed on the ball.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a placed decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DecorationId(Uuid);

impl DecorationId {
    /// Create a new unique decoration ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create from an existing UUID.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl Default for DecorationId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for DecorationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DecorationId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// The sticker types offered by the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecorationKind {
    /// Party popper.
    #[default]
    Party,
    /// Confetti ball.
    Confetti,
    /// Balloon.
    Balloon,
    /// Party horn.
    Horn,
    /// Firework burst.
    Firework,
    /// Clock striking midnight.
    Clock,
    /// Clinking champagne glasses.
    Champagne,
    /// Bottle with popping cork.
    #[serde(rename = "glass")]
    Bottle,
    /// Birthday cake.
    Cake,
    /// Wrapped gift.
    Gift,
    /// Star.
    Star,
    /// Crown.
    Crown,
    /// Sparkles.
    Sparkle,
    /// Glowing star.
    Glow,
    /// Trophy.
    Trophy,
}

impl DecorationKind {
    /// Every kind, in palette order.
    pub const ALL: [DecorationKind; 15] = [
        Self::Party,
        Self::Confetti,
        Self::Balloon,
        Self::Horn,
        Self::Firework,
        Self::Clock,
        Self::Champagne,
        Self::Bottle,
        Self::Cake,
        Self::Gift,
        Self::Star,
        Self::Crown,
        Self::Sparkle,
        Self::Glow,
        Self::Trophy,
    ];

    /// The emoji drawn for this kind.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Party => "🎉",
            Self::Confetti => "🎊",
            Self::Balloon => "🎈",
            Self::Horn => "🎺",
            Self::Firework => "🎆",
            Self::Clock => "🕛",
            Self::Champagne => "🥂",
            Self::Bottle => "🍾",
            Self::Cake => "🎂",
            Self::Gift => "🎁",
            Self::Star => "⭐",
            Self::Crown => "👑",
            Self::Sparkle => "✨",
            Self::Glow => "🌟",
            Self::Trophy => "🏆",
        }
    }

    /// Wire name used by the palette markup (`data-type`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Party => "party",
            Self::Confetti => "confetti",
            Self::Balloon => "balloon",
            Self::Horn => "horn",
            Self::Firework => "firework",
            Self::Clock => "clock",
            Self::Champagne => "champagne",
            Self::Bottle => "glass",
            Self::Cake => "cake",
            Self::Gift => "gift",
            Self::Star => "star",
            Self::Crown => "crown",
            Self::Sparkle => "sparkle",
            Self::Glow => "glow",
            Self::Trophy => "trophy",
        }
    }

    /// Look up a kind by its wire name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Look up a kind by its wire name, falling back to the default kind.
    #[must_use]
    pub fn from_name_or_default(name: &str) -> Self {
        Self::from_name(name).unwrap_or_else(|| {
            tracing::warn!("Unknown decoration kind '{name}', using default");
            Self::default()
        })
    }
}

impl std::fmt::Display for DecorationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Zone-local position of a decoration's top-left corner, in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Pixels from the zone's left edge.
    pub x: f32,
    /// Pixels from the zone's top edge.
    pub y: f32,
}

impl Position {
    /// Create a position.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A sticker placed in the decoration zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decoration {
    /// Unique identifier.
    pub id: DecorationId,
    /// Sticker type.
    pub kind: DecorationKind,
    /// Top-left corner in zone coordinates.
    pub position: Position,
    /// Whether this decoration carries the selection marker.
    pub selected: bool,
    /// Whether this decoration is being dragged.
    pub dragging: bool,
}

impl Decoration {
    /// Create a new decoration of the given kind.
    #[must_use]
    pub fn new(kind: DecorationKind, position: Position) -> Self {
        Self {
            id: DecorationId::new(),
            kind,
            position,
            selected: false,
            dragging: false,
        }
    }

    /// The emoji drawn for this decoration.
    #[must_use]
    pub fn glyph(&self) -> &'static str {
        self.kind.glyph()
    }

    /// Check if a zone point falls within this decoration's square footprint.
    #[must_use]
    pub fn contains_point(&self, x: f32, y: f32, size: f32) -> bool {
        let p = &self.position;
        x >= p.x && x <= p.x + size && y >= p.y && y <= p.y + size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn party_glyph() {
        assert_eq!(DecorationKind::Party.glyph(), "🎉");
        assert_eq!(DecorationKind::from_name_or_default("party").glyph(), "🎉");
    }

    #[test]
    fn unknown_name_falls_back_to_party() {
        assert_eq!(DecorationKind::from_name("unknown-xyz"), None);
        assert_eq!(
            DecorationKind::from_name_or_default("unknown-xyz").glyph(),
            DecorationKind::from_name_or_default("party").glyph()
        );
    }

    #[test]
    fn names_are_unique_and_parse_back() {
        for kind in DecorationKind::ALL {
            assert_eq!(DecorationKind::from_name(kind.name()), Some(kind));
        }
        let mut names: Vec<_> = DecorationKind::ALL.iter().map(|k| k.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), DecorationKind::ALL.len());
    }

    #[test]
    fn serde_uses_wire_names() {
        let json = serde_json::to_string(&DecorationKind::Bottle).expect("serialize");
        assert_eq!(json, "\"glass\"");
        let kind: DecorationKind = serde_json::from_str("\"firework\"").expect("deserialize");
        assert_eq!(kind, DecorationKind::Firework);
    }

    #[test]
    fn contains_point_uses_footprint() {
        let deco = Decoration::new(DecorationKind::Star, Position::new(10.0, 10.0));
        assert!(deco.contains_point(30.0, 30.0, 40.0));
        assert!(deco.contains_point(50.0, 50.0, 40.0));
        assert!(!deco.contains_point(51.0, 30.0, 40.0));
        assert!(!deco.contains_point(5.0, 30.0, 40.0));
    }

    #[test]
    fn decoration_id_parses_from_display() {
        let id = DecorationId::new();
        let parsed: DecorationId = id.to_string().parse().expect("parse id");
        assert_eq!(parsed, id);
        assert!("not-a-uuid".parse::<DecorationId>().is_err());
    }
}
