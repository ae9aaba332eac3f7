use std::fmt;

use serde::{Deserialize, Serialize};

/// Names an attribute channel a field value is drawn from.
/// Game types keep one allowed-value set per channel.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Channel {
    /// Color channel (present in every game flavor)
    Color,
    /// Shape channel (dual-attribute games only)
    Shape,
}

/// Represents a single peg of a code or guess.
/// Fields compare by structural equality of their attribute values, never by identity.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Field {
    /// Single-attribute peg carrying one color token
    Color(String),
    /// Dual-attribute peg carrying independent shape and color tokens
    ShapeColor {
        /// Shape token (e.g. "Circle")
        shape: String,
        /// Color token (e.g. "Red")
        color: String,
    },
}

impl Field {
    pub fn color(token: impl Into<String>) -> Self {
        Field::Color(token.into())
    }

    pub fn shape_color(shape: impl Into<String>, color: impl Into<String>) -> Self {
        Field::ShapeColor {
            shape: shape.into(),
            color: color.into(),
        }
    }

    /// The field's value on `channel`, or `None` if the field has no such channel.
    pub fn value(&self, channel: Channel) -> Option<&str> {
        match (self, channel) {
            (Field::Color(c), Channel::Color) => Some(c),
            (Field::Color(_), Channel::Shape) => None,
            (Field::ShapeColor { color, .. }, Channel::Color) => Some(color),
            (Field::ShapeColor { shape, .. }, Channel::Shape) => Some(shape),
        }
    }

    pub fn is_dual(&self) -> bool {
        matches!(self, Field::ShapeColor { .. })
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Color(c) => write!(f, "{}", c),
            Field::ShapeColor { shape, color } => write!(f, "{}/{}", shape, color),
        }
    }
}
