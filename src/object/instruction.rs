//! Drawing instructions produced by barcode objects.
//!
//! Instructions are backend-neutral: a renderer walks the list in order and
//! places text or fills polygons. Every encoder emits the same format so the
//! renderer never needs to know which symbology it is drawing.

use serde::{Deserialize, Serialize};

/// Default foreground color (black).
pub const DEFAULT_COLOR: u32 = 0x000000;

/// A point in drawing units, origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point { x, y }
    }
}

/// Horizontal anchoring of a text instruction relative to its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }
}

impl std::fmt::Display for Alignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single unit of rendering output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Instruction {
    /// Place a string of text.
    Text {
        text: String,
        /// Font size in drawing units
        size: u32,
        position: Point,
        /// Font name or path; `None` lets the renderer pick its default
        font: Option<String>,
        color: u32,
        alignment: Alignment,
        /// Rotation in degrees
        orientation: f32,
    },

    /// Draw a polygon (bars are four-point polygons).
    Polygon {
        points: Vec<Point>,
        color: u32,
        filled: bool,
    },
}

impl Instruction {
    /// Text payload, if this is a text instruction.
    pub fn text(&self) -> Option<&str> {
        match self {
            Instruction::Text { text, .. } => Some(text),
            Instruction::Polygon { .. } => None,
        }
    }

    /// Short human-readable form, one line per instruction.
    pub fn describe(&self) -> String {
        match self {
            Instruction::Text {
                text,
                size,
                position,
                alignment,
                ..
            } => format!(
                "text   ({}, {}) size={} align={} {:?}",
                position.x, position.y, size, alignment, text
            ),
            Instruction::Polygon { points, filled, .. } => {
                let pts: Vec<String> = points
                    .iter()
                    .map(|p| format!("({}, {})", p.x, p.y))
                    .collect();
                format!(
                    "polygon {}{}",
                    pts.join(" "),
                    if *filled { "" } else { " (outline)" }
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_instruction_json_shape() {
        let instruction = Instruction::Text {
            text: "ERROR:".to_string(),
            size: 10,
            position: Point::new(5, 18),
            font: None,
            color: DEFAULT_COLOR,
            alignment: Alignment::Left,
            orientation: 0.0,
        };

        let json = serde_json::to_value(&instruction).unwrap();
        assert_eq!(json["type"], "text");
        assert_eq!(json["text"], "ERROR:");
        assert_eq!(json["alignment"], "left");
        assert_eq!(json["position"]["x"], 5);
        assert_eq!(json["position"]["y"], 18);
    }

    #[test]
    fn test_describe() {
        let bar = Instruction::Polygon {
            points: vec![(0, 0).into(), (1, 0).into(), (1, 10).into(), (0, 10).into()],
            color: DEFAULT_COLOR,
            filled: true,
        };
        assert_eq!(bar.describe(), "polygon (0, 0) (1, 0) (1, 10) (0, 10)");
        assert!(bar.text().is_none());
    }
}
