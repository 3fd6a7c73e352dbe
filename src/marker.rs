use crate::palette::PaletteColor;
use egui::Pos2;
use serde::Serialize;
use std::fmt;

/// Identity of a marker within one widget lifetime. Only used to tell
/// markers apart, never ordered or compared for layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct MarkerId(u64);

impl MarkerId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for MarkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dot-{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub id: MarkerId,
    pub x: f32, // Percent of surface width
    pub y: f32, // Percent of surface height
    pub color: Option<PaletteColor>,
}

impl Marker {
    pub fn new(id: MarkerId, position: Pos2, color: Option<PaletteColor>) -> Self {
        Self {
            id,
            x: position.x,
            y: position.y,
            color,
        }
    }

    pub fn position(&self) -> Pos2 {
        Pos2::new(self.x, self.y)
    }

    /// Palette entry used to paint this marker; untagged markers use the default.
    pub fn display_color(&self) -> PaletteColor {
        self.color.unwrap_or_default()
    }
}
