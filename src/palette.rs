use egui::Color32;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteColor {
    #[default]
    Blue,
    Red,
    Green,
    Purple,
    Orange,
    Pink,
}

impl PaletteColor {
    pub const ALL: [PaletteColor; 6] = [
        PaletteColor::Blue,
        PaletteColor::Red,
        PaletteColor::Green,
        PaletteColor::Purple,
        PaletteColor::Orange,
        PaletteColor::Pink,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PaletteColor::Blue => "Blue",
            PaletteColor::Red => "Red",
            PaletteColor::Green => "Green",
            PaletteColor::Purple => "Purple",
            PaletteColor::Orange => "Orange",
            PaletteColor::Pink => "Pink",
        }
    }

    /// Base fill of the dot.
    pub fn fill(self) -> Color32 {
        match self {
            PaletteColor::Blue => Color32::from_rgb(37, 99, 235),
            PaletteColor::Red => Color32::from_rgb(220, 38, 38),
            PaletteColor::Green => Color32::from_rgb(22, 163, 74),
            PaletteColor::Purple => Color32::from_rgb(147, 51, 234),
            PaletteColor::Orange => Color32::from_rgb(234, 88, 12),
            PaletteColor::Pink => Color32::from_rgb(219, 39, 119),
        }
    }

    /// Lighter tint drawn on top of the fill to fake the gradient.
    pub fn highlight(self) -> Color32 {
        match self {
            PaletteColor::Blue => Color32::from_rgb(96, 165, 250),
            PaletteColor::Red => Color32::from_rgb(248, 113, 113),
            PaletteColor::Green => Color32::from_rgb(74, 222, 128),
            PaletteColor::Purple => Color32::from_rgb(192, 132, 252),
            PaletteColor::Orange => Color32::from_rgb(251, 146, 60),
            PaletteColor::Pink => Color32::from_rgb(244, 114, 182),
        }
    }
}

/// Holds the color that the next placed dot will carry.
#[derive(Debug, Default)]
pub struct ColorSelector {
    active: PaletteColor,
}

impl ColorSelector {
    pub fn active(&self) -> PaletteColor {
        self.active
    }

    pub fn select(&mut self, color: PaletteColor) {
        if self.active != color {
            tracing::debug!(from = self.active.name(), to = color.name(), "color selected");
        }
        self.active = color;
    }
}
