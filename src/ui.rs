use crate::config::UndoStyle;
use crate::palette::PaletteColor;
use egui::{Color32, Painter, Pos2, Response, RichText, Rounding, Sense, Stroke, Ui};

pub const DOT_RADIUS: f32 = 8.0;
const SWATCH_SIZE: f32 = 28.0;

#[derive(Default)]
pub struct UiState {
    // Last clipboard outcome, shown under the count
    pub status: Option<String>,

    // Percent position under the cursor, if hovering the surface
    pub cursor_position: Option<Pos2>,
}

pub fn undo_button(ui: &mut Ui, style: UndoStyle) -> Response {
    match style {
        UndoStyle::Plain => ui.button("Undo"),
        UndoStyle::Styled => {
            let label = RichText::new("Undo").size(18.0).strong().color(Color32::WHITE);
            ui.add(
                egui::Button::new(label)
                    .fill(PaletteColor::Blue.fill())
                    .stroke(Stroke::new(1.0, PaletteColor::Blue.highlight()))
                    .rounding(Rounding::same(12.0))
                    .min_size(egui::vec2(96.0, 44.0)),
            )
        }
    }
}

/// Draws one swatch per palette color. Returns the color clicked this frame, if any.
pub fn palette_row(ui: &mut Ui, active: PaletteColor) -> Option<PaletteColor> {
    let mut picked = None;
    ui.horizontal(|ui| {
        for color in PaletteColor::ALL {
            let (rect, response) = ui.allocate_exact_size(egui::vec2(SWATCH_SIZE, SWATCH_SIZE), Sense::click());
            let center = rect.center();
            let radius = SWATCH_SIZE / 2.0 - 4.0;

            paint_dot(ui.painter(), center, radius, color);
            if color == active {
                ui.painter()
                    .circle_stroke(center, radius + 3.0, Stroke::new(2.5, Color32::from_rgb(15, 23, 42)));
            } else if response.hovered() {
                ui.painter()
                    .circle_stroke(center, radius + 3.0, Stroke::new(1.0, Color32::from_rgb(148, 163, 184)));
            }

            if response.on_hover_text(color.name()).clicked() {
                picked = Some(color);
            }
        }
    });
    picked
}

pub fn paint_dot(painter: &Painter, center: Pos2, radius: f32, color: PaletteColor) {
    painter.circle_filled(center, radius, color.fill());
    // Upper highlight stands in for the top-to-bottom gradient
    painter.circle_filled(
        center - egui::vec2(0.0, radius * 0.35),
        radius * 0.5,
        color.highlight().linear_multiply(0.8),
    );
}

pub fn count_label(count: usize) -> RichText {
    RichText::new(format!("Circles drawn: {count}"))
        .size(18.0)
        .strong()
        .color(Color32::from_rgb(71, 85, 105))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_label_reads_length() {
        assert_eq!(count_label(23).text(), "Circles drawn: 23");
        assert_eq!(count_label(0).text(), "Circles drawn: 0");
    }
}
