use egui::{Color32, Painter, Rect, Rounding, Shape, Stroke, Vec2};

const DASH_LENGTH: f32 = 8.0;
const GAP_LENGTH: f32 = 6.0;

/// The clickable surface. Its on-screen rect is only known once a frame has laid it out.
pub struct Canvas {
    aspect_ratio: f32,
    screen_rect: Option<Rect>,
}

impl Canvas {
    pub fn new(aspect_ratio: f32) -> Self {
        Self {
            aspect_ratio,
            screen_rect: None,
        }
    }

    pub fn screen_rect(&self) -> Option<Rect> {
        self.screen_rect
    }

    pub fn measure(&mut self, rect: Rect) {
        self.screen_rect = Some(rect);
    }

    /// Largest size with the surface's aspect ratio that fits in `available`.
    pub fn fit_size(&self, available: Vec2) -> Vec2 {
        let width = available.x.max(0.0);
        let height = width / self.aspect_ratio;
        if height <= available.y || available.y <= 0.0 {
            Vec2::new(width, height)
        } else {
            Vec2::new(available.y * self.aspect_ratio, available.y)
        }
    }

    pub fn paint_background(&self, painter: &Painter, rect: Rect) {
        painter.rect_filled(rect, Rounding::same(6.0), Color32::WHITE);

        let border = Stroke::new(2.0, Color32::from_rgb(226, 232, 240));
        let corners = [
            rect.left_top(),
            rect.right_top(),
            rect.right_bottom(),
            rect.left_bottom(),
            rect.left_top(),
        ];
        painter.extend(Shape::dashed_line(&corners, border, DASH_LENGTH, GAP_LENGTH));
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(4.0 / 3.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unmeasured() {
        assert!(Canvas::default().screen_rect().is_none());
    }

    fn assert_close(actual: Vec2, expected: Vec2) {
        assert!((actual - expected).length() < 1e-3, "{actual:?} != {expected:?}");
    }

    #[test]
    fn fits_width_when_tall_enough() {
        let size = Canvas::default().fit_size(Vec2::new(400.0, 1000.0));
        assert_close(size, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn fits_height_when_short() {
        let size = Canvas::default().fit_size(Vec2::new(800.0, 300.0));
        assert_close(size, Vec2::new(400.0, 300.0));
    }
}
