use egui::{Pos2, Rect};

/// Placed dots stay this far (in percent) from every edge so they never overlap the border.
pub const EDGE_MARGIN: f32 = 2.0;

/// Converts between screen pixels and percent-of-surface coordinates.
pub struct CoordinateMapper;

impl CoordinateMapper {
    /// Maps a click to a clamped percent position.
    ///
    /// Returns `None` when the surface has not been laid out yet or has no area,
    /// in which case the click should be dropped.
    pub fn to_normalized(pointer: Pos2, surface: Option<Rect>) -> Option<Pos2> {
        let raw = Self::to_percent(pointer, surface?)?;
        Some(Pos2::new(clamp_to_margin(raw.x), clamp_to_margin(raw.y)))
    }

    /// Percent position without the edge clamp, for the hover readout.
    pub fn to_percent(pointer: Pos2, surface: Rect) -> Option<Pos2> {
        if surface.width() <= 0.0 || surface.height() <= 0.0 {
            return None;
        }
        let x = ((pointer.x - surface.left()) / surface.width()) * 100.0;
        let y = ((pointer.y - surface.top()) / surface.height()) * 100.0;
        Some(Pos2::new(x, y))
    }

    pub fn to_screen(normalized: Pos2, surface: Rect) -> Pos2 {
        Pos2::new(
            surface.left() + normalized.x / 100.0 * surface.width(),
            surface.top() + normalized.y / 100.0 * surface.height(),
        )
    }
}

fn clamp_to_margin(value: f32) -> f32 {
    value.clamp(EDGE_MARGIN, 100.0 - EDGE_MARGIN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    fn surface() -> Rect {
        Rect::from_min_size(pos2(100.0, 50.0), egui::vec2(400.0, 300.0))
    }

    #[test]
    fn maps_inside_point() {
        let pos = CoordinateMapper::to_normalized(pos2(140.0, 80.0), Some(surface())).unwrap();
        assert!((pos.x - 10.0).abs() < 1e-4);
        assert!((pos.y - 10.0).abs() < 1e-4);
    }

    #[test]
    fn clamps_to_margin() {
        let top_left = CoordinateMapper::to_normalized(pos2(100.0, 50.0), Some(surface())).unwrap();
        assert_eq!(top_left, pos2(2.0, 2.0));

        let outside = CoordinateMapper::to_normalized(pos2(900.0, 900.0), Some(surface())).unwrap();
        assert_eq!(outside, pos2(98.0, 98.0));

        let before = CoordinateMapper::to_normalized(pos2(-50.0, 60.0), Some(surface())).unwrap();
        assert_eq!(before.x, 2.0);
    }

    #[test]
    fn unmeasured_surface_ignores_click() {
        assert!(CoordinateMapper::to_normalized(pos2(140.0, 80.0), None).is_none());
    }

    #[test]
    fn degenerate_surface_ignores_click() {
        let flat = Rect::from_min_size(pos2(0.0, 0.0), egui::vec2(200.0, 0.0));
        assert!(CoordinateMapper::to_normalized(pos2(10.0, 0.0), Some(flat)).is_none());
    }

    #[test]
    fn screen_mapping_inverts_percent() {
        let screen = CoordinateMapper::to_screen(pos2(25.0, 50.0), surface());
        assert_eq!(screen, pos2(200.0, 200.0));

        let back = CoordinateMapper::to_percent(screen, surface()).unwrap();
        assert!((back.x - 25.0).abs() < 1e-4);
        assert!((back.y - 50.0).abs() < 1e-4);
    }

    #[test]
    fn clamped_range_holds_for_sweep() {
        for step in -10..=60 {
            let p = pos2(step as f32 * 10.0, step as f32 * 7.0);
            let pos = CoordinateMapper::to_normalized(p, Some(surface())).unwrap();
            assert!((2.0..=98.0).contains(&pos.x));
            assert!((2.0..=98.0).contains(&pos.y));
        }
    }
}
