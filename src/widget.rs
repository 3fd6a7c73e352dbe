use crate::canvas::Canvas;
use crate::config::WidgetConfig;
use crate::coordinate::CoordinateMapper;
use crate::initializer::Initializer;
use crate::marker::{Marker, MarkerId};
use crate::palette::{ColorSelector, PaletteColor};
use crate::store::MarkerStore;
use egui::{Pos2, Rect};
use rand::Rng;

/// All state of one dot canvas. Lives as long as the window that hosts it.
pub struct DotCanvas {
    config: WidgetConfig,
    store: MarkerStore,
    selector: ColorSelector,
    canvas: Canvas,
    initializer: Initializer,
}

impl DotCanvas {
    /// Starts empty; dots appear once the host calls [`DotCanvas::run_mount_effect`].
    pub fn new(config: WidgetConfig) -> Self {
        let initializer = Initializer::new(config.seed_count);
        Self {
            config,
            store: MarkerStore::default(),
            selector: ColorSelector::default(),
            canvas: Canvas::default(),
            initializer,
        }
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn markers(&self) -> &[Marker] {
        self.store.as_slice()
    }

    pub fn count(&self) -> usize {
        self.store.len()
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn active_color(&self) -> Option<PaletteColor> {
        self.config.color_selection.then(|| self.selector.active())
    }

    /// Seeds the random dots. Safe to call every frame; only the first call does anything.
    pub fn run_mount_effect<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        self.initializer.run_once(&mut self.store, rng)
    }

    pub fn measure_surface(&mut self, rect: Rect) {
        self.canvas.measure(rect);
    }

    /// Places a dot under `pointer`, tagged with the active color when color selection is on.
    pub fn handle_click(&mut self, pointer: Pos2) -> Option<MarkerId> {
        let Some(position) = CoordinateMapper::to_normalized(pointer, self.canvas.screen_rect()) else {
            tracing::trace!(x = pointer.x, y = pointer.y, "click before surface was measured");
            return None;
        };
        let color = self.active_color();
        Some(self.store.append(position, color).id)
    }

    pub fn undo(&mut self) -> Option<Marker> {
        self.store.undo_last()
    }

    pub fn select_color(&mut self, color: PaletteColor) {
        self.selector.select(color);
    }

    /// Unclamped percent position of the pointer, if it is over the surface.
    pub fn hover_position(&self, pointer: Pos2) -> Option<Pos2> {
        let rect = self.canvas.screen_rect()?;
        if !rect.contains(pointer) {
            return None;
        }
        CoordinateMapper::to_percent(pointer, rect)
    }
}
