use crate::config::WidgetConfig;
use crate::coordinate::CoordinateMapper;
use crate::export::Clipboard;
use crate::ui::{self, UiState, DOT_RADIUS};
use crate::widget::DotCanvas;
use egui::{Color32, Context, CursorIcon, Key, Sense, Ui};

pub struct DotCanvasApp {
    widget: DotCanvas,
    ui_state: UiState,
    clipboard: Clipboard,
}

impl DotCanvasApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: WidgetConfig) -> Self {
        let mut style = (*cc.egui_ctx.style()).clone();
        style.spacing.item_spacing = egui::vec2(12.0, 12.0);
        style.visuals = egui::Visuals::light();
        style.visuals.panel_fill = Color32::from_rgb(243, 244, 248);
        cc.egui_ctx.set_style(style);

        Self {
            widget: DotCanvas::new(config),
            ui_state: UiState::default(),
            clipboard: Clipboard::new(),
        }
    }

    fn copy_dots(&mut self) {
        self.ui_state.status = Some(match self.clipboard.copy_dots(self.widget.markers()) {
            Ok(count) => format!("Copied {count} dots"),
            Err(err) => {
                tracing::warn!(error = %err, "copy failed");
                err.to_string()
            }
        });
    }

    fn draw_toolbar(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            let style = self.widget.config().undo_style;
            if ui::undo_button(ui, style).clicked() {
                self.widget.undo();
            }

            if let Some(active) = self.widget.active_color() {
                ui.separator();
                if let Some(color) = ui::palette_row(ui, active) {
                    self.widget.select_color(color);
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Copy").on_hover_text("Copy dots as JSON").clicked() {
                    self.copy_dots();
                }
            });
        });
    }

    // Paints the surface and dots, then turns a click into a placed dot
    fn draw_canvas(&mut self, ui: &mut Ui) {
        let size = self.widget.canvas().fit_size(ui.available_size() - egui::vec2(0.0, 60.0));
        let (response, painter) = ui.allocate_painter(size, Sense::click());
        let rect = response.rect;
        self.widget.measure_surface(rect);

        self.widget.canvas().paint_background(&painter, rect);
        for marker in self.widget.markers() {
            let center = CoordinateMapper::to_screen(marker.position(), rect);
            ui::paint_dot(&painter, center, DOT_RADIUS, marker.display_color());
        }

        self.ui_state.cursor_position = response
            .hover_pos()
            .and_then(|pos| self.widget.hover_position(pos));

        let response = response.on_hover_cursor(CursorIcon::Crosshair);
        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.widget.handle_click(pos);
            }
        }
    }

    fn draw_footer(&self, ui: &mut Ui) {
        ui.vertical_centered(|ui| {
            ui.label(ui::count_label(self.widget.count()));

            if self.widget.config().show_cursor_position {
                if let Some(pos) = self.ui_state.cursor_position {
                    ui.label(format!("x: {:.1}%  y: {:.1}%", pos.x, pos.y));
                }
            }
            if let Some(status) = &self.ui_state.status {
                ui.small(status);
            }
        });
    }
}

impl eframe::App for DotCanvasApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.modifiers.command && i.key_pressed(Key::Z)) {
            self.widget.undo();
        }

        egui::TopBottomPanel::top("toolbar")
            .frame(egui::Frame::none().fill(Color32::WHITE).inner_margin(16.0))
            .show(ctx, |ui| self.draw_toolbar(ui));

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_canvas(ui);
            self.draw_footer(ui);
        });

        // Seeding waits until the first frame is on screen
        if self.widget.run_mount_effect(&mut rand::rng()) {
            ctx.request_repaint();
        }
    }
}
