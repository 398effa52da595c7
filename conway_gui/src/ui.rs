// ui.rs - Controls, board painting and statistics for the viewer

use eframe::egui;
use egui::{Color32, Rect, Stroke};
use std::time::{Duration, Instant};

use crate::LifeApp;
use conway::{Cell, PATTERNS};

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Auto-update if running
        self.tick(Instant::now());

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life (Toroidal)");

            // Controls
            ui.horizontal(|ui| {
                let button_text = if self.is_running { "⏸ Pause" } else { "▶ Start" };
                let can_run = self.is_running || !self.sim().is_finished();
                if ui.add_enabled(can_run, egui::Button::new(button_text)).clicked() {
                    self.toggle_running();
                }

                if ui.add_enabled(!self.is_running && can_run, egui::Button::new("⏭ Step")).clicked() {
                    self.step_once();
                }

                if ui.button("⏹ Clear").clicked() {
                    self.clear_grid();
                }

                if ui.button("🎲 Random").clicked() {
                    self.apply_random_pattern();
                }

                ui.separator();

                // Pattern dropdown
                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply Pattern").clicked() {
                    self.apply_selected_pattern();
                }

                ui.separator();

                let sim = self.sim();
                ui.label(format!("Generation: {} / {}", sim.generation(), sim.config().iterations));
                if let Some(at) = sim.cycle_at() {
                    ui.label(format!("Cycle at {at}"));
                }
            });

            ui.separator();

            // Speed control
            ui.horizontal(|ui| {
                ui.label("Speed:");
                let mut speed = 1000.0 / self.update_interval.as_millis().max(1) as f32;
                if ui.add(egui::Slider::new(&mut speed, 0.5..=90.0).suffix(" gen/sec")).changed() {
                    self.update_interval = Duration::from_millis((1000.0 / speed) as u64);
                }

                ui.separator();

                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.view.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.view.dead_color);
            });

            ui.separator();

            ui.label("The grid wraps around: cells leaving one edge come back on the opposite one.");
            ui.label("Click cells to toggle them while paused. Editing restarts the generation count.");

            ui.separator();

            let grid = self.sim().grid();
            let view = self.view;
            let mut clicked = None;

            egui::ScrollArea::both().max_height((ui.available_height() - 40.0).max(120.0)).show(ui, |ui| {
                let (response, painter) = ui.allocate_painter(view.board_size(grid), egui::Sense::click());
                let origin = response.rect.min;

                // Dead background, then only the alive cells
                painter.rect_filled(response.rect, 0.0, Color32::BLACK);
                for y in 0..grid.get() {
                    for x in 0..grid.get() {
                        painter.rect_filled(view.tile(origin, Cell::new(x, y)), 1.0, view.dead_color);
                    }
                }
                for cell in self.sim().board().iter() {
                    let rect: Rect = view.tile(origin, cell);
                    painter.rect_filled(rect, 1.0, view.live_color);
                    painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(60)));
                }

                if response.clicked() {
                    if let Some(pos) = response.interact_pointer_pos() {
                        clicked = view.cell_at(origin, pos, grid);
                    }
                }
            });

            if let Some(cell) = clicked {
                self.toggle_cell(cell);
            }

            ui.separator();

            // Statistics
            let live = self.sim().board().population() as u64;
            let area = grid.area();
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {live}"));
                ui.label(format!("Dead cells: {}", area - live));
                ui.label(format!("Population: {:.1}%", live as f32 / area as f32 * 100.0));
                let history = self.sim().history();
                ui.label(format!("Alive cell-generations: {}", history.total_alive()));
                ui.label(format!("Dead cell-generations: {}", history.total_dead(grid)));
            });
        });

        // Request repaint if running to keep animation smooth
        if self.is_running {
            ctx.request_repaint_after(self.update_interval.saturating_sub(self.last_update.elapsed()));
        }
    }
}
