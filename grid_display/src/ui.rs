// ui.rs - egui front end for the viewer

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};
use std::time::{Duration, Instant};

use crate::GameOfLife;
use conway::PATTERNS;

impl eframe::App for GameOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Auto-update if running
        if self.is_running && self.last_update.elapsed() >= self.update_interval {
            self.update_generation();
            self.last_update = Instant::now();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            // Controls
            ui.horizontal(|ui| {
                let button_text = if self.is_running { "⏸ Pause" } else { "▶ Start" };
                if ui.button(button_text).clicked() {
                    self.is_running = !self.is_running;
                    if self.is_running {
                        self.last_update = Instant::now();
                    }
                }

                if ui.add_enabled(!self.is_running, egui::Button::new("⏭ Step")).clicked() {
                    self.update_generation();
                }

                if ui.button("⏹ Clear").clicked() {
                    self.is_running = false;
                    self.clear_grid();
                }

                if ui.button("🎲 Random").clicked() {
                    self.is_running = false;
                    self.apply_random_pattern();
                }

                ui.separator();

                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply Pattern").clicked() {
                    self.is_running = false;
                    self.apply_selected_pattern();
                }

                ui.separator();

                ui.label(format!("Generation: {}", self.generation));
            });

            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Speed:");
                let mut speed = 1000.0 / self.update_interval.as_millis().max(1) as f32;
                if ui.add(egui::Slider::new(&mut speed, 0.5..=90.0).suffix(" gen/sec")).changed() {
                    self.update_interval = Duration::from_millis((1000.0 / speed) as u64);
                }

                ui.separator();

                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            ui.separator();

            ui.label("Click cells to toggle them while paused. Cells past the edge stay dead.");

            ui.separator();

            let rows = self.grid.rows();
            let cols = self.grid.cols();
            let spacing = 0.5;
            // Shrink boxes so wide grids still fit the window
            let fit = (ui.available_width() + spacing) / cols.max(1) as f32 - spacing;
            let box_size = fit.clamp(2.0, 15.0);
            let pitch = box_size + spacing;

            let start_pos = ui.cursor().min;
            let total_size = Vec2::new(pitch * cols as f32 - spacing, pitch * rows as f32 - spacing)
                .max(Vec2::ZERO);

            let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());

            painter.rect_filled(Rect::from_min_size(start_pos, total_size), 0.0, Color32::BLACK);

            for row in 0..rows {
                for col in 0..cols {
                    let x = start_pos.x + col as f32 * pitch;
                    let y = start_pos.y + row as f32 * pitch;
                    let rect = Rect::from_min_size(egui::pos2(x, y), Vec2::splat(box_size));

                    let cell_color = if self.grid.get(row, col).unwrap_or(false) {
                        self.live_color
                    } else {
                        self.dead_color
                    };

                    painter.rect_filled(rect, 1.0, cell_color);
                    painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(60)));
                }
            }

            // Map a click straight to its cell
            if !self.is_running && response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let offset = pos - start_pos;
                    if offset.x >= 0.0 && offset.y >= 0.0 {
                        let col = (offset.x / pitch) as usize;
                        let row = (offset.y / pitch) as usize;
                        self.toggle_cell(row, col);
                    }
                }
            }

            ui.separator();

            let cells = rows * cols;
            let live_cells = self.grid.population();
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {}", live_cells));
                ui.label(format!("Dead cells: {}", cells - live_cells));
                ui.label(format!(
                    "Population: {:.1}%",
                    live_cells as f32 / cells.max(1) as f32 * 100.0
                ));
            });
        });

        // Keep animating while running
        if self.is_running {
            ctx.request_repaint();
        }
    }
}
