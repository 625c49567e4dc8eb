// ui.rs - Controls, board and statistics

use conway::patterns::PATTERNS;
use eframe::egui;
use egui::{Pos2, Rect, Stroke, Vec2};

use crate::{Config, GameOfLife};

/// Maps a pointer position inside the board to a (row, col) cell.
fn cell_at(origin: Pos2, pos: Pos2, rows: usize, cols: usize) -> Option<(usize, usize)> {
    let pitch = Config::CELL_SIZE + Config::CELL_SPACING;
    let offset = pos - origin;
    if offset.x < 0.0 || offset.y < 0.0 {
        return None;
    }
    let (row, col) = ((offset.y / pitch) as usize, (offset.x / pitch) as usize);
    (row < rows && col < cols).then_some((row, col))
}

impl eframe::App for GameOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply whatever the timer queued since the last frame
        self.game.pump();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Game of Life");
            ui.label(format!("Generation Count: {}", self.game.generation()));

            // Controls
            ui.horizontal(|ui| {
                let button_text = if self.game.is_running() { "Stop" } else { "Start" };
                if ui.button(button_text).clicked() {
                    self.toggle_running(ctx);
                }

                if ui.button("Clear").clicked() {
                    self.game.clear();
                }

                if ui.button("Seed").clicked() {
                    self.game.seed();
                }

                if ui.button("Step").clicked() {
                    self.game.step();
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
                    self.game.apply_pattern(&PATTERNS[self.selected_pattern]);
                }
            });

            ui.horizontal(|ui| {
                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            ui.separator();

            ui.label(Config::HOW_TO_PLAY);
            ui.label(Config::RULES);

            ui.separator();

            // Board
            let grid = self.game.grid();
            let (rows, cols) = (grid.rows(), grid.cols());
            let pitch = Config::CELL_SIZE + Config::CELL_SPACING;
            let total_size = Vec2::new(pitch * cols as f32, pitch * rows as f32);

            let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());
            let origin = response.rect.min;

            for (row, cells) in grid.iter_rows().enumerate() {
                for (col, &alive) in cells.iter().enumerate() {
                    let rect = Rect::from_min_size(
                        origin + Vec2::new(col as f32 * pitch, row as f32 * pitch),
                        Vec2::splat(Config::CELL_SIZE),
                    );
                    let color = if alive { self.live_color } else { self.dead_color };
                    painter.rect_filled(rect, Config::CELL_ROUNDING, color);
                    painter.rect_stroke(
                        rect,
                        Config::CELL_ROUNDING,
                        Stroke::new(Config::BORDER_WIDTH, Config::BORDER_COLOR),
                    );
                }
            }

            // Clicks edit the board even while running; the next tick sees the change
            if response.clicked() {
                if let Some((row, col)) = response
                    .interact_pointer_pos()
                    .and_then(|pos| cell_at(origin, pos, rows, cols))
                {
                    self.game.toggle_cell(row, col);
                }
            }

            ui.separator();

            // Statistics
            let total = rows * cols;
            let live = self.game.population();
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {}", live));
                ui.label(format!("Dead cells: {}", total - live));
                ui.label(format!("Population: {:.1}%", live as f32 / total as f32 * 100.0));
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_maps_to_cells() {
        let origin = Pos2::new(10.0, 10.0);
        let pitch = Config::CELL_SIZE + Config::CELL_SPACING;
        assert_eq!(cell_at(origin, origin, 30, 40), Some((0, 0)));
        assert_eq!(
            cell_at(origin, origin + Vec2::new(pitch * 2.5, pitch * 1.5), 30, 40),
            Some((1, 2))
        );
        assert_eq!(cell_at(origin, Pos2::new(5.0, 20.0), 30, 40), None);
        assert_eq!(
            cell_at(origin, origin + Vec2::new(pitch * 40.0, 0.0), 30, 40),
            None
        );
    }
}
