// config.rs - Window and drawing constants

use egui::Color32;

pub struct Config;

impl Config {
    pub const WINDOW_SIZE: [f32; 2] = [900.0, 860.0];

    pub const CELL_SIZE: f32 = 20.0;
    pub const CELL_SPACING: f32 = 1.0;
    pub const CELL_ROUNDING: f32 = 0.0;

    pub const LIVE_COLOR: Color32 = Color32::from_rgb(0, 255, 255); // cyan
    pub const DEAD_COLOR: Color32 = Color32::from_rgb(238, 238, 238);
    pub const BORDER_COLOR: Color32 = Color32::BLACK;
    pub const BORDER_WIDTH: f32 = 1.0;

    pub const HOW_TO_PLAY: &str = "Click a cell to bring it to life or kill it. \
        Start runs the simulation, Seed fills the board at random.";
    pub const RULES: &str = "Any live cell with two or three live neighbours survives; \
        any dead cell with three becomes alive; every other cell dies or stays dead.";
}
