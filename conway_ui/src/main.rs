// main.rs - Desktop front end for the toroidal Game of Life

use anyhow::{Context as _, Result, anyhow};
use conway::{Config as LifeConfig, Game};
use eframe::egui;
use egui::Color32;
use log::info;

mod config;
mod ui;

use config::Config;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // One worker is plenty: the runtime only drives the animation timer.
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("life-timer")
        .enable_time()
        .build()
        .context("failed to build the timer runtime")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(Config::WINDOW_SIZE),
        ..Default::default()
    };

    info!(
        "{}x{} board, one generation every {:?}",
        LifeConfig::ROWS,
        LifeConfig::COLS,
        LifeConfig::TICK_INTERVAL
    );
    eframe::run_native(
        "Game of Life",
        options,
        Box::new(move |_cc| Box::new(GameOfLife::new(runtime))),
    )
    .map_err(|e| anyhow!("failed to open the window: {e}"))
}

/// Front-end state. All game mutation happens here, on the UI thread.
pub struct GameOfLife {
    pub game: Game,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub selected_pattern: usize,

    runtime: tokio::runtime::Runtime,
}

impl GameOfLife {
    pub fn new(runtime: tokio::runtime::Runtime) -> Self {
        Self {
            game: Game::default(),
            live_color: Config::LIVE_COLOR,
            dead_color: Config::DEAD_COLOR,
            selected_pattern: 0,
            runtime,
        }
    }

    /// Start/Stop; the timer task repaints the window after every tick.
    pub fn toggle_running(&mut self, ctx: &egui::Context) {
        let ctx = ctx.clone();
        self.game
            .toggle_running(self.runtime.handle(), move || ctx.request_repaint());
    }
}
