// main.rs - Interactive viewer for a bounded Game of Life grid

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use conway::{Grid, GridError, History, PATTERNS};
use eframe::egui;
use egui::Color32;
use tracing::info;

mod ui;

#[derive(Parser, Debug)]
#[command(name = "grid_display", version, about = "Watch Conway's Game of Life evolve")]
struct Cli {
    /// Grid height in cells.
    #[arg(long, default_value_t = 50)]
    rows: usize,

    /// Grid width in cells.
    #[arg(long, default_value_t = 50)]
    cols: usize,
}

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
    let cli = Cli::parse();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([800.0, 950.0]),
        ..Default::default()
    };

    let app = GameOfLife::new(cli.rows, cli.cols).context("sizing viewer grid")?;
    info!(rows = cli.rows, cols = cli.cols, "opening viewer");
    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |_cc| Box::new(app)),
    )
    .map_err(|err| anyhow::anyhow!("viewer failed: {err}"))
}

pub struct GameOfLife {
    pub grid: Grid,
    pub is_running: bool,
    pub last_update: Instant,
    pub update_interval: Duration,
    pub generation: u32,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub selected_pattern: usize,
    history: History,
    random_seed: u64,
}

impl GameOfLife {
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        Ok(Self {
            grid: Grid::try_new(rows, cols)?,
            is_running: false,
            last_update: Instant::now(),
            update_interval: Duration::from_millis(200),
            generation: 0,
            live_color: Color32::from_rgb(0, 200, 0),
            dead_color: Color32::from_rgb(40, 40, 40),
            selected_pattern: 0,
            history: History::default(),
            random_seed: 0,
        })
    }

    /// Advances one generation; pauses when the grid starts repeating itself.
    pub fn update_generation(&mut self) {
        self.grid = self.grid.advance();
        self.generation += 1;
        if self.history.observe(&self.grid) {
            info!(generation = self.generation, "grid is cycling, pausing");
            self.is_running = false;
        }
    }

    pub fn clear_grid(&mut self) {
        self.grid.clear();
        self.restart();
    }

    pub fn apply_selected_pattern(&mut self) {
        if let Some(pattern) = PATTERNS.get(self.selected_pattern) {
            self.grid.clear();
            let origin = pattern.centered_origin(self.grid.rows(), self.grid.cols());
            pattern.stamp(&mut self.grid, origin);
            self.restart();
        }
    }

    pub fn apply_random_pattern(&mut self) {
        // Every press draws a fresh fill
        self.random_seed = self.random_seed.wrapping_add(1);
        self.grid = Grid::random(self.grid.rows(), self.grid.cols(), self.random_seed);
        self.restart();
    }

    pub fn toggle_cell(&mut self, row: usize, col: usize) {
        let _ = self.grid.toggle(row, col);
        self.history.reset();
    }

    fn restart(&mut self) {
        self.generation = 0;
        self.history.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stepping_a_blinker_pauses_once_it_cycles() {
        let mut game = GameOfLife::new(5, 5).unwrap();
        game.selected_pattern = PATTERNS.iter().position(|p| p.name == "Blinker").unwrap();
        game.apply_selected_pattern();
        let start = game.grid.clone();
        game.is_running = true;

        game.update_generation();
        game.update_generation();
        assert!(game.is_running);
        game.update_generation();
        assert!(!game.is_running);
        assert_eq!(game.generation, 3);
        assert_ne!(game.grid, start);
    }

    #[test]
    fn toggling_outside_the_grid_is_ignored() {
        let mut game = GameOfLife::new(3, 3).unwrap();
        game.toggle_cell(1, 1);
        game.toggle_cell(7, 7);
        assert_eq!(game.grid.population(), 1);
    }

    #[test]
    fn random_presses_draw_different_grids() {
        let mut game = GameOfLife::new(12, 12).unwrap();
        game.apply_random_pattern();
        let first = game.grid.clone();
        game.apply_random_pattern();
        assert_ne!(game.grid, first);
        assert_eq!(game.generation, 0);
    }

    #[test]
    fn oversized_viewer_grid_is_an_error() {
        assert!(matches!(
            GameOfLife::new(usize::MAX, 2),
            Err(GridError::Size { .. })
        ));
    }

    #[test]
    fn clear_resets_generation() {
        let mut game = GameOfLife::new(6, 6).unwrap();
        game.apply_random_pattern();
        game.update_generation();
        game.clear_grid();
        assert_eq!(game.generation, 0);
        assert_eq!(game.grid.population(), 0);
        assert_eq!((game.grid.rows(), game.grid.cols()), (6, 6));
    }
}
