//! Conway's Game of Life on a fixed-size toroidal grid.
//!
//! [`Grid`] holds the cells and computes generations, [`AnimationDriver`] turns a tokio timer
//! into ticks, and [`Game`] ties both to a generation counter and the user actions.

mod config;
mod driver;
mod error;
mod game;
mod grid;
pub mod patterns;

pub use config::Config;
pub use driver::{AnimationDriver, DriverState};
pub use error::{LifeError, Result};
pub use game::Game;
pub use grid::{Dimensions, Grid, next_state};
pub use patterns::{PATTERNS, Pattern};
