//! Conway's game of life on a toroidal grid.
//!
//! [`LifeEngine`] holds the simulation. [`Sim`] and [`View`] drive it from a
//! terminal, they are not needed to use the engine.

pub use utils::Pos;
mod utils;

pub use error::{EngineError, StateDefect};
mod error;

pub use world::{Cell, Grid};
pub mod world;

pub use engine::LifeEngine;
pub mod engine;

pub use config::{Config, ConfigError, Init};
pub mod config;

pub use sim::{Sim, SimHandle};
pub mod sim;

pub use view::View;
pub mod view;
