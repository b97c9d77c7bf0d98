//! Classic terminal Snake.
//!
//! The simulation core lives in [`game`], [`snake`], [`collision`] and
//! [`fruit`]; everything else is the terminal shell around it.

pub mod collision;
pub mod config;
pub mod fruit;
pub mod game;
pub mod input;
pub mod platform;
pub mod renderer;
pub mod snake;
pub mod terminal_runtime;
pub mod theme;
pub mod ui;
