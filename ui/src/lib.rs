#![warn(clippy::all, rust_2018_idioms)]

//! egui frontend for the OctoFit tracker collections.

pub mod app;
pub mod state;
pub mod widgets;

pub use app::OctofitApp;
