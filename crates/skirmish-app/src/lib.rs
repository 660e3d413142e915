//! SKIRMISH headless application.
//!
//! This crate wires the simulation into a fixed-rate game loop thread
//! and exposes a shared snapshot slot for a driver to poll.

pub mod game_loop;
pub mod state;

pub use skirmish_core as core;
