//! Last Mile warehouse game
//!
//! A timed grid-logistics game engine: drive a forklift, pick items in
//! order, deliver them at the exit. Rendering and device handling live
//! outside the engine.

pub mod engine;
pub mod input;
pub mod script;
