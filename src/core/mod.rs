//! Core module - pure game logic with no external dependencies
//!
//! This module contains all the game rules and state management. It has
//! zero dependencies on UI, timers, or I/O.

pub mod board;
pub mod engine;
pub mod rng;
pub mod shape;
pub mod snapshot;

// Re-export commonly used types
pub use board::Board;
pub use engine::{Engine, Piece};
pub use rng::{ShapePicker, SimpleRng};
pub use shape::Shape;
pub use snapshot::{ActiveSnapshot, GameSnapshot};
