//! Falling-block puzzle engine with a terminal front-end.
//!
//! The engine is pure and deterministic: it owns a fixed 10x20 occupancy
//! grid and the falling piece, and advances only when the host calls into
//! it. Rendering, the gravity clock, and keyboard handling live outside the
//! core and speak to it through three entry points and an immutable
//! snapshot.
//!
//! # Module structure
//!
//! - [`core`]: board, shape matrices, engine state machine, snapshots
//! - [`input`]: key-event to command mapping for the terminal front-end
//! - [`term`]: snapshot rendering into a terminal
//! - [`types`]: shared constants and enums
//!
//! # Game rules
//!
//! - Gravity moves the piece down one row per tick (500ms in the binary);
//!   a blocked descent locks the piece, clears full rows, and spawns the
//!   next one.
//! - Moves and rotations apply only when the result fits; rejections are
//!   silent. There are no wall kicks.
//! - Shape selection is an unweighted uniform draw over the seven kinds.
//! - A spawn-position collision ends the game. The engine freezes until
//!   [`Engine::reset`](crate::core::Engine::reset); it never clears the board on
//!   its own.
//!
//! # Example
//!
//! ```
//! use blockfall::core::Engine;
//! use blockfall::types::Command;
//!
//! let mut engine = Engine::new(12345);
//!
//! engine.input(Command::Left);
//! engine.input(Command::Rotate);
//! engine.tick();
//!
//! let snapshot = engine.snapshot();
//! assert!(!snapshot.over);
//! ```

pub mod core;
pub mod input;
pub mod term;
pub mod types;
