//! Terminal rendering module.
//!
//! A small, game-oriented presentation layer: `GameView` projects engine
//! snapshots into text lines (pure, testable), `TerminalRenderer` flushes
//! them to the terminal. The engine never sees either.

pub mod game_view;
pub mod renderer;

pub use game_view::GameView;
pub use renderer::TerminalRenderer;
