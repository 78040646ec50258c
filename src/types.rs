//! Shared types and constants.
//!
//! Pure data with no external dependencies, usable from the core logic,
//! the terminal front-end, tests, and benches alike.
//!
//! # Board dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//!
//! Both are fixed at compile time; nothing in the engine renegotiates them.
//!
//! # Timing
//!
//! Gravity advances the falling piece once per `DROP_INTERVAL_MS`. The
//! engine itself holds no timers; the hosting event loop owns the clock and
//! calls [`Engine::tick`](crate::core::Engine::tick) on that cadence.

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Gravity interval in milliseconds (one downward step per 500ms)
pub const DROP_INTERVAL_MS: u64 = 500;

/// The seven canonical piece kinds.
///
/// Declaration order matches the uniform picker's index space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    T,
    S,
    Z,
    O,
    J,
    L,
}

impl ShapeKind {
    /// All kinds, in declaration order.
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::T,
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::O,
        ShapeKind::J,
        ShapeKind::L,
    ];
}

/// Player intents applied to the engine.
///
/// Both human input and any scripted driver speak this enum. Rejected
/// commands (blocked moves, colliding rotations) are silent no-ops, not
/// errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Shift the falling piece one cell left
    Left,
    /// Shift the falling piece one cell right
    Right,
    /// Drop the falling piece one cell (same transition as a gravity tick)
    Down,
    /// Rotate the falling piece 90° clockwise in place
    Rotate,
}
