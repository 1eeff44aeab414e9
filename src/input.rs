//! Mouse input as reported by the host and as seen by the game.

/// Pointer event delivered by the window procedure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseEvent {
    Move,
    LeftButtonUp,
    LeftButtonDown,
    RightButtonUp,
    RightButtonDown,
}

/// Mouse button passed to the game hooks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}
