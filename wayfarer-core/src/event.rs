//! Terminal event types

use crossterm::event::{KeyEvent, MouseEvent};

/// A processed terminal event delivered to the application.
#[derive(Debug, Clone)]
pub enum EventKind {
    /// Keyboard event
    Key(KeyEvent),
    /// Mouse event other than scrolling
    Mouse(MouseEvent),
    /// Scroll event with position and direction
    Scroll { column: u16, row: u16, delta: isize },
    /// Terminal resize
    Resize(u16, u16),
    /// Periodic tick for animations (spinners)
    Tick,
}
