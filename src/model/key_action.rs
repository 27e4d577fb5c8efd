//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Show the previous item. Default: h/←
    Previous,
    /// Show the next item. Default: l/→
    Next,
    /// Jump to an item by zero-based index. Default: 1-9
    JumpTo(usize),
    /// Toggle auto-advance on/off. Default: Space
    ToggleAutoplay,
    /// Exit the application. Default: q/Esc
    Quit,
}
