use crossterm::event::KeyEvent;

/// Raw messages from the outside world, before translation into domain messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawMsg {
    Key(KeyEvent),
    Resize(u16, u16),
    Tick,
    Render,
    Quit,
    Error(String),
}

impl RawMsg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(self, RawMsg::Tick | RawMsg::Render)
    }
}
