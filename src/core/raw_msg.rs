use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

/// Raw external events before translation into domain messages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RawMsg {
    // System events
    Quit,
    Suspend,
    Resume,
    Resize(u16, u16),
    Tick,
    Render,

    // User input
    Key(KeyEvent),
    Paste(String),

    // Requested path, e.g. from the command line
    Navigate(String),

    Error(String),
}

impl RawMsg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(self, RawMsg::Tick | RawMsg::Render)
    }
}

#[cfg(test)]
mod tests {
    use color_eyre::Result;
    use crossterm::event::{KeyCode, KeyModifiers};

    use super::*;

    #[test]
    fn test_raw_msg_frequent_detection() {
        assert!(RawMsg::Tick.is_frequent());
        assert!(RawMsg::Render.is_frequent());
        assert!(!RawMsg::Quit.is_frequent());
        assert!(!RawMsg::Navigate("/".into()).is_frequent());
    }

    #[test]
    fn test_raw_msg_serialization() -> Result<()> {
        let msg = RawMsg::Key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE));
        let serialized = serde_json::to_string(&msg)?;
        let deserialized: RawMsg = serde_json::from_str(&serialized)?;
        assert_eq!(msg, deserialized);
        Ok(())
    }
}
