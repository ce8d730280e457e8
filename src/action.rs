use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};
use strum::Display;

use crate::mode::Mode;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Display, Deserialize)]
pub enum Action {
    Tick,
    Render,
    Resize(u16, u16),
    Suspend,
    Resume,
    Quit,
    Refresh,
    Error(String),
    Help,
    Key(KeyEvent),
    Navigate(Mode),
    Back,
    OpenSearch,
    CloseSearch,
    QueryChanged(String),
    ScrollLeft,
    ScrollRight,
}
