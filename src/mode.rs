use serde::{Deserialize, Serialize};

/// Keybinding context for the currently focused screen.
///
/// `Search` is the home screen with the search bar focused; it is not a
/// navigable destination of its own.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    Home,
    Search,
    Profile,
}

impl Mode {
    /// The screen a mode belongs to, collapsing `Search` onto `Home`.
    pub fn screen(&self) -> Mode {
        match self {
            Mode::Home | Mode::Search => Mode::Home,
            Mode::Profile => Mode::Profile,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_search_collapses_onto_home() {
        assert_eq!(Mode::Search.screen(), Mode::Home);
        assert_eq!(Mode::Home.screen(), Mode::Home);
        assert_eq!(Mode::Profile.screen(), Mode::Profile);
    }
}
