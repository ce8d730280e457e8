//! Named-route navigation with back-stack clearing.

use crate::mode::Mode;

/// Navigation stack over the two named destinations.
///
/// Navigating to a destination first removes any existing entries for that
/// destination before pushing it, so repeated activations of the same tab
/// never stack duplicate screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Router {
    stack: Vec<Mode>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new(Mode::Home)
    }
}

impl Router {
    pub fn new(start: Mode) -> Self {
        Self {
            stack: vec![start.screen()],
        }
    }

    pub fn current(&self) -> Mode {
        self.stack.last().copied().unwrap_or_default()
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn navigate(&mut self, dest: Mode) {
        let dest = dest.screen();
        self.stack.retain(|m| *m != dest);
        self.stack.push(dest);
    }

    /// Pops the current destination. Returns `false` when the stack is
    /// exhausted, i.e. the caller should quit.
    pub fn pop(&mut self) -> bool {
        self.stack.pop();
        !self.stack.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_starts_at_home() {
        let router = Router::default();
        assert_eq!(router.current(), Mode::Home);
        assert_eq!(router.depth(), 1);
    }

    #[test]
    fn test_navigate_pushes_destination() {
        let mut router = Router::default();
        router.navigate(Mode::Profile);
        assert_eq!(router.current(), Mode::Profile);
        assert_eq!(router.depth(), 2);
    }

    #[test]
    fn test_repeated_taps_do_not_stack_duplicates() {
        let mut router = Router::default();
        router.navigate(Mode::Profile);
        router.navigate(Mode::Profile);
        router.navigate(Mode::Profile);
        assert_eq!(router.current(), Mode::Profile);
        assert_eq!(router.depth(), 2);
    }

    #[test]
    fn test_navigating_home_clears_earlier_home_entry() {
        let mut router = Router::default();
        router.navigate(Mode::Profile);
        router.navigate(Mode::Home);
        assert_eq!(router.current(), Mode::Home);
        assert_eq!(router.depth(), 2);
        assert!(router.pop());
        assert_eq!(router.current(), Mode::Profile);
    }

    #[test]
    fn test_pop_signals_quit_on_last_entry() {
        let mut router = Router::default();
        assert!(!router.pop());
    }

    #[test]
    fn test_search_mode_is_not_a_destination() {
        let mut router = Router::default();
        router.navigate(Mode::Search);
        assert_eq!(router.current(), Mode::Home);
        assert_eq!(router.depth(), 1);
    }
}
