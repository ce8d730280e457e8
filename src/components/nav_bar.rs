use color_eyre::eyre::Result;
use ratatui::{prelude::*, widgets::*};

use super::Component;
use crate::{
    action::Action,
    config::Config,
    mode::Mode,
    resources::{Resources, StringRes},
    tui::Frame,
};

/// Bottom navigation bar, drawn over the last two rows of every screen.
/// One tab per destination; the tab for the current screen is highlighted.
#[derive(Default)]
pub struct NavBar {
    config: Config,
    resources: Resources,
    mode: Mode,
    searching: bool,
}

impl NavBar {
    pub fn new() -> Self {
        Self::default()
    }

    fn active_style(&self) -> Style {
        self.config
            .styles
            .get(&self.mode)
            .and_then(|styles| styles.get("nav_bar_active"))
            .copied()
            .unwrap_or_else(|| Style::default().reversed())
    }

    fn hint(&self) -> &'static str {
        if self.searching {
            "type to search, <enter>/<esc> to close"
        } else {
            match self.mode.screen() {
                Mode::Home => "</> search, <tab> profile, <q> quit",
                _ => "<tab> home, <backspace> back, <q> quit",
            }
        }
    }
}

impl Component for NavBar {
    fn register_config_handler(&mut self, config: Config) -> Result<()> {
        self.resources = Resources::new(config.locale);
        self.config = config;
        Ok(())
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::Navigate(mode) => {
                self.mode = mode;
                self.searching = false;
            }
            Action::OpenSearch => self.searching = true,
            Action::CloseSearch => self.searching = false,
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);

        f.render_widget(Clear, chunks[1]);
        f.render_widget(Clear, chunks[2]);

        let labels = vec![
            self.resources.string(StringRes::BottomNavigationHome),
            self.resources.string(StringRes::BottomNavigationProfile),
        ];
        let selected = match self.mode.screen() {
            Mode::Profile => 1,
            _ => 0,
        };
        let tabs = Tabs::new(labels)
            .select(selected)
            .highlight_style(self.active_style())
            .divider(symbols::line::VERTICAL);
        f.render_widget(tabs, chunks[1]);

        let hint = Paragraph::new(self.hint()).style(Style::default().dim());
        f.render_widget(hint, chunks[2]);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ratatui::backend::TestBackend;

    use super::*;

    fn render(nav_bar: &mut NavBar) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                nav_bar.draw(f, area).unwrap();
            })
            .unwrap();
        terminal
    }

    fn row_text(terminal: &Terminal<TestBackend>, y: u16) -> String {
        let buffer = terminal.backend().buffer();
        let area = buffer.area;
        (area.x..area.right())
            .map(|x| buffer[(x, y)].symbol())
            .collect()
    }

    #[test]
    fn test_draw_shows_both_destinations() {
        let mut nav_bar = NavBar::new();
        let terminal = render(&mut nav_bar);

        let tabs_row = row_text(&terminal, 8);
        assert!(tabs_row.contains("Home"));
        assert!(tabs_row.contains("Profile"));
    }

    #[test]
    fn test_current_tab_follows_navigation() {
        let mut nav_bar = NavBar::new();
        nav_bar.update(Action::Navigate(Mode::Profile)).unwrap();
        assert_eq!(nav_bar.mode, Mode::Profile);

        nav_bar.update(Action::Navigate(Mode::Home)).unwrap();
        assert_eq!(nav_bar.mode, Mode::Home);
    }

    #[test]
    fn test_search_counts_as_home() {
        let mut nav_bar = NavBar::new();
        nav_bar.update(Action::Navigate(Mode::Profile)).unwrap();
        nav_bar.update(Action::Navigate(Mode::Home)).unwrap();
        nav_bar.update(Action::OpenSearch).unwrap();
        assert!(nav_bar.searching);
        assert_eq!(nav_bar.mode.screen(), Mode::Home);
    }

    #[test]
    fn test_hint_changes_while_searching() {
        let mut nav_bar = NavBar::new();
        let before = nav_bar.hint();
        nav_bar.update(Action::OpenSearch).unwrap();
        assert_ne!(nav_bar.hint(), before);
        nav_bar.update(Action::CloseSearch).unwrap();
        assert_eq!(nav_bar.hint(), before);
    }

    #[test]
    fn test_hints_render_on_last_row() {
        let mut nav_bar = NavBar::new();
        let terminal = render(&mut nav_bar);
        let hint_row = row_text(&terminal, 9);
        assert!(hint_row.contains("search"));
    }
}
