use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{prelude::*, widgets::*};
use tui_textarea::TextArea;

use super::Component;
use crate::{
    action::Action,
    catalog::{filter_items, ALIGN_YOUR_BODY, FAVORITE_COLLECTIONS},
    config::Config,
    mode::Mode,
    resources::{Resources, StringRes},
    tui::Frame,
    widgets::{catalog_row, collection_grid, CatalogRow, CollectionGrid},
};

/// The home screen: a search bar, the "Align your body" row and the
/// "Favorite collections" grid.
///
/// The query lives in the search bar; filtering happens on every draw, so
/// the row always reflects the current query with no cached result to
/// invalidate. The grid is never filtered.
#[derive(Default)]
pub struct Home {
    config: Config,
    resources: Resources,
    search: TextArea<'static>,
    searching: bool,
    active: bool,
    scroll: usize,
}

impl Home {
    pub fn new() -> Self {
        let mut home = Self {
            active: true,
            ..Self::default()
        };
        home.search.set_cursor_line_style(Style::default());
        home.search.set_cursor_style(Style::default());
        home
    }

    pub fn query(&self) -> String {
        // The search bar is a single-line input.
        self.search.lines().first().cloned().unwrap_or_default()
    }

    fn reset(&mut self) {
        self.search = TextArea::default();
        self.search.set_cursor_line_style(Style::default());
        self.search.set_cursor_style(Style::default());
        self.search
            .set_placeholder_text(self.resources.string(StringRes::PlaceholderSearch));
        self.searching = false;
        self.scroll = 0;
    }

    fn filtered_len(&self) -> usize {
        filter_items(&ALIGN_YOUR_BODY, &self.resources, &self.query()).len()
    }

    fn clamp_scroll(&mut self) {
        let len = self.filtered_len();
        if len == 0 {
            self.scroll = 0;
        } else if self.scroll >= len {
            self.scroll = len - 1;
        }
    }

    fn section_title_style(&self) -> Style {
        self.config
            .styles
            .get(&Mode::Home)
            .and_then(|styles| styles.get("section_title"))
            .copied()
            .unwrap_or_default()
    }
}

impl Component for Home {
    fn register_config_handler(&mut self, config: Config) -> Result<()> {
        self.resources = Resources::new(config.locale);
        self.search
            .set_placeholder_text(self.resources.string(StringRes::PlaceholderSearch));
        self.config = config;
        Ok(())
    }

    fn handle_key_events(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if !self.searching {
            return Ok(None);
        }
        // Enter and Esc close the search; they never reach the input.
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            return Ok(None);
        }
        if self.search.input(key) {
            return Ok(Some(Action::QueryChanged(self.query())));
        }
        Ok(None)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::Navigate(mode) => {
                let was_active = self.active;
                self.active = mode.screen() == Mode::Home;
                // Arriving at the screen starts it fresh, like a newly
                // created screen instance.
                if self.active && !was_active {
                    self.reset();
                }
            }
            Action::OpenSearch if self.active => {
                self.searching = true;
                self.search.set_cursor_style(Style::default().reversed());
            }
            Action::CloseSearch => {
                self.searching = false;
                self.search.set_cursor_style(Style::default());
            }
            Action::QueryChanged(_) => self.clamp_scroll(),
            Action::ScrollLeft if self.active => {
                self.scroll = self.scroll.saturating_sub(1);
            }
            Action::ScrollRight if self.active => {
                self.scroll += 1;
                self.clamp_scroll();
            }
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        if !self.active {
            return Ok(());
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // search bar
                Constraint::Length(1), // section header
                Constraint::Length(4), // catalog row
                Constraint::Length(1),
                Constraint::Length(1), // section header
                Constraint::Length(6), // collection grid
                Constraint::Min(0),
                Constraint::Length(2), // nav bar
            ])
            .split(area);

        self.search.set_block(Block::bordered());
        f.render_widget(&self.search, chunks[0]);

        let title_style = self.section_title_style();
        f.render_widget(
            Paragraph::new(self.resources.string(StringRes::AlignYourBody)).style(title_style),
            chunks[1],
        );

        let items = filter_items(&ALIGN_YOUR_BODY, &self.resources, &self.query());
        let row = CatalogRow::new(
            items,
            self.scroll,
            catalog_row::ViewContext {
                resources: &self.resources,
            },
        );
        f.render_widget(row, chunks[2]);

        f.render_widget(
            Paragraph::new(self.resources.string(StringRes::FavoriteCollections))
                .style(title_style),
            chunks[4],
        );

        let grid = CollectionGrid::new(
            &FAVORITE_COLLECTIONS,
            0,
            collection_grid::ViewContext {
                resources: &self.resources,
            },
        );
        f.render_widget(grid, chunks[5]);

        Ok(())
    }
}
