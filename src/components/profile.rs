use color_eyre::eyre::Result;
use ratatui::{prelude::*, widgets::*};

use super::Component;
use crate::{
    action::Action,
    config::Config,
    mode::Mode,
    resources::{ImageRes, Resources, StringRes},
    tui::Frame,
};

/// The profile screen. Entirely static: an avatar and three lines of
/// identity text, centered.
#[derive(Default)]
pub struct Profile {
    resources: Resources,
    active: bool,
}

impl Profile {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component for Profile {
    fn register_config_handler(&mut self, config: Config) -> Result<()> {
        self.resources = Resources::new(config.locale);
        Ok(())
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if let Action::Navigate(mode) = action {
            self.active = mode.screen() == Mode::Profile;
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
                Constraint::Min(0),
                Constraint::Length(1), // avatar
                Constraint::Length(1),
                Constraint::Length(1), // name
                Constraint::Length(1), // age
                Constraint::Length(1), // location
                Constraint::Min(0),
                Constraint::Length(2), // nav bar
            ])
            .split(area);

        let avatar = Paragraph::new(self.resources.glyph(ImageRes::User))
            .alignment(Alignment::Center);
        f.render_widget(avatar, chunks[1]);

        let name = Paragraph::new(self.resources.string(StringRes::ProfileName))
            .style(Style::default().bold())
            .alignment(Alignment::Center);
        f.render_widget(name, chunks[3]);

        let age = Paragraph::new(self.resources.string(StringRes::ProfileAge))
            .alignment(Alignment::Center);
        f.render_widget(age, chunks[4]);

        let location = Paragraph::new(self.resources.string(StringRes::ProfileLocation))
            .alignment(Alignment::Center);
        f.render_widget(location, chunks[5]);

        Ok(())
    }
}
