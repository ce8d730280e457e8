mod keybindings;
mod styles;

pub use keybindings::{key_event_to_string, parse_key_sequence, KeyBindings};
pub use styles::Styles;

use std::path::PathBuf;

use color_eyre::eyre::Result;
use config::ConfigError;
use serde::Deserialize;

use crate::{resources::Locale, utils};

const CONFIG: &str = include_str!("../.config/config.json5");

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: KeyBindings,
    #[serde(default)]
    pub styles: Styles,
    #[serde(default)]
    pub locale: Locale,
}

impl Config {
    pub fn new() -> Result<Self, ConfigError> {
        let default_config: Config =
            json5::from_str(CONFIG).map_err(|e| ConfigError::Message(e.to_string()))?;
        let data_dir = utils::get_data_dir();
        let config_dir = utils::get_config_dir();
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_str().unwrap_or_default())?
            .set_default("_config_dir", config_dir.to_str().unwrap_or_default())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            // Nothing here is mandatory; the embedded defaults are a
            // complete configuration.
            log::info!("No configuration file found, using defaults");
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;

        for (mode, default_bindings) in default_config.keybindings.iter() {
            let user_bindings = cfg.keybindings.entry(*mode).or_default();
            for (key, cmd) in default_bindings.iter() {
                user_bindings
                    .entry(key.clone())
                    .or_insert_with(|| cmd.clone());
            }
        }
        for (mode, default_styles) in default_config.styles.iter() {
            let user_styles = cfg.styles.entry(*mode).or_default();
            for (style_key, style) in default_styles.iter() {
                user_styles
                    .entry(style_key.clone())
                    .or_insert_with(|| *style);
            }
        }

        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{action::Action, mode::Mode};

    #[test]
    fn test_embedded_defaults_parse() {
        let c: Config = json5::from_str(CONFIG).expect("embedded config must parse");
        assert_eq!(c.locale, Locale::En);
        assert!(c.keybindings.contains_key(&Mode::Home));
        assert!(c.keybindings.contains_key(&Mode::Search));
        assert!(c.keybindings.contains_key(&Mode::Profile));
    }

    #[test]
    fn test_default_home_bindings() {
        let c: Config = json5::from_str(CONFIG).expect("embedded config must parse");
        let home = c.keybindings.get(&Mode::Home).expect("home keymap");
        let quit = home.get(&parse_key_sequence("<q>").unwrap_or_default());
        assert_eq!(quit, Some(&Action::Quit));
        let search = home.get(&parse_key_sequence("</>").unwrap_or_default());
        assert_eq!(search, Some(&Action::OpenSearch));
    }

    #[test]
    fn test_search_mode_does_not_bind_plain_letters() {
        // Letters must reach the search bar while typing a query.
        let c: Config = json5::from_str(CONFIG).expect("embedded config must parse");
        let search = c.keybindings.get(&Mode::Search).expect("search keymap");
        let q = search.get(&parse_key_sequence("<q>").unwrap_or_default());
        assert_eq!(q, None);
    }
}
