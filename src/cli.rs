use clap::Parser;

use crate::{resources::Locale, utils::version};

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Tick rate, i.e. number of ticks per second",
        default_value_t = 4.0
    )]
    pub tick_rate: f64,

    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Frame rate, i.e. number of frames per second",
        default_value_t = 60.0
    )]
    pub frame_rate: f64,

    #[arg(
        short,
        long,
        value_name = "LOCALE",
        help = "Display locale (en, pt); overrides the config file"
    )]
    pub locale: Option<Locale>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["calmaria"]);
        assert_eq!(cli.tick_rate, 4.0);
        assert_eq!(cli.frame_rate, 60.0);
        assert_eq!(cli.locale, None);
    }

    #[test]
    fn test_locale_flag() {
        let cli = Cli::parse_from(["calmaria", "--locale", "pt-BR"]);
        assert_eq!(cli.locale, Some(Locale::Pt));
    }

    #[test]
    fn test_unknown_locale_is_rejected() {
        assert!(Cli::try_parse_from(["calmaria", "--locale", "xx"]).is_err());
    }
}
