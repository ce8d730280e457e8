//! Locale-dependent resource lookup.
//!
//! Stand-in for a platform resource system: screens and catalogs hold opaque
//! [`StringRes`] and [`ImageRes`] identifiers, and a [`Resources`] instance
//! resolves them to display strings and card glyphs for the active locale.
//! The identifier sets are closed enums, so every lookup is total.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::Display;

#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Pt,
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept region-qualified tags like "pt-BR" by matching the language
        // subtag only.
        match s.to_lowercase().split(['-', '_']).next() {
            Some("en") => Ok(Locale::En),
            Some("pt") => Ok(Locale::Pt),
            _ => Err(format!("unsupported locale: {s}")),
        }
    }
}

/// Opaque string resource identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum StringRes {
    PlaceholderSearch,
    AlignYourBody,
    FavoriteCollections,
    BottomNavigationHome,
    BottomNavigationProfile,
    Ab1Inversions,
    Ab2QuickYoga,
    Ab3Stretching,
    Ab4Tabata,
    Ab5Hiit,
    Ab6PreNatalYoga,
    Fc1ShortMantras,
    Fc2NatureMeditations,
    Fc3StressAndAnxiety,
    Fc4SelfMassage,
    Fc5Overwhelmed,
    Fc6NightlyWindDown,
    ProfileName,
    ProfileAge,
    ProfileLocation,
}

/// Opaque image resource identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum ImageRes {
    Ab1Inversions,
    Ab2QuickYoga,
    Ab3Stretching,
    Ab4Tabata,
    Ab5Hiit,
    Ab6PreNatalYoga,
    Fc1ShortMantras,
    Fc2NatureMeditations,
    Fc3StressAndAnxiety,
    Fc4SelfMassage,
    Fc5Overwhelmed,
    Fc6NightlyWindDown,
    User,
}

/// Resolves resource identifiers for one locale.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Resources {
    locale: Locale,
}

impl Resources {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn string(&self, res: StringRes) -> &'static str {
        match self.locale {
            Locale::En => Self::string_en(res),
            Locale::Pt => Self::string_pt(res),
        }
    }

    /// Glyphs stand in for the drawable assets; they do not vary by locale.
    pub fn glyph(&self, res: ImageRes) -> &'static str {
        match res {
            ImageRes::Ab1Inversions => "🙃",
            ImageRes::Ab2QuickYoga => "🧘",
            ImageRes::Ab3Stretching => "🤸",
            ImageRes::Ab4Tabata => "🏃",
            ImageRes::Ab5Hiit => "💦",
            ImageRes::Ab6PreNatalYoga => "🤰",
            ImageRes::Fc1ShortMantras => "🎶",
            ImageRes::Fc2NatureMeditations => "🌿",
            ImageRes::Fc3StressAndAnxiety => "🌧",
            ImageRes::Fc4SelfMassage => "💆",
            ImageRes::Fc5Overwhelmed => "🌊",
            ImageRes::Fc6NightlyWindDown => "🌙",
            ImageRes::User => "👤",
        }
    }

    fn string_en(res: StringRes) -> &'static str {
        match res {
            StringRes::PlaceholderSearch => "Search",
            StringRes::AlignYourBody => "Align your body",
            StringRes::FavoriteCollections => "Favorite collections",
            StringRes::BottomNavigationHome => "Home",
            StringRes::BottomNavigationProfile => "Profile",
            StringRes::Ab1Inversions => "Inversions",
            StringRes::Ab2QuickYoga => "Quick Yoga",
            StringRes::Ab3Stretching => "Stretching",
            StringRes::Ab4Tabata => "Tabata",
            StringRes::Ab5Hiit => "HIIT",
            StringRes::Ab6PreNatalYoga => "Pre-natal Yoga",
            StringRes::Fc1ShortMantras => "Short mantras",
            StringRes::Fc2NatureMeditations => "Nature meditations",
            StringRes::Fc3StressAndAnxiety => "Stress and anxiety",
            StringRes::Fc4SelfMassage => "Self-massage",
            StringRes::Fc5Overwhelmed => "Overwhelmed",
            StringRes::Fc6NightlyWindDown => "Nightly wind down",
            StringRes::ProfileName => "João Silva",
            StringRes::ProfileAge => "Age: 25",
            StringRes::ProfileLocation => "Location: João Pessoa - PB, Brazil",
        }
    }

    fn string_pt(res: StringRes) -> &'static str {
        match res {
            StringRes::PlaceholderSearch => "Pesquisar",
            StringRes::AlignYourBody => "Alinhe seu corpo",
            StringRes::FavoriteCollections => "Coleções favoritas",
            StringRes::BottomNavigationHome => "Início",
            StringRes::BottomNavigationProfile => "Perfil",
            StringRes::Ab1Inversions => "Inversões",
            StringRes::Ab2QuickYoga => "Yoga rápida",
            StringRes::Ab3Stretching => "Alongamento",
            StringRes::Ab4Tabata => "Tabata",
            StringRes::Ab5Hiit => "HIIT",
            StringRes::Ab6PreNatalYoga => "Yoga pré-natal",
            StringRes::Fc1ShortMantras => "Mantras curtos",
            StringRes::Fc2NatureMeditations => "Meditações na natureza",
            StringRes::Fc3StressAndAnxiety => "Estresse e ansiedade",
            StringRes::Fc4SelfMassage => "Automassagem",
            StringRes::Fc5Overwhelmed => "Sobrecarga",
            StringRes::Fc6NightlyWindDown => "Desacelerar à noite",
            StringRes::ProfileName => "João Silva",
            StringRes::ProfileAge => "Idade: 25",
            StringRes::ProfileLocation => "Localização: João Pessoa - PB, Brasil",
        }
    }
}
