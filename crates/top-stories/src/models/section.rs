use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::TopStoriesError;

/// A topical section served by the Top Stories API.
///
/// The set is closed: any identifier not listed here is rejected with
/// [`TopStoriesError::InvalidSection`] before a request is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Arts,
    Automobiles,
    Books,
    Business,
    Fashion,
    Food,
    Health,
    #[default]
    Home,
    Insider,
    Magazine,
    Movies,
    Nyregion,
    Obituaries,
    Opinion,
    Politics,
    Realestate,
    Science,
    Sports,
    Sundayreview,
    Technology,
    Theater,
    #[serde(rename = "t-magazine")]
    TMagazine,
    Travel,
    Upshot,
    Us,
    World,
}

impl Section {
    /// Every valid section, in alphabetical order of the wire identifier.
    pub const ALL: [Section; 26] = [
        Section::Arts,
        Section::Automobiles,
        Section::Books,
        Section::Business,
        Section::Fashion,
        Section::Food,
        Section::Health,
        Section::Home,
        Section::Insider,
        Section::Magazine,
        Section::Movies,
        Section::Nyregion,
        Section::Obituaries,
        Section::Opinion,
        Section::Politics,
        Section::Realestate,
        Section::Science,
        Section::Sports,
        Section::Sundayreview,
        Section::Technology,
        Section::Theater,
        Section::TMagazine,
        Section::Travel,
        Section::Upshot,
        Section::Us,
        Section::World,
    ];

    /// Returns the identifier used in request paths.
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Arts => "arts",
            Section::Automobiles => "automobiles",
            Section::Books => "books",
            Section::Business => "business",
            Section::Fashion => "fashion",
            Section::Food => "food",
            Section::Health => "health",
            Section::Home => "home",
            Section::Insider => "insider",
            Section::Magazine => "magazine",
            Section::Movies => "movies",
            Section::Nyregion => "nyregion",
            Section::Obituaries => "obituaries",
            Section::Opinion => "opinion",
            Section::Politics => "politics",
            Section::Realestate => "realestate",
            Section::Science => "science",
            Section::Sports => "sports",
            Section::Sundayreview => "sundayreview",
            Section::Technology => "technology",
            Section::Theater => "theater",
            Section::TMagazine => "t-magazine",
            Section::Travel => "travel",
            Section::Upshot => "upshot",
            Section::Us => "us",
            Section::World => "world",
        }
    }

    /// Name of the JavaScript function the service wraps `jsonp` payloads in.
    pub fn callback_name(&self) -> String {
        format!("{}TopStoriesCallback", self.as_str())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = TopStoriesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .iter()
            .copied()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| TopStoriesError::InvalidSection(s.to_string()))
    }
}
