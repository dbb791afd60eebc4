//! Display language and localized strings.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Language of the rendered panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    French,
}

impl Language {
    /// Pick the language from a free-form parameter.
    ///
    /// Anything starting with "fr" (any case) is French; everything else,
    /// including an empty string, is English.
    ///
    /// ```
    /// use biximity::present::Language;
    ///
    /// assert_eq!(Language::from_parameter("FR-ca"), Language::French);
    /// assert_eq!(Language::from_parameter("français"), Language::French);
    /// assert_eq!(Language::from_parameter("en"), Language::English);
    /// ```
    pub fn from_parameter(param: &str) -> Self {
        if param.to_lowercase().starts_with("fr") {
            Language::French
        } else {
            Language::English
        }
    }

    pub(crate) fn updated_at(&self) -> &'static str {
        match self {
            Language::English => "Updated at",
            Language::French => "Mis à jour à",
        }
    }

    /// Column headings for bikes, e-bikes and docks.
    pub(crate) fn column_headings(&self) -> [&'static str; 3] {
        match self {
            Language::English => ["bikes", "e-bikes", "docks"],
            Language::French => ["vélos", "électr.", "bornes"],
        }
    }
}

/// Notice shown when the panel was built from fallback data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Disclaimer {
    /// The station feeds were unreachable; cached stations are shown.
    NoInternet,
    /// The current position could not be determined.
    LocationUnavailable,
}

impl Disclaimer {
    /// The message in the given language.
    pub fn message(&self, language: Language) -> &'static str {
        match (self, language) {
            (Disclaimer::NoInternet, Language::English) => "No internet connection",
            (Disclaimer::NoInternet, Language::French) => "Pas de connexion internet",
            (Disclaimer::LocationUnavailable, Language::English) => "Could not fetch location",
            (Disclaimer::LocationUnavailable, Language::French) => "Échec de localisation",
        }
    }
}

impl fmt::Display for Disclaimer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message(Language::English))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn french_prefix_any_case() {
        assert_eq!(Language::from_parameter("fr"), Language::French);
        assert_eq!(Language::from_parameter("Fr"), Language::French);
        assert_eq!(Language::from_parameter("FRENCH"), Language::French);
        assert_eq!(Language::from_parameter("french"), Language::French);
    }

    #[test]
    fn everything_else_is_english() {
        assert_eq!(Language::from_parameter(""), Language::English);
        assert_eq!(Language::from_parameter("f"), Language::English);
        assert_eq!(Language::from_parameter("english"), Language::English);
        assert_eq!(Language::from_parameter(" fr"), Language::English);
        assert_eq!(Language::from_parameter("de"), Language::English);
    }

    #[test]
    fn default_is_english() {
        assert_eq!(Language::default(), Language::English);
    }

    #[test]
    fn disclaimer_messages() {
        assert_eq!(
            Disclaimer::NoInternet.message(Language::French),
            "Pas de connexion internet"
        );
        assert_eq!(
            Disclaimer::LocationUnavailable.message(Language::English),
            "Could not fetch location"
        );
        assert_eq!(
            Disclaimer::LocationUnavailable.message(Language::French),
            "Échec de localisation"
        );
    }

    #[test]
    fn updated_at_label() {
        assert_eq!(Language::English.updated_at(), "Updated at");
        assert_eq!(Language::French.updated_at(), "Mis à jour à");
    }
}
