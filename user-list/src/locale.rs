use crate::error::UnknownLocale;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Environment variables consulted, in priority order, for the system language
const SYSTEM_LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// Display strings for the user list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Labels {
    pub users: &'static str,
    pub next_page: &'static str,
    pub previous_page: &'static str,
}

static ENGLISH: Labels = Labels {
    users: "Users",
    next_page: "next >",
    previous_page: "< previous",
};

static TURKISH: Labels = Labels {
    users: "Kullanıcılar",
    next_page: "sonraki >",
    previous_page: "< önceki",
};

/// A supported display language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Tr,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Tr];

    /// Language code, e.g. `"tr"`
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Tr => "tr",
        }
    }

    /// Name of the language in that language, as shown by a language selector
    pub fn title(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Tr => "Türkçe",
        }
    }

    pub fn labels(&self) -> &'static Labels {
        match self {
            Locale::En => &ENGLISH,
            Locale::Tr => &TURKISH,
        }
    }

    /// Resolves the system language from the environment, falling back to
    /// English when it is unset or unsupported.
    pub fn from_system() -> Self {
        let value = SYSTEM_LOCALE_VARS
            .iter()
            .filter_map(|name| std::env::var(name).ok())
            .find(|value| !value.is_empty());

        Self::from_env_value(value.as_deref())
    }

    fn from_env_value(value: Option<&str>) -> Self {
        match value.map(str::parse::<Locale>) {
            Some(Ok(locale)) => locale,
            Some(Err(err)) => {
                debug!("{err}, using {}", Locale::default());
                Locale::default()
            }
            None => Locale::default(),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Accepts bare codes (`tr`), BCP 47 tags (`tr-TR`) and POSIX locale names
/// (`tr_TR.UTF-8`), case-insensitively.
impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let language = s
            .split(['-', '_', '.', '@'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match language.as_str() {
            "en" => Ok(Locale::En),
            "tr" => Ok(Locale::Tr),
            _ => Err(UnknownLocale(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_codes() {
        assert_eq!("en".parse::<Locale>(), Ok(Locale::En));
        assert_eq!("TR".parse::<Locale>(), Ok(Locale::Tr));
        assert_eq!("tr-TR".parse::<Locale>(), Ok(Locale::Tr));
        assert_eq!("tr_TR.UTF-8".parse::<Locale>(), Ok(Locale::Tr));
        assert_eq!("en_US.UTF-8@euro".parse::<Locale>(), Ok(Locale::En));
        assert_eq!(
            "de".parse::<Locale>(),
            Err(UnknownLocale("de".to_string()))
        );
    }

    #[test]
    fn test_env_value_fallback() {
        assert_eq!(Locale::from_env_value(Some("tr_TR.UTF-8")), Locale::Tr);
        assert_eq!(Locale::from_env_value(Some("C")), Locale::En);
        assert_eq!(Locale::from_env_value(Some("POSIX")), Locale::En);
        assert_eq!(Locale::from_env_value(None), Locale::En);
    }

    #[test]
    fn test_labels_differ_per_locale() {
        assert_eq!(Locale::En.labels().next_page, "next >");
        assert_eq!(Locale::En.labels().previous_page, "< previous");
        assert_eq!(Locale::Tr.labels().users, "Kullanıcılar");
        assert_ne!(Locale::En.labels(), Locale::Tr.labels());
    }

    #[test]
    fn test_labels_wire_format() {
        assert_eq!(
            serde_json::to_value(Locale::En.labels()).unwrap(),
            serde_json::json!({
                "users": "Users",
                "nextPage": "next >",
                "previousPage": "< previous",
            })
        );
    }

    #[test]
    fn test_titles() {
        assert_eq!(Locale::Tr.title(), "Türkçe");
        assert_eq!(Locale::ALL.map(|locale| locale.code()), ["en", "tr"]);
    }
}
