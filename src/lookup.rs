//! Page source lookup: where the crawler finds the pages to prerender.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use url::Url;

/// Which sequence of [`LookupConfig`] holds the crawl sources.
///
/// Unrecognised tags are kept verbatim in [`LookupType::Other`] so a document
/// re-encodes unchanged; they resolve to no sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LookupType {
    Sitemaps,
    Urls,
    Other(String),
}

impl Default for LookupType {
    fn default() -> Self {
        LookupType::Other(String::new())
    }
}

impl From<String> for LookupType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "sitemaps" => LookupType::Sitemaps,
            "urls" => LookupType::Urls,
            _ => LookupType::Other(value),
        }
    }
}

impl From<LookupType> for String {
    fn from(value: LookupType) -> Self {
        match value {
            LookupType::Sitemaps => "sitemaps".to_string(),
            LookupType::Urls => "urls".to_string(),
            LookupType::Other(raw) => raw,
        }
    }
}

impl std::fmt::Display for LookupType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LookupType::Sitemaps => f.write_str("sitemaps"),
            LookupType::Urls => f.write_str("urls"),
            LookupType::Other(raw) => f.write_str(raw),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    #[serde(deserialize_with = "deserialize_flag")]
    pub headless: bool,
    #[serde(rename = "type")]
    pub kind: LookupType,
    pub sitemaps: Vec<String>,
    pub urls: Vec<String>,
    pub base_url: String,
    pub get_params_to_save: Vec<String>,
}

impl LookupConfig {
    /// The sequence selected by `type`; empty for an unknown type.
    pub fn source_urls(&self) -> &[String] {
        match self.kind {
            LookupType::Sitemaps => self.sitemaps.as_slice(),
            LookupType::Urls => self.urls.as_slice(),
            LookupType::Other(_) => &[],
        }
    }

    /// Joins the active sources into one string.
    ///
    /// Sitemaps are joined with `","` and page URLs with `", "`; existing
    /// consumers split on those exact separators. An empty string means no
    /// sources are configured.
    pub fn resolve_source_urls(&self) -> String {
        match self.kind {
            LookupType::Sitemaps => self.sitemaps.join(","),
            LookupType::Urls => self.urls.join(", "),
            LookupType::Other(_) => String::new(),
        }
    }

    /// Parses `page_url` (relative URLs resolve against `base_url`) and drops
    /// every query parameter not listed in `get_params_to_save`.
    pub fn retain_saved_params(&self, page_url: &str) -> Result<Url, url::ParseError> {
        let mut url = match Url::parse(page_url) {
            Ok(url) => url,
            Err(url::ParseError::RelativeUrlWithoutBase) if !self.base_url.is_empty() => {
                Url::parse(&self.base_url)?.join(page_url)?
            }
            Err(e) => return Err(e),
        };

        let kept: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(key, _)| self.get_params_to_save.iter().any(|p| p == key))
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();

        if kept.is_empty() {
            url.set_query(None);
        } else {
            url.query_pairs_mut().clear().extend_pairs(kept.iter());
        }
        Ok(url)
    }
}

/// Accepts YAML 1.1 boolean spellings (`yes`, `on`, `n`, ...) alongside
/// `true` / `false`; null reads as `false`.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    struct FlagVisitor;

    impl<'de> Visitor<'de> for FlagVisitor {
        type Value = bool;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a boolean (true/false, yes/no, on/off, y/n)")
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<bool, E> {
            Ok(v)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<bool, E> {
            match v {
                "y" | "Y" | "yes" | "Yes" | "YES" | "on" | "On" | "ON" | "true" | "True"
                | "TRUE" => Ok(true),
                "n" | "N" | "no" | "No" | "NO" | "off" | "Off" | "OFF" | "false" | "False"
                | "FALSE" => Ok(false),
                _ => Err(E::invalid_value(de::Unexpected::Str(v), &self)),
            }
        }

        fn visit_unit<E: de::Error>(self) -> Result<bool, E> {
            Ok(false)
        }
    }

    deserializer.deserialize_any(FlagVisitor)
}

/// Free-function form of [`LookupConfig::resolve_source_urls`].
pub fn resolve_source_urls(cfg: &LookupConfig) -> String {
    cfg.resolve_source_urls()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn lookup(kind: &str) -> LookupConfig {
        LookupConfig {
            kind: LookupType::from(kind.to_string()),
            sitemaps: strings(&["a", "b", "c"]),
            urls: strings(&["x", "y"]),
            ..LookupConfig::default()
        }
    }

    #[test]
    fn sitemaps_join_without_space() {
        assert_eq!(lookup("sitemaps").resolve_source_urls(), "a,b,c");
    }

    #[test]
    fn urls_join_with_comma_space() {
        assert_eq!(lookup("urls").resolve_source_urls(), "x, y");
    }

    #[test]
    fn unknown_or_empty_type_resolves_to_nothing() {
        for kind in ["", "feed", "URLS"] {
            let cfg = lookup(kind);
            assert_eq!(cfg.resolve_source_urls(), "", "type {kind:?}");
            assert!(cfg.source_urls().is_empty());
        }
    }

    #[test]
    fn empty_sequence_is_empty_string() {
        let cfg = LookupConfig {
            kind: LookupType::Urls,
            ..LookupConfig::default()
        };
        assert_eq!(resolve_source_urls(&cfg), "");
    }

    #[test]
    fn source_urls_follow_type() {
        assert_eq!(lookup("sitemaps").source_urls(), strings(&["a", "b", "c"]));
        assert_eq!(lookup("urls").source_urls(), strings(&["x", "y"]));
    }

    #[test]
    fn unknown_tag_is_preserved() {
        let cfg: LookupConfig = serde_yaml::from_str("type: feed\n").unwrap();
        assert_eq!(cfg.kind, LookupType::Other("feed".to_string()));
        let yaml = serde_yaml::to_string(&cfg).unwrap();
        assert!(yaml.contains("type: feed"), "yaml was {yaml}");
    }

    #[test]
    fn headless_accepts_yaml_1_1_spellings() {
        for (raw, expected) in [
            ("true", true),
            ("yes", true),
            ("On", true),
            ("Y", true),
            ("false", false),
            ("no", false),
            ("OFF", false),
            ("n", false),
        ] {
            let cfg: LookupConfig = serde_yaml::from_str(&format!("headless: {raw}\n")).unwrap();
            assert_eq!(cfg.headless, expected, "headless: {raw}");
        }
    }

    #[test]
    fn headless_rejects_other_words() {
        assert!(serde_yaml::from_str::<LookupConfig>("headless: maybe\n").is_err());
        assert!(serde_yaml::from_str::<LookupConfig>("headless: 1\n").is_err());
    }

    #[test]
    fn retain_keeps_listed_params_in_order() {
        let cfg = LookupConfig {
            get_params_to_save: strings(&["page", "lang"]),
            ..LookupConfig::default()
        };
        let url = cfg
            .retain_saved_params("https://example.com/catalog?utm_source=x&lang=en&page=2")
            .unwrap();
        assert_eq!(url.as_str(), "https://example.com/catalog?lang=en&page=2");
    }

    #[test]
    fn retain_drops_query_when_nothing_kept() {
        let cfg = LookupConfig::default();
        let url = cfg
            .retain_saved_params("https://example.com/about?utm_source=x")
            .unwrap();
        assert_eq!(url.as_str(), "https://example.com/about");
        assert!(url.query().is_none());
    }

    #[test]
    fn retain_resolves_relative_against_base() {
        let cfg = LookupConfig {
            base_url: "https://example.com".to_string(),
            get_params_to_save: strings(&["id"]),
            ..LookupConfig::default()
        };
        let url = cfg.retain_saved_params("/item?id=7&ref=mail").unwrap();
        assert_eq!(url.as_str(), "https://example.com/item?id=7");
    }

    #[test]
    fn retain_fails_for_relative_without_base() {
        let cfg = LookupConfig::default();
        assert_eq!(
            cfg.retain_saved_params("/item").unwrap_err(),
            url::ParseError::RelativeUrlWithoutBase
        );
    }
}
