use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::duration::SignedDuration;
use crate::element::ElementConfig;
use crate::lookup::LookupConfig;
use crate::viewport::ViewportConfig;

/// Rendering behaviour: what to fetch, how to drive the browser and when a
/// page counts as rendered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrerenderConfig {
    pub user_agent: String,
    pub file_postfix: String,
    /// Maximum pages rendered at once. Not validated; zero or negative is
    /// left to the caller.
    pub concurrent_limit: i64,
    pub lookup: LookupConfig,
    pub wait_for: String,
    pub console_string: String,
    /// Signed; a negative value is kept as configured and never produces a
    /// sleep wait condition.
    pub sleep_time: SignedDuration,
    pub element: ElementConfig,
    pub viewport: ViewportConfig,
}

/// One way of deciding a page has finished rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WaitCondition<'a> {
    Event(&'a str),
    ConsoleMessage(&'a str),
    Element(String),
    Sleep(Duration),
}

impl PrerenderConfig {
    /// Every configured wait condition. They are alternatives and are not
    /// checked for exclusivity.
    pub fn wait_conditions(&self) -> Vec<WaitCondition<'_>> {
        let mut conditions = Vec::new();
        if !self.wait_for.is_empty() {
            conditions.push(WaitCondition::Event(&self.wait_for));
        }
        if !self.console_string.is_empty() {
            conditions.push(WaitCondition::ConsoleMessage(&self.console_string));
        }
        let selector = self.element.base_selector();
        if !selector.is_empty() {
            conditions.push(WaitCondition::Element(selector));
        }
        if let Some(sleep) = self.sleep_time.to_std().filter(|d| !d.is_zero()) {
            conditions.push(WaitCondition::Sleep(sleep));
        }
        conditions
    }

    /// Storage file name for a rendered page: URL path, retained query
    /// parameters, then `file_postfix`.
    pub fn page_file_name(&self, page_url: &str) -> Result<String, url::ParseError> {
        let url = self.lookup.retain_saved_params(page_url)?;
        let path = url.path().trim_start_matches('/');
        let mut name = if path.is_empty() {
            "index".to_string()
        } else {
            path.to_string()
        };
        if let Some(query) = url.query() {
            name.push('?');
            name.push_str(query);
        }
        name.push_str(&self.file_postfix);
        Ok(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::LookupType;

    fn config() -> PrerenderConfig {
        PrerenderConfig {
            file_postfix: ".html".to_string(),
            lookup: LookupConfig {
                kind: LookupType::Urls,
                base_url: "https://example.com".to_string(),
                get_params_to_save: vec!["page".to_string()],
                ..LookupConfig::default()
            },
            ..PrerenderConfig::default()
        }
    }

    #[test]
    fn file_name_uses_path_and_postfix() {
        let cfg = config();
        assert_eq!(
            cfg.page_file_name("https://example.com/blog/post?utm=1").unwrap(),
            "blog/post.html"
        );
    }

    #[test]
    fn file_name_keeps_saved_params() {
        let cfg = config();
        assert_eq!(
            cfg.page_file_name("/catalog?page=3&sort=asc").unwrap(),
            "catalog?page=3.html"
        );
    }

    #[test]
    fn root_path_is_index() {
        let cfg = config();
        assert_eq!(cfg.page_file_name("https://example.com/").unwrap(), "index.html");
    }

    #[test]
    fn file_name_propagates_parse_errors() {
        let cfg = PrerenderConfig::default();
        assert!(cfg.page_file_name("not a url").is_err());
    }

    #[test]
    fn no_wait_conditions_by_default() {
        assert!(PrerenderConfig::default().wait_conditions().is_empty());
    }

    #[test]
    fn wait_conditions_list_every_configured_strategy() {
        let mut cfg = config();
        cfg.wait_for = "networkidle".to_string();
        cfg.console_string = "prerender-ready".to_string();
        cfg.element.id = "app".to_string();
        cfg.sleep_time = SignedDuration::from_nanos(250_000_000);

        assert_eq!(
            cfg.wait_conditions(),
            vec![
                WaitCondition::Event("networkidle"),
                WaitCondition::ConsoleMessage("prerender-ready"),
                WaitCondition::Element("#app".to_string()),
                WaitCondition::Sleep(Duration::from_millis(250)),
            ]
        );
    }

    #[test]
    fn negative_sleep_is_not_a_wait_condition() {
        let mut cfg = PrerenderConfig::default();
        cfg.sleep_time = SignedDuration::from_nanos(-1_000_000_000);
        assert!(cfg.wait_conditions().is_empty());
    }
}
