//! Wait-target description and the selector builder used by the render step.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttributeConfig {
    pub name: String,
    pub value: String,
}

/// The DOM element a render waits for before the page is captured.
///
/// The selector is chosen by a fixed sequence of guards, first match wins:
///
/// 1. non-empty `id` gives `#id`
/// 2. non-empty `class` gives `.class`
/// 3. otherwise `type` is used verbatim (possibly empty)
///
/// The attribute qualifier is applied on top of that base only when both
/// `attribute.name` and `attribute.value` are set. The configured value is a
/// switch; the value placed in the selector is supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementConfig {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
    pub class: String,
    pub attribute: AttributeConfig,
}

impl ElementConfig {
    pub fn base_selector(&self) -> String {
        if !self.id.is_empty() {
            return format!("#{}", self.id);
        }
        if !self.class.is_empty() {
            return format!(".{}", self.class);
        }
        self.kind.clone()
    }

    /// Returns `true` when an attribute-qualified wait is enabled.
    pub fn has_attribute_gate(&self) -> bool {
        !self.attribute.name.is_empty() && !self.attribute.value.is_empty()
    }

    pub fn selector_with_attribute(&self, attr_value: &str) -> String {
        let mut selector = self.base_selector();
        if self.has_attribute_gate() {
            selector.push_str(&format!("[{}={}]", self.attribute.name, attr_value));
        }
        selector
    }
}
