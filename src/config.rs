use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Naming convention that marks a method as a property accessor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PropertyConvention {
    /// `getColor`, `setColor`, `isEnabled`, and snake-case `get_color`
    #[default]
    Accessor,
    /// `colorProperty`
    Javafx,
}

/// Options shared by every writer for one documentation run
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Label inherited lists "declared in" rather than "inherited from"
    pub summarize_overridden_methods: bool,
    pub property_convention: PropertyConvention,
    /// Package prefix to base URL of externally documented types
    pub extern_links: BTreeMap<String, String>,
}

impl RenderOptions {
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read options {}", path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("failed to parse options {}", path.display()))
    }

    /// Base URL of the external documentation covering `qualified_name`,
    /// preferring the longest matching package prefix
    pub fn extern_base(&self, qualified_name: &str) -> Option<&str> {
        self.extern_links
            .iter()
            .filter(|(prefix, _)| {
                qualified_name
                    .strip_prefix(prefix.as_str())
                    .is_some_and(|rest| rest.starts_with('.'))
            })
            .max_by_key(|(prefix, _)| prefix.len())
            .map(|(_, url)| url.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_default_when_fields_missing() {
        let options: RenderOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, RenderOptions::default());
        assert_eq!(options.property_convention, PropertyConvention::Accessor);
    }

    #[test]
    fn test_extern_base_prefers_longest_prefix() {
        let options: RenderOptions = serde_json::from_str(
            r#"{"extern_links": {"java": "https://a.example", "java.util": "https://b.example"}}"#,
        )
        .unwrap();
        assert_eq!(options.extern_base("java.util.List"), Some("https://b.example"));
        assert_eq!(options.extern_base("java.lang.Object"), Some("https://a.example"));
        assert_eq!(options.extern_base("javax.swing.JPanel"), None);
    }
}
