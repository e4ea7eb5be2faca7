use crate::model::DocTag;
use crate::resources::TextKey;

/// Helper for rendering documentation comments
pub struct DocRenderer;

impl DocRenderer {
    /// Groups tags by name, keeping the order in which names first appear
    pub fn group_tags<'t>(&self, tags: &'t [DocTag]) -> Vec<(&'t str, Vec<&'t str>)> {
        let mut groups: Vec<(&str, Vec<&str>)> = Vec::new();
        for tag in tags {
            match groups.iter_mut().find(|(name, _)| *name == tag.name) {
                Some((_, texts)) => texts.push(tag.text.as_str()),
                None => groups.push((tag.name.as_str(), vec![tag.text.as_str()])),
            }
        }
        groups
    }

    pub fn tag_key(&self, name: &str) -> Option<TextKey> {
        match name {
            "since" => Some(TextKey::Since),
            "see" => Some(TextKey::SeeAlso),
            "return" => Some(TextKey::Returns),
            "defaultValue" => Some(TextKey::DefaultValue),
            _ => None,
        }
    }

    /// Label for tags without a localized one: `author` -> `Author:`
    pub fn fallback_tag_label(&self, name: &str) -> String {
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => format!("{}{}:", first.to_uppercase(), chars.as_str()),
            None => String::new(),
        }
    }
}

/// Helper for rendering type signatures
pub struct TypeRenderer;

impl TypeRenderer {
    pub fn render_modifiers(&self, modifiers: &[String]) -> String {
        modifiers.join(" ")
    }
}
