//! Fragment maps and placeholder substitution.
//!
//! Placeholders are written `{{NAME}}`. Substitution is literal and global:
//! each placeholder is replaced everywhere in the text produced so far, one
//! placeholder after another in name order. Inserted text is not scanned for
//! the placeholder that produced it, but it is seen by later placeholders,
//! so rendered content must not contain placeholder tokens.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;

/// Rendered fragments keyed by placeholder name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragments(BTreeMap<String, String>);

impl Fragments {
    /// Create an empty fragment map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fragment for a placeholder, replacing any previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Get the fragment for a placeholder.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Check if a placeholder has a fragment.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(name, fragment)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for Fragments
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// The token for a placeholder name, e.g. `{{NAME}}`.
pub fn placeholder(name: &str) -> String {
    format!("{{{{{}}}}}", name)
}

fn placeholder_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{\{([A-Z][A-Z0-9_]*)\}\}").expect("valid placeholder regex"))
}

/// Placeholder names still present in `text`, in order of first appearance.
pub fn unresolved_placeholders(text: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for cap in placeholder_regex().captures_iter(text) {
        let name = &cap[1];
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}

/// A document with named placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
}

impl Template {
    /// Wrap template text.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// The raw template text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Placeholder names used by the template.
    pub fn placeholders(&self) -> Vec<String> {
        unresolved_placeholders(&self.source)
    }

    /// Substitute every fragment into the template.
    ///
    /// Fragments without a matching placeholder are ignored. Placeholders
    /// without a fragment are left in place and logged.
    pub fn fill(&self, fragments: &Fragments) -> String {
        let mut output = self.source.clone();
        for (name, value) in fragments.iter() {
            output = output.replace(&placeholder(name), value);
        }

        let unresolved = unresolved_placeholders(&output);
        if !unresolved.is_empty() {
            log::warn!("Unresolved template placeholders: {}", unresolved.join(", "));
        }

        output
    }
}

impl From<&str> for Template {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}

impl From<String> for Template {
    fn from(source: String) -> Self {
        Self::new(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_token() {
        assert_eq!(placeholder("NAME"), "{{NAME}}");
    }

    #[test]
    fn test_fill_replaces_globally() {
        let template = Template::new("<title>{{NAME}}</title><h1>{{NAME}}</h1>");
        let fragments: Fragments = [("NAME", "Ada")].into_iter().collect();
        assert_eq!(template.fill(&fragments), "<title>Ada</title><h1>Ada</h1>");
    }

    #[test]
    fn test_fill_leaves_unknown_placeholders() {
        let template = Template::new("{{NAME}} {{MISSING}}");
        let fragments: Fragments = [("NAME", "Ada"), ("UNUSED", "x")].into_iter().collect();
        let output = template.fill(&fragments);
        assert_eq!(output, "Ada {{MISSING}}");
        assert_eq!(unresolved_placeholders(&output), vec!["MISSING"]);
    }

    #[test]
    fn test_fill_does_not_rescan_own_value() {
        let template = Template::new("{{A}}");
        let fragments: Fragments = [("A", "{{A}}")].into_iter().collect();
        assert_eq!(template.fill(&fragments), "{{A}}");
    }

    #[test]
    fn test_fill_inside_latex_braces() {
        let template = Template::new(r"\name{{{NAME}}}");
        let fragments: Fragments = [("NAME", "Ada")].into_iter().collect();
        assert_eq!(template.fill(&fragments), r"\name{Ada}");
    }

    #[test]
    fn test_template_placeholders() {
        let template = Template::new("{{B}} {{A}} {{B}} {{lower}}");
        assert_eq!(template.placeholders(), vec!["B", "A"]);
    }
}
