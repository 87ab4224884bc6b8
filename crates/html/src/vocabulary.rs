//! Tag and attribute allow-lists consulted by the tokenizer.

#[derive(Clone, Debug, PartialEq, Eq)]
struct TagRule {
    name: String,
    attributes: Vec<String>,
}

/// Immutable table of accepted tag names and the attributes each one may carry.
///
/// Names are matched case-sensitively. `Vocabulary::default()` accepts `html` with no
/// attributes and `div` with `class` and `id`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vocabulary {
    tags: Vec<TagRule>,
}

impl Vocabulary {
    /// An empty table; every tag is unknown until added with [`Vocabulary::with_tag`].
    pub fn new() -> Self {
        Self { tags: Vec::new() }
    }

    pub fn with_tag(mut self, name: &str, attributes: &[&str]) -> Self {
        let attributes = attributes.iter().map(|attr| attr.to_string()).collect();
        match self.tags.iter_mut().find(|rule| rule.name == name) {
            Some(rule) => rule.attributes = attributes,
            None => self.tags.push(TagRule {
                name: name.to_string(),
                attributes,
            }),
        }
        self
    }

    pub fn is_known(&self, tag: &str) -> bool {
        self.rule(tag).is_some()
    }

    pub fn allows_attribute(&self, tag: &str, attribute: &str) -> bool {
        self.rule(tag)
            .is_some_and(|rule| rule.attributes.iter().any(|a| a == attribute))
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(|rule| rule.name.as_str())
    }

    fn rule(&self, tag: &str) -> Option<&TagRule> {
        self.tags.iter().find(|rule| rule.name == tag)
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new()
            .with_tag("html", &[])
            .with_tag("div", &["class", "id"])
    }
}
