//! Doc-comment parsing.
//!
//! A doc-comment is split into three parts:
//! - **summary**: the first paragraph
//! - **description**: everything after the first blank line, up to the first tag
//! - **tags**: `@name body` lines; a body continues until the next tag
//!
//! ```ignore
//! let doc = DocBlock::parse("/**\n * Adds a library.\n *\n * @param string $name Library name.\n */");
//! assert_eq!(doc.summary, "Adds a library.");
//! assert_eq!(doc.param("name").unwrap().text, "Library name.");
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

static TAG_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^@([A-Za-z][\w-]*)").expect("tag pattern is valid"));

static PARAM_BODY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^(\S+)\s+\$(\w+)\s*(.*)$").expect("param pattern is valid")
});

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// A single `@tag body` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocTag {
    pub name: String,
    pub body: String,
}

impl DocTag {
    pub fn new(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: body.into(),
        }
    }

    /// First word of the body, e.g. the type of `@var` or `@return`.
    pub fn first_word(&self) -> Option<&str> {
        self.body.split_whitespace().next()
    }
}

/// Parsed `@param type $name text` tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamTag<'a> {
    pub ty: &'a str,
    pub name: &'a str,
    pub text: String,
}

/// Structured form of a doc-comment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocBlock {
    pub summary: String,
    pub description: String,
    pub tags: Vec<DocTag>,
}

impl DocBlock {
    /// Build a doc block from already-separated text.
    pub fn new(summary: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            description: description.into(),
            tags: Vec::new(),
        }
    }

    pub fn with_tag(mut self, name: impl Into<String>, body: impl Into<String>) -> Self {
        self.tags.push(DocTag::new(name, body));
        self
    }

    /// Parse a raw `/** ... */` comment. Input without comment markers is
    /// accepted as-is.
    pub fn parse(raw: &str) -> Self {
        let text = strip_markers(raw);

        let (prose, tag_section) = match TAG_START.find(&text) {
            Some(m) => (&text[..m.start()], &text[m.start()..]),
            None => (text.as_str(), ""),
        };

        let (summary, description) = match prose.split_once("\n\n") {
            Some((summary, rest)) => (summary.trim(), rest.trim()),
            None => (prose.trim(), ""),
        };

        Self {
            summary: summary.to_string(),
            description: description.to_string(),
            tags: parse_tags(tag_section),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.summary.is_empty() && self.description.is_empty()
    }

    /// First tag with the given name.
    pub fn tag(&self, name: &str) -> Option<&DocTag> {
        self.tags.iter().find(|t| t.name == name)
    }

    /// The `@param` tag documenting `$name`.
    pub fn param(&self, name: &str) -> Option<ParamTag<'_>> {
        self.tags
            .iter()
            .filter(|t| t.name == "param")
            .filter_map(|t| {
                let caps = PARAM_BODY.captures(&t.body)?;
                let ty = caps.get(1)?.as_str();
                let param = caps.get(2)?.as_str();
                let text = caps.get(3).map(|m| m.as_str()).unwrap_or_default();
                Some(ParamTag {
                    ty,
                    name: param,
                    text: WHITESPACE_RUN.replace_all(text.trim(), " ").into_owned(),
                })
            })
            .find(|p| p.name == name)
    }

    /// Summary and description joined by `separator`, trimmed.
    pub fn full_text(&self, separator: &str) -> String {
        match (self.summary.is_empty(), self.description.is_empty()) {
            (true, true) => String::new(),
            (false, true) => self.summary.clone(),
            (true, false) => self.description.clone(),
            (false, false) => format!("{}{}{}", self.summary, separator, self.description),
        }
    }
}

fn strip_markers(raw: &str) -> String {
    let body = raw.trim();
    let body = body.strip_prefix("/**").unwrap_or(body);
    let body = body.strip_suffix("*/").unwrap_or(body);

    body.lines()
        .map(|line| {
            let line = line.trim_start();
            let line = match line.strip_prefix('*') {
                Some(rest) => rest.strip_prefix(' ').unwrap_or(rest),
                None => line,
            };
            line.trim_end()
        })
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

fn parse_tags(section: &str) -> Vec<DocTag> {
    let starts: Vec<_> = TAG_START.captures_iter(section).collect();
    let mut tags = Vec::with_capacity(starts.len());
    for (i, caps) in starts.iter().enumerate() {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let end = starts
            .get(i + 1)
            .and_then(|next| next.get(0))
            .map(|m| m.start())
            .unwrap_or(section.len());
        let body = section[whole.end()..end].trim();
        tags.push(DocTag::new(name.as_str(), body));
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADD: &str = r#"/**
     * Adds a class library from which files can be loaded.
     *
     * Registers a named library configuration.
     *
     * ### Adding libraries
     *
     * More text.
     *
     * @param string $name Library name, i.e. `'app'` or `'lithium'`.
     * @param array $config Specifies where the library is in the filesystem,
     *        and how classes should be loaded from it.
     * @return array Returns the resulting set of options.
     */"#;

    #[test]
    fn summary_is_first_paragraph() {
        let doc = DocBlock::parse(ADD);
        assert_eq!(doc.summary, "Adds a class library from which files can be loaded.");
    }

    #[test]
    fn description_runs_until_first_tag() {
        let doc = DocBlock::parse(ADD);
        assert!(doc.description.starts_with("Registers a named library configuration."));
        assert!(doc.description.contains("### Adding libraries"));
        assert!(doc.description.ends_with("More text."));
        assert!(!doc.description.contains('@'));
    }

    #[test]
    fn tags_are_collected_in_order() {
        let doc = DocBlock::parse(ADD);
        let names: Vec<_> = doc.tags.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["param", "param", "return"]);
        assert_eq!(doc.tag("return").and_then(DocTag::first_word), Some("array"));
    }

    #[test]
    fn param_text_spans_lines() {
        let doc = DocBlock::parse(ADD);
        let config = doc.param("config").unwrap();
        assert_eq!(config.ty, "array");
        assert_eq!(
            config.text,
            "Specifies where the library is in the filesystem, and how classes should be loaded from it."
        );
        assert!(doc.param("missing").is_none());
    }

    #[test]
    fn var_tag_only() {
        let doc = DocBlock::parse("/**\n * The hostname for this endpoint.\n *\n * @var string\n */");
        assert_eq!(doc.summary, "The hostname for this endpoint.");
        assert_eq!(doc.description, "");
        assert_eq!(doc.tag("var").and_then(DocTag::first_word), Some("string"));
    }

    #[test]
    fn single_line_comment() {
        let doc = DocBlock::parse("/** Short. */");
        assert_eq!(doc.summary, "Short.");
        assert!(doc.tags.is_empty());
    }

    #[test]
    fn empty_comment() {
        let doc = DocBlock::parse("");
        assert!(doc.is_empty());
        assert!(doc.tags.is_empty());
    }

    #[test]
    fn full_text_joins_non_empty_parts() {
        let doc = DocBlock::new("Summary.", "Body.");
        assert_eq!(doc.full_text("\n\n"), "Summary.\n\nBody.");
        assert_eq!(DocBlock::new("Only.", "").full_text("\n"), "Only.");
        assert_eq!(DocBlock::default().full_text("\n"), "");
    }
}
