use serde::Serialize;

/// Full text of the input file. Read once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    pub path: String,
    pub text: String,
}

impl SourceDocument {
    pub fn new(path: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }
}

/// Markup between the first `<body>` and the next `</body>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyFragment(pub String);

impl BodyFragment {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// How many times a single rule fired during a rewrite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleHit {
    pub find: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewrittenFragment {
    pub text: String,
    pub hits: Vec<RuleHit>,
}

impl RewrittenFragment {
    pub fn total_replacements(&self) -> usize {
        self.hits.iter().map(|hit| hit.count).sum()
    }
}

/// Markup that is inserted into the page exactly as written.
///
/// The template never escapes content; wrapping a fragment in `RawMarkup` is
/// the one place that decision is made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMarkup(String);

impl RawMarkup {
    pub fn new(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<RewrittenFragment> for RawMarkup {
    fn from(fragment: RewrittenFragment) -> Self {
        Self(fragment.text)
    }
}

/// Rendered page source, already trimmed and ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDocument {
    text: String,
    pub hits: Vec<RuleHit>,
}

impl OutputDocument {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.trim().to_string(),
            hits: Vec::new(),
        }
    }

    pub fn with_hits(mut self, hits: Vec<RuleHit>) -> Self {
        self.hits = hits;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionReport {
    pub output_path: String,
    pub body_len: usize,
    pub hits: Vec<RuleHit>,
}

impl ConversionReport {
    pub fn to_json(&self) -> crate::utils::error::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
