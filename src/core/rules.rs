//! Ordered literal substitutions that turn HTML attribute syntax into JSX.
//!
//! Every rule is a plain find/replace applied to all occurrences. Rules run in
//! list order and never use patterns, so a style declaration that differs
//! from a listed literal by a single space is left alone.

use crate::domain::model::{RewrittenFragment, RuleHit};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    ClassAttribute,
    PresentationAttribute,
    VoidElement,
    InlineStyle,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstitutionRule {
    pub kind: RuleKind,
    pub find: String,
    pub replace: String,
}

impl SubstitutionRule {
    pub fn new(kind: RuleKind, find: impl Into<String>, replace: impl Into<String>) -> Self {
        Self {
            kind,
            find: find.into(),
            replace: replace.into(),
        }
    }

    /// Replaces every occurrence of `find`, returning the new text and the
    /// number of occurrences replaced.
    pub fn apply(&self, text: &str) -> (String, usize) {
        if self.find.is_empty() {
            return (text.to_string(), 0);
        }
        let count = text.matches(self.find.as_str()).count();
        if count == 0 {
            return (text.to_string(), 0);
        }
        (text.replace(self.find.as_str(), &self.replace), count)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    rules: Vec<SubstitutionRule>,
}

impl RuleSet {
    pub fn new(rules: Vec<SubstitutionRule>) -> Self {
        Self { rules }
    }

    /// The fixed rule list for Next.js pages.
    pub fn jsx_defaults() -> Self {
        use RuleKind::*;

        Self::new(vec![
            SubstitutionRule::new(ClassAttribute, "class=\"", "className=\""),
            SubstitutionRule::new(PresentationAttribute, "stroke-width=", "strokeWidth="),
            SubstitutionRule::new(PresentationAttribute, "stroke-linecap=", "strokeLinecap="),
            SubstitutionRule::new(PresentationAttribute, "stroke-linejoin=", "strokeLinejoin="),
            SubstitutionRule::new(VoidElement, "<br>", "<br />"),
            SubstitutionRule::new(InlineStyle, "style=\"width: 59%;\"", "style={{ width: \"59%\" }}"),
            SubstitutionRule::new(InlineStyle, "style=\"width: 30%\"", "style={{ width: \"30%\" }}"),
            SubstitutionRule::new(InlineStyle, "style=\"width: 20%\"", "style={{ width: \"20%\" }}"),
            SubstitutionRule::new(InlineStyle, "style=\"height: 80%\"", "style={{ height: \"80%\" }}"),
        ])
    }

    pub fn rules(&self) -> &[SubstitutionRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn apply(&self, fragment: &str) -> RewrittenFragment {
        let mut text = fragment.to_string();
        let mut hits = Vec::with_capacity(self.rules.len());

        for rule in &self.rules {
            let (rewritten, count) = rule.apply(&text);
            if count > 0 {
                tracing::debug!("Rule {:?} replaced {} x '{}'", rule.kind, count, rule.find);
            }
            hits.push(RuleHit {
                find: rule.find.clone(),
                count,
            });
            text = rewritten;
        }

        RewrittenFragment { text, hits }
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::jsx_defaults()
    }
}

pub fn apply_substitutions(fragment: &str, rules: &RuleSet) -> RewrittenFragment {
    rules.apply(fragment)
}
