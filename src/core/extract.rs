use crate::domain::model::{BodyFragment, SourceDocument};
use crate::utils::error::{ConvertError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

static BODY: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<body>(.*?)</body>").unwrap());
static SCRIPT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<script.*?</script>").unwrap());
static COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());

/// Takes everything between the first `<body>` and the first `</body>` after it.
pub fn extract_body(source: &SourceDocument) -> Result<BodyFragment> {
    let caps = BODY
        .captures(&source.text)
        .ok_or(ConvertError::BodyNotFoundError)?;
    Ok(BodyFragment(caps[1].to_string()))
}

pub fn strip_embedded_scripts(fragment: &str) -> String {
    SCRIPT.replace_all(fragment, "").into_owned()
}

// JSX has no HTML comment syntax.
pub fn strip_comments(fragment: &str) -> String {
    COMMENT.replace_all(fragment, "").into_owned()
}
