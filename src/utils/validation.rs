use crate::utils::error::{ConvertError, Result};
use std::collections::HashSet;
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Extensions a generated page may be written with.
pub const PAGE_EXTENSIONS: &[&str] = &["tsx", "jsx", "ts", "js"];

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ConvertError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ConvertError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_file_extension(field_name: &str, file: &str, allowed_extensions: &[&str]) -> Result<()> {
    let allowed_set: HashSet<&str> = allowed_extensions.iter().copied().collect();

    match Path::new(file).extension().and_then(|ext| ext.to_str()) {
        Some(extension) if allowed_set.contains(extension) => Ok(()),
        Some(extension) => Err(ConvertError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: format!(
                "Unsupported file extension: {}. Allowed extensions: {}",
                extension,
                allowed_extensions.join(", ")
            ),
        }),
        None => Err(ConvertError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: "File has no extension or invalid filename".to_string(),
        }),
    }
}

pub fn validate_distinct_paths(field_name: &str, input: &str, output: &str) -> Result<()> {
    if Path::new(input) == Path::new(output) {
        return Err(ConvertError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: output.to_string(),
            reason: "Output would overwrite the source document".to_string(),
        });
    }
    Ok(())
}

/// Checks shared by every configuration source.
pub fn validate_io_paths(input: &str, output: &str) -> Result<()> {
    validate_path("input_path", input)?;
    validate_path("output_path", output)?;
    validate_file_extension("output_path", output, PAGE_EXTENSIONS)?;
    validate_distinct_paths("output_path", input, output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("input_path", "../index.html").is_ok());
        assert!(validate_path("input_path", "").is_err());
        assert!(validate_path("input_path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension("output_path", "src/app/page.tsx", PAGE_EXTENSIONS).is_ok());
        assert!(validate_file_extension("output_path", "page.jsx", PAGE_EXTENSIONS).is_ok());
        assert!(validate_file_extension("output_path", "page.html", PAGE_EXTENSIONS).is_err());
        assert!(validate_file_extension("output_path", "page", PAGE_EXTENSIONS).is_err());
    }

    #[test]
    fn test_validate_io_paths_rejects_same_file() {
        assert!(validate_io_paths("../index.html", "src/app/page.tsx").is_ok());
        assert!(validate_io_paths("page.tsx", "page.tsx").is_err());
    }
}
