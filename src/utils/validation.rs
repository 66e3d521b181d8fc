use crate::utils::error::{Result, ScreenerError};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static MISSING_FIELD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"missing field `([^`]+)`").unwrap());

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(ScreenerError::validation(field_name, "Path cannot be empty"));
    }

    if path.contains('\0') {
        return Err(ScreenerError::validation(field_name, "Path contains null bytes"));
    }

    Ok(())
}

pub fn validate_file_extension(field_name: &str, path: &str, allowed_extensions: &[&str]) -> Result<()> {
    let allowed_set: HashSet<&str> = allowed_extensions.iter().copied().collect();

    match std::path::Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some(extension) if allowed_set.contains(extension) => Ok(()),
        Some(extension) => Err(ScreenerError::validation(
            field_name,
            format!(
                "Unsupported file extension: {}. Allowed extensions: {}",
                extension,
                allowed_extensions.join(", ")
            ),
        )),
        None => Err(ScreenerError::validation(
            field_name,
            format!("'{}' has no extension or is not a valid filename", path),
        )),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ScreenerError::validation(
            field_name,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

/// 將 serde 反序列化錯誤轉成 `ValidationError`。缺少欄位時指向該欄位
/// (例如 `job.position`)，其餘型別錯誤指向整個區段。
pub fn deserialize_error(section: &str, err: impl std::fmt::Display) -> ScreenerError {
    let message = err.to_string();
    let field = MISSING_FIELD_RE
        .captures(&message)
        .map(|caps| qualified(section, &caps[1]))
        .unwrap_or_else(|| section.to_string());
    ScreenerError::validation(field, message)
}

pub fn qualified(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output.directory", "./out").is_ok());
        assert!(validate_path("output.directory", "").is_err());
        assert!(validate_path("output.directory", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension("output.bundle", "bundle.zip", &["zip"]).is_ok());
        assert!(validate_file_extension("output.bundle", "bundle.tar", &["zip"]).is_err());
        assert!(validate_file_extension("output.bundle", "bundle", &["zip"]).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("job.position", "Developer").is_ok());
        assert!(validate_non_empty_string("job.position", "   ").is_err());
    }

    #[test]
    fn test_deserialize_error_points_at_missing_field() {
        match deserialize_error("job", "missing field `required_skills`") {
            ScreenerError::ValidationError { field, message } => {
                assert_eq!(field, "job.required_skills");
                assert!(message.contains("missing field"));
            }
            other => panic!("unexpected error: {:?}", other),
        }

        match deserialize_error("output", "invalid type: integer `3`, expected a boolean") {
            ScreenerError::ValidationError { field, .. } => assert_eq!(field, "output"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_qualified() {
        assert_eq!(qualified("", "position"), "position");
        assert_eq!(qualified("job", "position"), "job.position");
    }
}
