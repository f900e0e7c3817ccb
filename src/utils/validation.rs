use super::error::AppError;

/// Blank means empty or whitespace only.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Accepts a present, non-blank string field.
pub fn required(value: Option<String>) -> Result<String, AppError> {
    match value {
        Some(value) if !is_blank(&value) => Ok(value),
        _ => Err(AppError::InvalidRequest),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_rejects_missing_and_blank() {
        assert!(matches!(required(None), Err(AppError::InvalidRequest)));
        assert!(matches!(required(Some(String::new())), Err(AppError::InvalidRequest)));
        assert!(matches!(required(Some(" \t\n".into())), Err(AppError::InvalidRequest)));
    }

    #[test]
    fn test_required_keeps_value_untrimmed() {
        assert_eq!(required(Some(" Alice ".into())).unwrap(), " Alice ");
    }
}
