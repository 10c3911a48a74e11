/// Application-level errors
///
/// The list engine itself never fails; these cover the shell around it
/// (catalog files, configuration, and sort keys parsed from text).
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown sort key: {0}")]
    UnknownSortKey(String),

    #[error("Unknown list: {0}")]
    UnknownList(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_sort_key_message() {
        let err = AppError::UnknownSortKey("grade-sideways".to_string());
        assert_eq!(err.to_string(), "Unknown sort key: grade-sideways");
    }

    #[test]
    fn test_json_error_converts() {
        let parse: Result<Vec<String>, _> = serde_json::from_str("{not json");
        let err: AppError = parse.unwrap_err().into();
        assert!(matches!(err, AppError::Json(_)));
    }
}
