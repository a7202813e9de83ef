use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error while accessing a file or resource: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(String),

    #[error("Could not serialize contacts: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Contact data is corrupt: {0}")]
    CorruptData(String),

    #[error("No contact at position {index}, contact list holds {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("{0} Not found")]
    NotFound(String),

    #[error("Validation failed: {0}")]
    Validation(String),
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        // Keep file-system failures reported as I/O, whichever writer hit them
        if !err.is_io_error() {
            return AppError::Csv(err.to_string());
        }
        match err.into_kind() {
            csv::ErrorKind::Io(e) => AppError::Io(e),
            other => AppError::Csv(format!("{:?}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirm_validation_error_message() {
        let err = AppError::Validation("All fields are required.".to_string());

        assert_eq!(
            format!("{}", err),
            "Validation failed: All fields are required.".to_string()
        );
    }

    #[test]
    fn confirm_index_error_message() {
        let err = AppError::IndexOutOfBounds { index: 4, len: 2 };

        assert!(format!("{}", err).contains("position 4"));
        assert!(format!("{}", err).contains("holds 2"));
    }

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: AppError = io.into();

        assert!(matches!(err, AppError::Io(_)));
    }
}
