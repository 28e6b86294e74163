use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Coarse classification of a [`CookieLogError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    PermissionDenied,
    Io,
    InvalidArgument,
}

#[derive(Debug, Error)]
pub enum CookieLogError {
    #[error("the file {} was not found", path.display())]
    NotFound { path: PathBuf },

    #[error("permission denied when trying to read {}", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("the date is not valid: '{value}'. Expected format is YYYY-MM-DD.")]
    InvalidDate { value: String },
}

impl CookieLogError {
    /// Classify an I/O failure on `path`.
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => CookieLogError::NotFound { path },
            io::ErrorKind::PermissionDenied => CookieLogError::PermissionDenied { path },
            _ => CookieLogError::Io { path, source },
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CookieLogError::NotFound { .. } => ErrorKind::NotFound,
            CookieLogError::PermissionDenied { .. } => ErrorKind::PermissionDenied,
            CookieLogError::Io { .. } => ErrorKind::Io,
            CookieLogError::InvalidDate { .. } => ErrorKind::InvalidArgument,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_io_classifies_open_failures() {
        let path = Path::new("cookies.csv");

        let err = CookieLogError::from_io(path, io::Error::from(io::ErrorKind::NotFound));
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.to_string(), "the file cookies.csv was not found");

        let err = CookieLogError::from_io(path, io::Error::from(io::ErrorKind::PermissionDenied));
        assert_eq!(err.kind(), ErrorKind::PermissionDenied);
        assert_eq!(
            err.to_string(),
            "permission denied when trying to read cookies.csv"
        );

        let err = CookieLogError::from_io(path, io::Error::from(io::ErrorKind::InvalidData));
        assert_eq!(err.kind(), ErrorKind::Io);
    }

    #[test]
    fn test_invalid_date_message() {
        let err = CookieLogError::InvalidDate {
            value: "2018/12/09".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(err.to_string().contains("'2018/12/09'"));
        assert!(err.to_string().contains("YYYY-MM-DD"));
    }
}
