use crate::errors::TabshiftError;
use crate::host::errors::HostError;

#[derive(Debug, thiserror::Error)]
pub enum RelocateError {
    #[error("Host operation failed: {source}")]
    HostError {
        #[from]
        source: HostError,
    },
}

impl TabshiftError for RelocateError {
    fn error_code(&self) -> &'static str {
        match self {
            RelocateError::HostError { .. } => "RELOCATE_HOST_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relocate_error_wraps_host_error() {
        let error: RelocateError = HostError::WindowNotFound { id: 3 }.into();
        assert_eq!(error.to_string(), "Host operation failed: Window '3' not found");
        assert_eq!(error.error_code(), "RELOCATE_HOST_ERROR");
        assert!(!error.is_user_error());
    }
}
