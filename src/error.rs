use thiserror::Error;

/// Failures that stop an image from being turned into a usable payload.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("event is missing a body")]
    MissingBody,

    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("cannot identify image: {0}")]
    Image(#[from] image::ImageError),
}

/// The reason a single invocation failed.
///
/// Every variant is reported to the caller as the same generic failure
/// response, the tag only exists for logging and for callers embedding
/// the handler directly.
#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("failed to write processed image to blob storage: {0:#}")]
    StorageWrite(anyhow::Error),

    #[error("failed to write image record: {0:#}")]
    RecordWrite(anyhow::Error),

    #[error("internal error: {0:#}")]
    Internal(anyhow::Error),
}

impl ProcessingError {
    /// A stable name for the failure class.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Decode(_) => "decode",
            Self::StorageWrite(_) => "storage_write",
            Self::RecordWrite(_) => "record_write",
            Self::Internal(_) => "internal",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        let err = ProcessingError::from(DecodeError::MissingBody);
        assert_eq!(err.kind(), "decode");
        assert_eq!(err.to_string(), "event is missing a body");

        let err = ProcessingError::StorageWrite(anyhow::anyhow!("access denied"));
        assert_eq!(err.kind(), "storage_write");
        assert!(err.to_string().contains("access denied"));

        let err = ProcessingError::RecordWrite(anyhow::anyhow!("table missing"));
        assert_eq!(err.kind(), "record_write");

        let err = ProcessingError::Internal(anyhow::anyhow!("task panicked"));
        assert_eq!(err.kind(), "internal");
    }
}
