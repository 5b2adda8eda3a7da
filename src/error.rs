// ⚠️ Record errors - structured failures of the raw (Result-returning) paths
//
// Convenience factories flatten these into `None`; everything else propagates them.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Record id must not be blank")]
    BlankId,

    #[error("Type of thing is [{value}] but should be one of OTHER_THING, SOME_THING, THAT_THING, THIS_THING")]
    UnknownKind { value: String },

    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, RecordError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_kind_message_names_value() {
        let err = RecordError::UnknownKind { value: "NOT_A_REAL_KIND".to_string() };
        let msg = err.to_string();

        assert!(msg.contains("[NOT_A_REAL_KIND]"));
        assert!(msg.contains("SOME_THING"));
    }

    #[test]
    fn test_json_error_converts() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: RecordError = parse.into();

        assert!(matches!(err, RecordError::Json { .. }));
        assert!(err.to_string().starts_with("JSON error:"));
    }
}
