// Validated Record - Core Library
// One immutable value type with validated construction and JSON round-tripping

pub mod error;
pub mod kind;
pub mod record;
pub mod sequence;

// Re-export commonly used types
pub use error::{RecordError, Result};
pub use kind::Kind;
pub use record::Record;
pub use sequence::{
    decode_json_array, decode_json_array_bytes,
    encode_json_array, encode_json_array_bytes,
};
