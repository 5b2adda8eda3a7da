// 📚 Record sequences - ordered JSON arrays of records
//
// Raw path only: one bad element fails the whole decode with a RecordError.

use crate::error::Result;
use crate::record::Record;

pub fn encode_json_array(records: &[Record]) -> Result<String> {
    Ok(serde_json::to_string(records)?)
}

pub fn encode_json_array_bytes(records: &[Record]) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(records)?)
}

pub fn decode_json_array(json: &str) -> Result<Vec<Record>> {
    Ok(serde_json::from_str(json)?)
}

pub fn decode_json_array_bytes(bytes: &[u8]) -> Result<Vec<Record>> {
    Ok(serde_json::from_slice(bytes)?)
}
