use serde_json::{Map, Value};

/// Request bodies arrive as bare JSON objects carrying whatever subset of
/// fields the caller wants to send. Decoding into the strict record types
/// happens in the dispatcher, after parameter cleanup.
pub type ParamMap = Map<String, Value>;
