//! Purchase order identifier allocation.
//!
//! Ids look like `PO3F9A1C`: the `PO` prefix plus six uppercase hex
//! characters drawn from a fresh v4 UUID. The space is small enough that
//! collisions are a real possibility on large stores, so allocation checks
//! candidates against the taken set and retries with a fresh draw, a
//! bounded number of times.

use std::collections::HashSet;

use stockroom_core::{RecordError, RecordResult};
use uuid::Uuid;

/// Retry budget for [`allocate_id`].
pub const MAX_ID_ATTEMPTS: u32 = 32;

/// One fresh candidate id.
pub fn candidate_id() -> String {
    let hex = Uuid::new_v4().simple().to_string().to_uppercase();
    format!("PO{}", &hex[..6])
}

/// Allocate an id not present in `taken`, drawing candidates from
/// `next_candidate`. Fails with `IdSpaceExhausted` once the retry budget
/// is spent.
pub fn allocate_id(
    taken: &HashSet<&str>,
    mut next_candidate: impl FnMut() -> String,
) -> RecordResult<String> {
    for _ in 0..MAX_ID_ATTEMPTS {
        let id = next_candidate();
        if !taken.contains(id.as_str()) {
            return Ok(id);
        }
    }
    Err(RecordError::IdSpaceExhausted(MAX_ID_ATTEMPTS))
}
