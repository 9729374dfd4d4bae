//! Session snapshot input.

use std::io::Read;

use crate::types::SessionData;

/// Decode one session snapshot from `reader`.
pub fn parse<R: Read>(reader: R) -> Result<SessionData, serde_json::Error> {
    serde_json::from_reader(reader)
}
