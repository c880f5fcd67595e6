//! Wire error envelope
//!
//! Data nodes report failures as a small JSON object. Decoding never fails:
//! malformed payloads degrade to the sentinel unknown-error code carrying the
//! decode failure as the message, so a transport glitch still surfaces as a
//! structured error.

use serde::{Deserialize, Serialize};
use std::io::Read;

/// Sentinel code for payloads that could not be decoded.
pub const UNKNOWN_ERROR_CODE: i32 = 999;

/// Structured error reported by a remote node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub code: i32,
    pub message: String,
}

impl ErrorEnvelope {
    /// Decode an envelope from a byte stream.
    ///
    /// Malformed input yields `UNKNOWN_ERROR_CODE` with the decode failure as
    /// the message.
    pub fn read_from<R: Read>(reader: R) -> Self {
        match serde_json::from_reader(reader) {
            Ok(envelope) => envelope,
            Err(err) => ErrorEnvelope {
                code: UNKNOWN_ERROR_CODE,
                message: err.to_string(),
            },
        }
    }
}
