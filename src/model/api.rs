use serde::{Deserialize, Serialize};

/// Error body returned by JSON endpoints on non-2xx responses
#[derive(Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}
