use serde::{Deserialize, Serialize};

/// The whole claim set: just the username. No expiry, no issuer, no
/// revocation; the token lives as long as the caller keeps it.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub username: String,
}
