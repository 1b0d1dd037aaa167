use sha2::{Digest, Sha256};
use std::env;

/// Cookie set by the legacy admin password challenge. The role-based session
/// is the mechanism admin procedures actually check; this gate only guards
/// the old admin UI shell.
pub const ADMIN_GATE_COOKIE: &str = "admin_authenticated";

/// Compares the candidate against the configured shared password. With no
/// password configured the gate stays closed.
pub fn verify_password(candidate: &str) -> bool {
    let Some(expected) = env::var("ADMIN_PASSWORD").ok().filter(|v| !v.is_empty()) else {
        tracing::warn!("admin gate rejected: ADMIN_PASSWORD not configured");
        return false;
    };

    Sha256::digest(candidate.as_bytes()) == Sha256::digest(expected.as_bytes())
}
