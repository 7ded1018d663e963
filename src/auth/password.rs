/**
 * Password Hashing and Verification
 *
 * Passwords are hashed with bcrypt using a random per-call salt. The hash
 * string is self-describing (algorithm, cost, salt, digest), so verification
 * needs only the candidate password and the stored hash.
 *
 * # Truncation Policy
 *
 * bcrypt only consumes the first 72 bytes of its input. Rather than reject
 * longer passwords, this module truncates them to their first 72 bytes, and
 * it does so identically on the hash and verify paths. Two passwords that
 * agree on their first 72 bytes are therefore the same password as far as
 * this service is concerned. That policy is asserted by the tests below.
 */

use bcrypt::DEFAULT_COST;

/// bcrypt input limit in bytes
const MAX_PASSWORD_BYTES: usize = 72;

/// Truncate a password to the first 72 bytes of its UTF-8 encoding.
fn truncate_password(password: &str) -> &[u8] {
    let bytes = password.as_bytes();
    if bytes.len() > MAX_PASSWORD_BYTES {
        &bytes[..MAX_PASSWORD_BYTES]
    } else {
        bytes
    }
}

/// Hash a password with bcrypt and a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, bcrypt::BcryptError> {
    bcrypt::hash(truncate_password(password), DEFAULT_COST)
}

/// Verify a password against a stored bcrypt hash.
///
/// Never fails: a malformed hash string, or any other bcrypt error, counts
/// as a non-match.
pub fn verify_password(password: &str, hashed_password: &str) -> bool {
    bcrypt::verify(truncate_password(password), hashed_password).unwrap_or(false)
}
