//! Seed hashing for page-scoped id prefixes.
//!
//! blake3 gives the same token for the same seed in every process, unlike
//! `std::hash`.

/// Domain tag mixed in ahead of every seed.
const SEED_DOMAIN: &[u8] = b"__ids__";

/// Short lowercase hex token for a seed string (6 hex digits).
///
/// The token is the low 24 bits of the little-endian digest.
pub fn seed_token(seed: &str) -> String {
    let digest = blake3::Hasher::new()
        .update(SEED_DOMAIN)
        .update(seed.as_bytes())
        .finalize();
    let [b0, b1, b2, ..] = *digest.as_bytes();
    format!("{b2:02x}{b1:02x}{b0:02x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_token_shape() {
        let token = seed_token("/blog/post.html");
        assert_eq!(token.len(), 6);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_seed_token_deterministic() {
        assert_eq!(seed_token("/blog/post.html"), seed_token("/blog/post.html"));
        assert_ne!(seed_token("/index.html"), seed_token("/about.html"));
    }
}
