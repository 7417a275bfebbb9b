use sha2::{Digest, Sha256};

/// SHA-256 hex digest of an API key, the form in which keys are stored.
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_stable_for_same_key() {
        let key = "9944b09199c62bcf9418ad846dd0e4bbdfc6ee4b";

        assert_eq!(hash_token(key), hash_token(key));
    }

    #[test]
    fn different_keys_hash_differently() {
        assert_ne!(hash_token("key_1"), hash_token("key_2"));
    }

    #[test]
    fn hash_matches_known_digest() {
        assert_eq!(
            hash_token("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}
