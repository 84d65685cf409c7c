//! Content fingerprints.

/// Short lowercase hex fingerprint of `data` (first `len` hex chars of blake3).
pub fn fingerprint(data: &[u8], len: usize) -> String {
    let hex = blake3::hash(data).to_hex();
    hex[..len.min(hex.len())].to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_stable_and_short() {
        let a = fingerprint(b"page", 7);
        assert_eq!(a.len(), 7);
        assert_eq!(a, fingerprint(b"page", 7));
        assert_ne!(a, fingerprint(b"other", 7));
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_fingerprint_len_clamped() {
        assert_eq!(fingerprint(b"x", 1000).len(), 64);
    }
}
