//! Message digests.
//!
//! SharedStreets identifiers are the MD5 digest of a canonical message. MD5 is
//! used for its short fixed-length output, not for security: identifiers are
//! not a security boundary and are not collision-proof against adversarial input.
//!
//! The algorithm is a named constant rather than a parameter so that an
//! identifier computed today is the identifier computed after any rebuild.

use std::fmt;

use md5::{Digest, Md5};

use crate::errors::{SharedStreetsError, SharedStreetsResult};

/// Digest algorithm name.
pub const DIGEST_ALGORITHM: &str = "md5";

/// Digest length in bytes.
pub const DIGEST_LEN: usize = 16;

/// Raw digest output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigestBytes([u8; DIGEST_LEN]);

impl DigestBytes {
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Lowercase base-16, the form used by hex SharedStreets ids.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Count of leading zero bytes.
    pub fn leading_zeros(&self) -> usize {
        self.0.iter().take_while(|b| **b == 0).count()
    }
}

impl AsRef<[u8]> for DigestBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for DigestBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Digest raw bytes.
pub fn digest_bytes(bytes: &[u8]) -> DigestBytes {
    let mut h = Md5::new();
    h.update(bytes);
    DigestBytes(h.finalize().into())
}

/// Digest the UTF-8 encoding of a message.
///
/// A Rust `&str` is always valid UTF-8, so the `Encoding` error is never
/// produced here; it is kept in the signature for callers that build messages
/// from foreign byte sources with [`digest_utf8`].
pub fn digest(message: &str) -> SharedStreetsResult<DigestBytes> {
    Ok(digest_bytes(message.as_bytes()))
}

/// Digest bytes that must be valid UTF-8 text.
pub fn digest_utf8(bytes: &[u8]) -> SharedStreetsResult<DigestBytes> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| SharedStreetsError::encoding(format!("message is not valid utf-8: {e}")))?;
    digest(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn md5_known_values() {
        assert_eq!(digest("").unwrap().to_hex(), "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(
            digest("Intersection 0.104000 45.000000").unwrap().to_hex(),
            "000481a62cca5cffbc8a5665946f3b2f"
        );
    }

    #[test]
    fn digest_stable() {
        let a = digest("Intersection 110.000000 45.000000").unwrap();
        let b = digest("Intersection 110.000000 45.000000").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.as_bytes().len(), DIGEST_LEN);
    }

    #[test]
    fn leading_zero_count() {
        let d = digest("Intersection 0.104000 45.000000").unwrap();
        assert_eq!(d.leading_zeros(), 1);
    }

    #[test]
    fn hex_is_lowercase_and_matches_display() {
        let d = digest("abc").unwrap();
        assert_eq!(d.to_hex(), "900150983cd24fb0d6963f7d28e17f72");
        assert_eq!(d.to_string(), d.to_hex());
        assert_eq!(hex::decode(d.to_hex()).unwrap().as_slice(), d.as_bytes());
    }

    #[test]
    fn invalid_utf8_is_encoding_error() {
        assert_matches!(digest_utf8(&[0xff, 0xfe]), Err(SharedStreetsError::Encoding(_)));
    }
}
