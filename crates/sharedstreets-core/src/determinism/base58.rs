//! Base-58 text encoding for digests.
//!
//! The byte string is read as a big-endian unsigned integer and written in
//! base 58, most significant digit first. Each leading zero byte becomes one
//! leading `'1'` (the zero digit), so the encoding is reversible and
//! `[0, 0, 1]` and `[1]` never collide.
//!
//! The alphabet omits `0`, `O`, `I` and `l`.

use crate::errors::{SharedStreetsError, SharedStreetsResult};

/// Digit alphabet, index = digit value.
pub const BASE58_ALPHABET: &[u8; 58] =
    b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

const BASE: u32 = 58;
const ZERO_DIGIT: char = '1';

// Reverse lookup for decoding. 0xff marks characters outside the alphabet.
const DECODE_MAP: [u8; 128] = {
    let mut map = [0xffu8; 128];
    let mut i = 0;
    while i < BASE58_ALPHABET.len() {
        map[BASE58_ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    map
};

/// Encode bytes as base-58.
pub fn encode_base58(bytes: &[u8]) -> String {
    let zeros = bytes.iter().take_while(|b| **b == 0).count();

    // Little-endian base-58 digits. log(256)/log(58) < 1.37.
    let mut digits: Vec<u8> = Vec::with_capacity((bytes.len() - zeros) * 137 / 100 + 1);
    for &byte in &bytes[zeros..] {
        let mut carry = u32::from(byte);
        for d in digits.iter_mut() {
            carry += u32::from(*d) << 8;
            *d = (carry % BASE) as u8;
            carry /= BASE;
        }
        while carry > 0 {
            digits.push((carry % BASE) as u8);
            carry /= BASE;
        }
    }

    let mut out = String::with_capacity(zeros + digits.len());
    out.extend(std::iter::repeat(ZERO_DIGIT).take(zeros));
    out.extend(digits.iter().rev().map(|&d| BASE58_ALPHABET[usize::from(d)] as char));
    out
}

/// Decode base-58 text produced by [`encode_base58`].
pub fn decode_base58(text: &str) -> SharedStreetsResult<Vec<u8>> {
    let zeros = text.chars().take_while(|c| *c == ZERO_DIGIT).count();

    // Little-endian bytes.
    let mut bytes: Vec<u8> = Vec::with_capacity(text.len());
    for (pos, ch) in text.char_indices().skip(zeros) {
        let value = usize::try_from(u32::from(ch))
            .ok()
            .and_then(|i| DECODE_MAP.get(i))
            .copied()
            .filter(|v| *v != 0xff)
            .ok_or_else(|| {
                SharedStreetsError::invalid_input(format!(
                    "invalid base58 character {ch:?} at byte {pos}"
                ))
            })?;

        let mut carry = u32::from(value);
        for b in bytes.iter_mut() {
            carry += u32::from(*b) * BASE;
            *b = (carry & 0xff) as u8;
            carry >>= 8;
        }
        while carry > 0 {
            bytes.push((carry & 0xff) as u8);
            carry >>= 8;
        }
    }

    let mut out = vec![0u8; zeros];
    out.extend(bytes.iter().rev());
    Ok(out)
}

/// True if every character of `text` is in [`BASE58_ALPHABET`].
pub fn is_base58(text: &str) -> bool {
    text.bytes().all(|b| BASE58_ALPHABET.contains(&b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn alphabet_excludes_ambiguous() {
        for c in [b'0', b'O', b'I', b'l'] {
            assert!(!BASE58_ALPHABET.contains(&c));
        }
        let mut sorted = BASE58_ALPHABET.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 58);
    }

    #[test]
    fn small_values() {
        assert_eq!(encode_base58(&[]), "");
        assert_eq!(encode_base58(&[0]), "1");
        assert_eq!(encode_base58(&[57]), "z");
        assert_eq!(encode_base58(&[58]), "21");
        assert_eq!(encode_base58(&[0, 0, 1]), "112");
    }

    #[test]
    fn all_zero_digest() {
        assert_eq!(encode_base58(&[0u8; 16]), "1".repeat(16));
    }

    #[test]
    fn all_ones_digest() {
        assert_eq!(encode_base58(&[0xff; 16]), "YcVfxkQb6JRzqk5kF2tNLv");
    }

    #[test]
    fn decode_inverts_encode() {
        for input in [&[][..], &[0][..], &[0, 0, 7, 255][..], &[1, 2, 3, 4, 5][..]] {
            assert_eq!(decode_base58(&encode_base58(input)).unwrap(), input);
        }
    }

    #[test]
    fn decode_rejects_ambiguous_chars() {
        assert_matches!(decode_base58("abc0"), Err(SharedStreetsError::InvalidInput(_)));
        assert_matches!(decode_base58("Ol"), Err(SharedStreetsError::InvalidInput(_)));
        assert_matches!(decode_base58("é"), Err(SharedStreetsError::InvalidInput(_)));
    }

    #[test]
    fn membership() {
        assert!(is_base58("F585H3jn72yicbJhf4791w"));
        assert!(!is_base58("F585H3jn72yicbJhf4791l"));
    }
}
