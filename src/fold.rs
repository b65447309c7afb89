//! The hash-and-fold chain that reduces a digest stream to the 64-bit
//! response value.

use crate::algorithm::Algorithm;

/// Folds one digest down to 8 bytes.
///
/// The digest is read as little-endian 32-bit words. The low half of the
/// result is `w0 ^ w2`, with `w4` mixed in when the digest is wider than
/// 16 bytes; the high half is `w1 ^ w3`. Both halves are written back
/// little-endian. Unlike the RFC 2289 appendix code, OPIE applies this
/// same word order to SHA1 digests with no byte swapping.
fn fold (digest: &[u8]) -> [u8; 8] {
    debug_assert!(digest.len() == 16 || digest.len() == 20);

    let mut words = [0u32; 5];
    for i in 0..digest.len() / 4 {
        words[i] = u32::from_le_bytes([
            digest[i * 4],
            digest[i * 4 + 1],
            digest[i * 4 + 2],
            digest[i * 4 + 3],
        ]);
    }

    let low = if digest.len() > 16 {
        words[0] ^ words[2] ^ words[4]
    } else {
        words[0] ^ words[2]
    };
    let high = words[1] ^ words[3];

    let mut key = [0u8; 8];
    key[..4].copy_from_slice(&low.to_le_bytes());
    key[4..].copy_from_slice(&high.to_le_bytes());
    key
}

/// Runs the OPIE hash chain and returns the folded 8-byte key.
///
/// The chain starts from the exact byte concatenation of `seed` and
/// `passphrase` (no separator, no case normalization) and performs
/// `sequence + 1` rounds of hash-then-fold: sequence number 0 still hashes
/// once.
pub fn fold_to_key (sequence: usize, seed: &str, passphrase: &str, algorithm: Algorithm) -> [u8; 8] {
    let mut input = Vec::with_capacity(seed.len() + passphrase.len());
    input.extend_from_slice(seed.as_bytes());
    input.extend_from_slice(passphrase.as_bytes());

    let mut key = fold(&algorithm.digest(&input));
    for _ in 0..sequence {
        key = fold(&algorithm.digest(&key));
    }
    key
}

/// Packs the folded key into the canonical 64-bit response value.
///
/// Bytes accumulate most-significant first. This big-endian assembly is
/// deliberately the opposite of the little-endian word order inside
/// [`fold`]; both orders are fixed by the reference algorithm.
pub fn key_to_value (key: [u8; 8]) -> u64 {
    u64::from_be_bytes(key)
}

/// Derives the 64-bit response value for one challenge.
pub fn otp_value (sequence: usize, seed: &str, passphrase: &str, algorithm: Algorithm) -> u64 {
    key_to_value(fold_to_key(sequence, seed, passphrase, algorithm))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic() {
        let a = otp_value(42, "seed", "pass phrase", Algorithm::Md5);
        let b = otp_value(42, "seed", "pass phrase", Algorithm::Md5);
        assert_eq!(a, b);
    }

    #[test]
    fn sequence_zero_hashes_once() {
        // One round over "rounds0secret" folded by hand.
        let digest = Algorithm::Md5.digest(b"rounds0secret");
        let expected = key_to_value(fold(&digest));
        assert_eq!(otp_value(0, "rounds0", "secret", Algorithm::Md5), expected);
    }

    #[test]
    fn adjacent_sequence_numbers_differ() {
        for alg in [Algorithm::Md4, Algorithm::Md5, Algorithm::Sha1] {
            let lo = otp_value(7, "az3817", "d0g x h0us3", alg);
            let hi = otp_value(8, "az3817", "d0g x h0us3", alg);
            assert_ne!(lo, hi);
        }
    }

    #[test]
    fn algorithms_disagree() {
        let md4 = otp_value(3, "az3817", "d0g x h0us3", Algorithm::Md4);
        let md5 = otp_value(3, "az3817", "d0g x h0us3", Algorithm::Md5);
        let sha1 = otp_value(3, "az3817", "d0g x h0us3", Algorithm::Sha1);
        assert_ne!(md4, md5);
        assert_ne!(md5, sha1);
        assert_ne!(md4, sha1);
    }

    #[test]
    fn sha1_fold_uses_fifth_word() {
        // A 20-byte digest whose fifth word is nonzero must change the low
        // half of the fold result.
        let mut digest = [0u8; 20];
        digest[16] = 0xAA;
        let with = fold(&digest);
        let without = fold(&digest[..16]);
        assert_ne!(with, without);
        assert_eq!(&with[4..], &without[4..]);
    }

    #[test]
    fn seed_and_passphrase_concatenate_without_separator() {
        // Moving bytes across the seed/passphrase boundary must not change
        // the chain input.
        let a = otp_value(5, "abcd", "ef", Algorithm::Md5);
        let b = otp_value(5, "ab", "cdef", Algorithm::Md5);
        assert_eq!(a, b);
    }
}
