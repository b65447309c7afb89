//! The digest algorithms an OPIE response can be computed with.

use core::fmt;

use md4::{Digest, Md4};

/// The three hash algorithms defined for OPIE, per
/// [IETF RFC 2289](https://www.rfc-editor.org/rfc/rfc2289.html).
///
/// This is a closed set: servers only ever issue challenges for one of
/// these, so an unsupported algorithm is unrepresentable rather than a
/// runtime error. None of the three is considered secure as a
/// general-purpose hash anymore; `Sha1` is the newest of them and the one
/// to prefer where the server allows a choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Md4,
    Md5,
    Sha1,
}

impl Algorithm {
    /// The uppercase name used in prompts and diagnostics.
    pub const fn name (self) -> &'static str {
        match self {
            Algorithm::Md4 => "MD4",
            Algorithm::Md5 => "MD5",
            Algorithm::Sha1 => "SHA1",
        }
    }

    /// Digest size in bytes: 16 for MD4/MD5, 20 for SHA1.
    pub const fn digest_len (self) -> usize {
        match self {
            Algorithm::Md4 | Algorithm::Md5 => 16,
            Algorithm::Sha1 => 20,
        }
    }

    /// Hashes `input` and returns the raw digest bytes.
    pub fn digest (self, input: &[u8]) -> Vec<u8> {
        match self {
            Algorithm::Md4 => {
                let mut m = Md4::new();
                m.update(input);
                m.finalize().to_vec()
            },
            Algorithm::Md5 => md5::compute(input).0.to_vec(),
            Algorithm::Sha1 => {
                let mut m = sha1_smol::Sha1::new();
                m.update(input);
                m.digest().bytes().to_vec()
            },
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_lengths_match_output() {
        for alg in [Algorithm::Md4, Algorithm::Md5, Algorithm::Sha1] {
            assert_eq!(alg.digest(b"abc").len(), alg.digest_len());
        }
    }

    #[test]
    fn names() {
        assert_eq!(Algorithm::Md4.name(), "MD4");
        assert_eq!(Algorithm::Md5.name(), "MD5");
        assert_eq!(Algorithm::Sha1.to_string(), "SHA1");
    }

    #[test]
    fn md5_known_digest() {
        // RFC 1321 appendix vector for "abc".
        assert_eq!(
            Algorithm::Md5.digest(b"abc"),
            [
                0x90, 0x01, 0x50, 0x98, 0x3c, 0xd2, 0x4f, 0xb0,
                0xd6, 0x96, 0x3f, 0x7d, 0x28, 0xe1, 0x7f, 0x72,
            ],
        );
    }
}
