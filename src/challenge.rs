//! Parsing of OPIE challenge strings.
//!
//! A server challenges with a line such as `otp-md5 499 az3817`. The
//! algorithm token, sequence number and seed are everything a client needs
//! (besides the secret passphrase) to compute the response.

use cow_utils::CowUtils;
use thiserror::Error;

use crate::algorithm::Algorithm;

/// Challenges longer than this are rejected outright rather than parsed.
const MAX_CHALLENGE_LEN: usize = 128;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChallengeError {
    #[error("challenge exceeds {MAX_CHALLENGE_LEN} bytes")]
    TooLong,

    #[error("challenge does not start with an otp- algorithm token")]
    MissingPrefix,

    #[error("unsupported hash algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("missing or malformed sequence number")]
    BadSequence,

    #[error("missing seed")]
    MissingSeed,
}

/// A parsed OPIE challenge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Challenge<'a> {
    pub algorithm: Algorithm,
    pub sequence: usize,
    pub seed: &'a str,
}

/// Parses a challenge of the form `otp-<algorithm> <sequence> <seed>`.
///
/// The algorithm token is matched case-insensitively; the seed is returned
/// verbatim, borrowed from the input. Trailing tokens (some servers append
/// an `ext` marker) are ignored.
pub fn parse_challenge (s: &str) -> Result<Challenge<'_>, ChallengeError> {
    if s.len() > MAX_CHALLENGE_LEN {
        return Err(ChallengeError::TooLong);
    }

    let mut tokens = s.split_ascii_whitespace();

    let alg_token = tokens.next().ok_or(ChallengeError::MissingPrefix)?;
    let alg_token = alg_token.cow_to_ascii_lowercase();
    let alg_name = alg_token
        .strip_prefix("otp-")
        .ok_or(ChallengeError::MissingPrefix)?;
    let algorithm = match alg_name {
        "md4" => Algorithm::Md4,
        "md5" => Algorithm::Md5,
        "sha1" => Algorithm::Sha1,
        other => return Err(ChallengeError::UnknownAlgorithm(other.to_owned())),
    };

    let sequence = tokens
        .next()
        .and_then(|t| t.parse::<usize>().ok())
        .ok_or(ChallengeError::BadSequence)?;

    let seed = tokens.next().ok_or(ChallengeError::MissingSeed)?;

    Ok(Challenge { algorithm, sequence, seed })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_challenge() {
        let c = parse_challenge("otp-md5 499 az3817").unwrap();
        assert_eq!(c.algorithm, Algorithm::Md5);
        assert_eq!(c.sequence, 499);
        assert_eq!(c.seed, "az3817");
    }

    #[test]
    fn algorithm_token_is_case_insensitive() {
        let c = parse_challenge("OTP-SHA1 99 ke1234").unwrap();
        assert_eq!(c.algorithm, Algorithm::Sha1);
    }

    #[test]
    fn trailing_ext_marker_is_ignored() {
        let c = parse_challenge("otp-md4 42 dog2 ext").unwrap();
        assert_eq!(c.algorithm, Algorithm::Md4);
        assert_eq!(c.seed, "dog2");
    }

    #[test]
    fn seed_case_is_preserved() {
        let c = parse_challenge("otp-md5 499 Ke1234").unwrap();
        assert_eq!(c.seed, "Ke1234");
    }

    #[test]
    fn rejects_malformed_challenges() {
        assert_eq!(parse_challenge(""), Err(ChallengeError::MissingPrefix));
        assert_eq!(
            parse_challenge("md5 499 az3817"),
            Err(ChallengeError::MissingPrefix),
        );
        assert_eq!(
            parse_challenge("otp-sha256 499 az3817"),
            Err(ChallengeError::UnknownAlgorithm("sha256".to_owned())),
        );
        assert_eq!(parse_challenge("otp-md5 many az3817"), Err(ChallengeError::BadSequence));
        assert_eq!(parse_challenge("otp-md5 499"), Err(ChallengeError::MissingSeed));
        assert_eq!(
            parse_challenge(&"otp-md5 499 az3817 ".repeat(20)),
            Err(ChallengeError::TooLong),
        );
    }
}
