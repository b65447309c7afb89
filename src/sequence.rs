//! Computing a run of consecutive responses ending at a sequence number.
//!
//! OPIE users often print a batch of upcoming responses at once: the run
//! ends at the challenged sequence number and counts down from there, since
//! the server decrements the sequence with every successful login.

use crate::algorithm::Algorithm;
use crate::encode;
use crate::fold;

/// Which rendering of the response value to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Six dictionary words (the default form).
    Words,
    /// Four groups of four uppercase hex digits.
    Hex,
}

/// A rendered response paired with the sequence number that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengeResponse {
    pub sequence: usize,
    pub response: String,
}

/// Computes `count` responses for the sequence numbers ending at `last`,
/// lowest first.
///
/// Each response is derived independently from its own sequence number;
/// a count exceeding `last + 1` is clamped to the sequence numbers that
/// exist (down to 0).
pub fn compute_response_range (
    last: usize,
    count: usize,
    seed: &str,
    passphrase: &str,
    algorithm: Algorithm,
    format: OutputFormat,
) -> Vec<ChallengeResponse> {
    let first = last.saturating_sub(count.saturating_sub(1));
    (first..=last)
        .map(|sequence| {
            let value = fold::otp_value(sequence, seed, passphrase, algorithm);
            let response = match format {
                OutputFormat::Words => encode::word_response(value),
                OutputFormat::Hex => encode::hex_response(value),
            };
            ChallengeResponse { sequence, response }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compute_word_response;

    #[test]
    fn single_response_matches_direct_computation() {
        let batch = compute_response_range(
            3, 1, "az3817", "d0g x h0us3", Algorithm::Md5, OutputFormat::Words,
        );
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].sequence, 3);
        assert_eq!(
            batch[0].response,
            compute_word_response(3, "az3817", "d0g x h0us3", Algorithm::Md5),
        );
    }

    #[test]
    fn range_ends_at_last_and_counts_up() {
        let batch = compute_response_range(
            10, 3, "testseed", "testpassphrase", Algorithm::Md5, OutputFormat::Hex,
        );
        let sequences: Vec<usize> = batch.iter().map(|r| r.sequence).collect();
        assert_eq!(sequences, [8, 9, 10]);
        for r in &batch {
            assert_eq!(
                r.response,
                crate::compute_hex_response(r.sequence, "testseed", "testpassphrase", Algorithm::Md5),
            );
        }
    }

    #[test]
    fn count_larger_than_sequence_clamps_at_zero() {
        let batch = compute_response_range(
            2, 10, "testseed", "testpassphrase", Algorithm::Md5, OutputFormat::Words,
        );
        let sequences: Vec<usize> = batch.iter().map(|r| r.sequence).collect();
        assert_eq!(sequences, [0, 1, 2]);
    }
}
