//! Renderings of the 64-bit response value: grouped hexadecimal and the
//! six-word dictionary form, plus the inverse mappings.

use cow_utils::CowUtils;
use hex::FromHex;

use crate::dictionary::DICTIONARY;

/// Renders the response value as four groups of four uppercase hex digits,
/// e.g. `A9B0 E62C 4362 0217`.
pub fn hex_response (value: u64) -> String {
    format!(
        "{:04X} {:04X} {:04X} {:04X}",
        (value >> 48) & 0xFFFF,
        (value >> 32) & 0xFFFF,
        (value >> 16) & 0xFFFF,
        value & 0xFFFF,
    )
}

/// Parses a hex response back into the response value.
///
/// Spaces and tabs between digit groups are ignored, so both
/// `719FA2C4CC39E73B` and `719F A2C4 CC39 E73B` parse. Returns `None`
/// unless exactly 16 hex digits remain after stripping.
pub fn parse_hex_response (s: &str) -> Option<u64> {
    let compact = s.cow_replace(" ", "");
    let compact = compact.cow_replace("\t", "");
    let bytes = <[u8; 8]>::from_hex(compact.as_bytes()).ok()?;
    Some(u64::from_be_bytes(bytes))
}

/// Sums the thirty-two 2-bit groups of `value` with ordinary addition.
///
/// Only the low two bits of the result feed the word encoding. The
/// reference encoder accumulates the full sum and discards the carries, so
/// this one does too rather than reducing mod 4 as it goes.
pub fn checksum (value: u64) -> u64 {
    let mut p = 0;
    let mut work = value;
    for _ in 0..32 {
        p += work & 3;
        work >>= 2;
    }
    p
}

/// Splits the response value into its six dictionary words.
///
/// The first five words carry the eleven-bit groups covering bits 9..64,
/// most significant first. The sixth packs the nine low bits into the high
/// end of its index and the 2-bit [`checksum`] into the low end, giving a
/// transcription error one detectable word.
pub fn six_words (value: u64) -> [&'static str; 6] {
    let p = checksum(value);
    let mut words = [""; 6];
    for i in 0..5 {
        let index = (value >> ((4 - i) * 11 + 9)) & 0x7FF;
        words[i] = DICTIONARY[index as usize];
    }
    words[5] = DICTIONARY[(((value << 2) & 0x7FC) | (p & 3)) as usize];
    words
}

/// The six-word form joined with single spaces,
/// e.g. `DEED WOLF LOAN HIND INCA HYMN`.
pub fn word_response (value: u64) -> String {
    six_words(value).join(" ")
}

/// Decodes six dictionary words back into a response value.
///
/// Returns the value and whether the checksum embedded in the sixth word
/// matches a recomputation from the decoded bits. `None` if any word is
/// not in the dictionary; lookup is case-sensitive and the dictionary is
/// all uppercase.
pub fn decode_words (words: [&str; 6]) -> Option<(u64, bool)> {
    let mut value: u64 = 0;
    for word in words.iter().take(5) {
        let index = DICTIONARY.iter().position(|w| *w == *word)?;
        value = (value << 11) | index as u64;
    }
    // The last index carries nine value bits and two checksum bits.
    let index = DICTIONARY.iter().position(|w| *w == words[5])? as u64;
    value = (value << 9) | (index >> 2);
    Some((value, index & 3 == checksum(value) & 3))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_grouping_and_padding() {
        assert_eq!(hex_response(0xA9B0_E62C_4362_0217), "A9B0 E62C 4362 0217");
        assert_eq!(hex_response(0), "0000 0000 0000 0000");
        assert_eq!(hex_response(0x0000_0000_0000_00FF), "0000 0000 0000 00FF");
    }

    #[test]
    fn hex_parses_with_and_without_spaces() {
        assert_eq!(parse_hex_response("719F A2C4 CC39 E73B"), Some(0x719F_A2C4_CC39_E73B));
        assert_eq!(parse_hex_response("719fa2c4cc39e73b"), Some(0x719F_A2C4_CC39_E73B));
        assert_eq!(parse_hex_response("719F\tA2C4 CC39 E73B"), Some(0x719F_A2C4_CC39_E73B));
        assert_eq!(parse_hex_response("719F A2C4 CC39"), None);
        assert_eq!(parse_hex_response("xyzt A2C4 CC39 E73B"), None);
    }

    #[test]
    fn checksum_keeps_carries() {
        // All 32 groups set to 0b11: the plain sum is 96, not 96 mod 4.
        assert_eq!(checksum(u64::MAX), 96);
        assert_eq!(checksum(0), 0);
        assert_eq!(checksum(3), 3);
    }

    #[test]
    fn first_word_is_most_significant() {
        // Only bits 53..64 set: every word but the first is the zeroth
        // dictionary entry or checksum-only.
        let words = six_words(0xFFE0_0000_0000_0000);
        assert_eq!(words[0], DICTIONARY[0x7FF]);
        assert_eq!(words[1], DICTIONARY[0]);
    }

    #[test]
    fn sixth_word_carries_low_bits_and_checksum() {
        // value 1: p = 1, low nine bits = 1 -> index (1 << 2) | 1 = 5.
        assert_eq!(six_words(1)[5], DICTIONARY[5]);
    }

    #[test]
    fn words_round_trip_with_valid_checksum() {
        for value in [0u64, 1, 0x18D6_0488_D477_AAAB, u64::MAX, 0x0123_4567_89AB_CDEF] {
            let (decoded, ok) = decode_words(six_words(value)).unwrap();
            assert_eq!(decoded, value);
            assert!(ok);
        }
    }

    #[test]
    fn corrupted_word_fails_checksum_or_lookup() {
        let mut words = six_words(0x719F_A2C4_CC39_E73B);
        words[5] = DICTIONARY[0];
        // Either the checksum flags the damage or the value changed.
        let (decoded, ok) = decode_words(words).unwrap();
        assert!(!ok || decoded != 0x719F_A2C4_CC39_E73B);
        assert_eq!(decode_words(["NOT", "IN", "THE", "WORD", "LIST", "XYZZY"]), None);
    }
}
