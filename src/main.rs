//! Command line front end for computing OPIE challenge responses.

use std::env;

use anyhow::{bail, Context};
use clap::Parser;

use opiekey::{compute_response_range, Algorithm, OutputFormat};

const PASSPHRASE_ENV_VAR: &str = "OPIE_PASSPHRASE";

/// Program for computing responses to OTP challenges.
///
/// opiekey takes an optional count of the number of responses to print
/// along with a (maximum) sequence number, seed and optional secret pass
/// phrase as command line args, then produces an OPIE response as six
/// words or hexadecimal numbers. If the OPIE_PASSPHRASE environment
/// variable is set it will be used for the secret pass phrase. If no
/// secret pass phrase was specified as a command line argument or
/// environment variable, the program will prompt for it.
#[derive(Debug, Parser)]
#[command(name = "opiekey", version, verbatim_doc_comment)]
struct Cli {
    /// The (maximum) sequence number from the challenge
    sequence: usize,

    /// The seed from the challenge
    seed: String,

    /// The secret pass phrase
    passphrase: Option<String>,

    /// Selects MD4 as the response generation algorithm
    #[arg(short = '4', long)]
    md4: bool,

    /// Selects MD5 as the response generation algorithm (the default)
    #[arg(short = '5', long)]
    md5: bool,

    /// Selects SHA1 as the response generation algorithm
    #[arg(short = 's', long)]
    sha1: bool,

    /// Output the OTPs as hexadecimal numbers instead of six words
    #[arg(short = 'x', long)]
    hex: bool,

    /// The number of one time access passwords to print
    #[arg(short = 'n', long = "number", default_value_t = 1)]
    number: usize,
}

impl Cli {
    // sha1 > md4 > md5 when several algorithm flags are set.
    fn algorithm(&self) -> Algorithm {
        if self.sha1 {
            Algorithm::Sha1
        } else if self.md4 {
            Algorithm::Md4
        } else {
            Algorithm::Md5
        }
    }
}

fn acquire_passphrase(cli: &Cli, algorithm: Algorithm) -> anyhow::Result<String> {
    if let Some(passphrase) = &cli.passphrase {
        return Ok(passphrase.clone());
    }

    if let Ok(passphrase) = env::var(PASSPHRASE_ENV_VAR) {
        if !passphrase.is_empty() {
            log::debug!("using pass phrase from {PASSPHRASE_ENV_VAR}");
            return Ok(passphrase);
        }
    }

    println!("Using the {algorithm} algorithm to compute response.");
    println!("Reminder: Don't use opiekey from telnet or dial-in sessions.");
    rpassword::prompt_password("Enter secret pass phrase: ")
        .context("failed to read the secret pass phrase")
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    if cli.number == 0 {
        bail!("the number of passwords to print must be at least 1");
    }

    let algorithm = cli.algorithm();
    let passphrase = acquire_passphrase(&cli, algorithm)?;
    let format = if cli.hex { OutputFormat::Hex } else { OutputFormat::Words };

    log::debug!(
        "computing {} {} response(s) ending at sequence number {}",
        cli.number,
        algorithm,
        cli.sequence,
    );

    let responses = compute_response_range(
        cli.sequence,
        cli.number,
        &cli.seed,
        &passphrase,
        algorithm,
        format,
    );

    let labeled = responses.len() > 1;
    for r in responses {
        if labeled {
            println!("{}: {}", r.sequence, r.response);
        } else {
            println!("{}", r.response);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn default_algorithm_is_md5() {
        let cli = parse(&["opiekey", "499", "az3817"]);
        assert_eq!(cli.algorithm(), Algorithm::Md5);
    }

    #[test]
    fn sha1_wins_over_md4_and_md5() {
        let cli = parse(&["opiekey", "-4", "-5", "-s", "499", "az3817"]);
        assert_eq!(cli.algorithm(), Algorithm::Sha1);
        let cli = parse(&["opiekey", "-4", "-5", "499", "az3817"]);
        assert_eq!(cli.algorithm(), Algorithm::Md4);
    }

    #[test]
    fn positional_passphrase_is_optional() {
        let cli = parse(&["opiekey", "499", "az3817", "d0g x h0us3"]);
        assert_eq!(cli.passphrase.as_deref(), Some("d0g x h0us3"));
        let cli = parse(&["opiekey", "499", "az3817"]);
        assert_eq!(cli.passphrase, None);
    }

    #[test]
    fn rejects_non_numeric_sequence() {
        assert!(Cli::try_parse_from(["opiekey", "many", "az3817"]).is_err());
    }

    #[test]
    fn number_flag_parses() {
        let cli = parse(&["opiekey", "-n", "5", "-x", "499", "az3817"]);
        assert_eq!(cli.number, 5);
        assert!(cli.hex);
    }
}
