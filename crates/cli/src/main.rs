mod config;

use anyhow::Context;
use b58uuid::{B58Uuid, UuidResult};
use clap::{Parser, Subcommand};
use config::{CliConfig, UuidFormat};
use std::io::{self, BufRead, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "b58uuid")]
#[command(version, about = "Convert UUIDs to and from 22-character Base58 strings")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode UUIDs to Base58
    Encode {
        /// UUIDs (hyphenated or not, any case); read from stdin when omitted
        uuids: Vec<String>,
    },
    /// Decode Base58 strings to UUIDs
    Decode {
        /// 22-character Base58 strings; read from stdin when omitted
        encoded: Vec<String>,
        /// Print UUIDs without hyphens
        #[arg(long)]
        simple: bool,
    },
    /// Generate random Base58-encoded UUIDs
    Generate {
        /// Number of identifiers to print (default: B58UUID_GENERATE_COUNT or 1)
        #[arg(short = 'n', long, value_parser = clap::value_parser!(u64).range(1..))]
        count: Option<u64>,
    },
}

/// Entry point for the `b58uuid` command.
///
/// Loads `.env`, installs logging on stderr, resolves [`CliConfig`] and runs one subcommand.
/// Converted values go to stdout, one per line; per-input failures go to stderr and make the
/// process exit non-zero after all inputs have been processed.
///
/// # Environment Variables
/// - `RUST_LOG`: log filter (default directive: `b58uuid=warn`)
/// - `B58UUID_GENERATE_COUNT`: default `generate` count (default: 1)
/// - `B58UUID_UUID_FORMAT`: `hyphenated` (default) or `simple`
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("b58uuid=warn".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let cfg = CliConfig::from_env()?;
    tracing::debug!(?cfg, "resolved configuration");

    let failures = match cli.command {
        Some(Commands::Encode { uuids }) => convert(
            uuids,
            io::stdin().lock(),
            io::stdout().lock(),
            io::stderr().lock(),
            b58uuid::encode,
        )?,
        Some(Commands::Decode { encoded, simple }) => {
            let format = if simple {
                UuidFormat::Simple
            } else {
                cfg.uuid_format()
            };
            convert(
                encoded,
                io::stdin().lock(),
                io::stdout().lock(),
                io::stderr().lock(),
                |input| B58Uuid::parse(input).map(|id| format.render(&id)),
            )?
        }
        Some(Commands::Generate { count }) => {
            generate(count.unwrap_or(cfg.generate_count()), io::stdout().lock())?;
            0
        }
        None => {
            println!("Use 'b58uuid --help' for commands");
            0
        }
    };

    if failures > 0 {
        anyhow::bail!("{} input(s) could not be converted", failures);
    }

    Ok(())
}

/// Converts each value with `f`, taking newline-separated values from `input` when none were
/// given on the command line.
///
/// Converted values are written to `out`, one per line. Each failure is written to `err` as
/// `error: <input>: <message>` and processing carries on with the next value.
///
/// # Returns
///
/// The number of inputs that failed to convert.
fn convert<R, W, E, F>(
    values: Vec<String>,
    input: R,
    mut out: W,
    mut err: E,
    f: F,
) -> anyhow::Result<usize>
where
    R: BufRead,
    W: Write,
    E: Write,
    F: Fn(&str) -> UuidResult<String>,
{
    let mut failures = 0;

    let mut process = |value: &str| -> anyhow::Result<()> {
        match f(value) {
            Ok(output) => writeln!(out, "{}", output).context("failed to write to stdout")?,
            Err(e) => {
                failures += 1;
                writeln!(err, "error: {}: {}", value, e).context("failed to write to stderr")?;
            }
        }
        Ok(())
    };

    if values.is_empty() {
        tracing::debug!("reading inputs from stdin");
        for line in input.lines() {
            let line = line.context("failed to read from stdin")?;
            let value = line.trim();
            if !value.is_empty() {
                process(value)?;
            }
        }
    } else {
        for value in &values {
            process(value)?;
        }
    }

    Ok(failures)
}

fn generate<W: Write>(count: u64, mut out: W) -> anyhow::Result<()> {
    for _ in 0..count {
        writeln!(out, "{}", b58uuid::generate()).context("failed to write to stdout")?;
    }
    tracing::debug!(count, "generated identifiers");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::io::Cursor;

    fn lines(buffer: &[u8]) -> Vec<&str> {
        std::str::from_utf8(buffer).unwrap().lines().collect()
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_decode_with_simple_flag() {
        let cli = Cli::try_parse_from(["b58uuid", "decode", "--simple", "BWBeN28Vb7cMEx7Ym8AUzs"])
            .unwrap();
        match cli.command {
            Some(Commands::Decode { encoded, simple }) => {
                assert!(simple);
                assert_eq!(encoded, vec!["BWBeN28Vb7cMEx7Ym8AUzs".to_string()]);
            }
            _ => panic!("Expected decode command"),
        }
    }

    #[test]
    fn test_parse_generate_rejects_zero_count() {
        assert!(Cli::try_parse_from(["b58uuid", "generate", "-n", "0"]).is_err());
    }

    #[test]
    fn test_parse_encode_without_values_reads_stdin() {
        let cli = Cli::try_parse_from(["b58uuid", "encode"]).unwrap();
        match cli.command {
            Some(Commands::Encode { uuids }) => assert!(uuids.is_empty()),
            _ => panic!("Expected encode command"),
        }
    }

    #[test]
    fn test_convert_stdin_trims_skips_blank_and_continues_after_failure() {
        let input = Cursor::new("550e8400-e29b-41d4-a716-446655440000\n\n  bad  \n");
        let mut out = Vec::new();
        let mut err = Vec::new();

        let failures = convert(Vec::new(), input, &mut out, &mut err, b58uuid::encode).unwrap();

        assert_eq!(failures, 1);
        assert_eq!(lines(&out), vec!["BWBeN28Vb7cMEx7Ym8AUzs"]);
        assert_eq!(lines(&err), vec!["error: bad: Invalid UUID format: bad"]);
    }

    #[test]
    fn test_convert_processes_every_input_after_failures() {
        let input = Cursor::new("bad\nBWBeN28Vb7cMEx7Ym8AUzs\n0000000000000000000000\n");
        let mut out = Vec::new();
        let mut err = Vec::new();

        let failures = convert(Vec::new(), input, &mut out, &mut err, b58uuid::decode).unwrap();

        assert_eq!(failures, 2);
        assert_eq!(lines(&out), vec!["550e8400-e29b-41d4-a716-446655440000"]);
        assert_eq!(
            lines(&err),
            vec![
                "error: bad: Invalid Base58 length: expected 22, got 3",
                "error: 0000000000000000000000: Invalid Base58 character at position 0: 0",
            ]
        );
    }

    #[test]
    fn test_convert_prefers_values_over_stdin() {
        let input = Cursor::new("not read\n");
        let mut out = Vec::new();
        let mut err = Vec::new();
        let values = vec![
            "00000000-0000-0000-0000-000000000000".to_string(),
            "ffffffff-ffff-ffff-ffff-ffffffffffff".to_string(),
        ];

        let failures = convert(values, input, &mut out, &mut err, b58uuid::encode).unwrap();

        assert_eq!(failures, 0);
        assert_eq!(
            lines(&out),
            vec!["1111111111111111111111", "YcVfxkQb6JRzqk5kF2tNLv"]
        );
        assert!(err.is_empty());
    }

    #[test]
    fn test_convert_decode_with_simple_format() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let values = vec!["BWBeN28Vb7cMEx7Ym8AUzs".to_string()];

        let failures = convert(values, Cursor::new(""), &mut out, &mut err, |input| {
            B58Uuid::parse(input).map(|id| UuidFormat::Simple.render(&id))
        })
        .unwrap();

        assert_eq!(failures, 0);
        assert_eq!(lines(&out), vec!["550e8400e29b41d4a716446655440000"]);
    }

    #[test]
    fn test_generate_writes_count_lines() {
        let mut out = Vec::new();

        generate(5, &mut out).unwrap();

        let generated = lines(&out);
        assert_eq!(generated.len(), 5);
        for encoded in generated {
            assert_eq!(encoded.len(), 22);
            assert!(B58Uuid::parse(encoded).is_ok());
        }
    }
}
