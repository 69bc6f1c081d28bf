//! Implementation for the `rule` subcommand.

use std::io::{self, Write};

use attach::AttachRule;
use tracing::warn;

use crate::{
    cli::RuleArgs,
    error::{Error, Result},
};

/// Parse a decimal or `0x`-prefixed hexadecimal byte.
fn parse_value(raw: &str) -> Result<u8> {
    let trimmed = raw.trim();
    let parsed = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => trimmed.parse(),
    };
    parsed.map_err(|err| Error::parse(format!("'{raw}': {err}")))
}

/// Describe one packed value.
fn describe(raw: &str) -> Result<String> {
    let bits = parse_value(raw)?;
    let rule = AttachRule::from_bits(bits)?;
    Ok(format!("0x{bits:02X}  {rule}"))
}

/// Decode every value, printing one line per value.
pub fn run(args: &RuleArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut failed = 0usize;
    for raw in &args.values {
        match describe(raw) {
            Ok(line) => writeln!(out, "{line}")?,
            Err(err) => {
                warn!(value = %raw, "{err}");
                writeln!(out, "{raw}  error: {err}")?;
                failed += 1;
            }
        }
    }
    if failed > 0 {
        return Err(Error::other(format!("{failed} value(s) could not be decoded")));
    }
    Ok(())
}
