// crates/ffxmanip-cli/src/prompt.rs
//
// Stdin helpers for the interactive session. Parsing errors are plain
// strings fed straight back to the user before re-prompting; the engine
// only ever sees validated values.

use std::io::{self, Write};

use ffxmanip_core::catalogue::DamageValues;

/// Print `message`, flush, read one trimmed line.
pub fn ask(message: &str) -> anyhow::Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Parse exactly three damage values, accepting `, - / \ .` as
/// separators alongside whitespace.
pub fn parse_damage_values(input: &str) -> Result<DamageValues, String> {
    let cleaned: String = input
        .chars()
        .map(|c| match c {
            ',' | '-' | '/' | '\\' | '.' => ' ',
            other => other,
        })
        .collect();

    let mut values = Vec::new();
    for token in cleaned.split_whitespace() {
        let v: u16 = token
            .parse()
            .map_err(|_| format!("'{token}' is not a valid damage value."))?;
        values.push(v);
    }
    if values.len() != 3 {
        return Err("Need 3 damage values.".into());
    }
    Ok([values[0], values[1], values[2]])
}

/// A target seed as typed by the user: small integers select a catalogue
/// index, anything else is a literal seed value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedChoice {
    Index(usize),
    Value(u32),
}

pub fn parse_seed_choice(input: &str) -> Result<SeedChoice, String> {
    let n: i64 = input
        .parse()
        .map_err(|_| "Seed must be an integer.".to_string())?;
    if (0..=255).contains(&n) {
        Ok(SeedChoice::Index(n as usize))
    } else if n >= 0 && n <= i64::from(u32::MAX) {
        Ok(SeedChoice::Value(n as u32))
    } else {
        Err(format!("{n} is not a 32-bit seed."))
    }
}

pub fn parse_mystery_byte(input: &str) -> Result<u8, String> {
    input
        .parse::<u8>()
        .map_err(|_| "Mystery byte must be an integer between 0 and 255.".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damage_values_accept_mixed_separators() {
        assert_eq!(parse_damage_values("269 133 288"), Ok([269, 133, 288]));
        assert_eq!(parse_damage_values("269,133-288"), Ok([269, 133, 288]));
        assert_eq!(parse_damage_values("269/133\\288"), Ok([269, 133, 288]));
        assert_eq!(parse_damage_values(" 269 . 133 . 288 "), Ok([269, 133, 288]));
    }

    #[test]
    fn damage_values_reject_bad_arity_and_junk() {
        assert!(parse_damage_values("269 133").is_err());
        assert!(parse_damage_values("269 133 288 300").is_err());
        assert!(parse_damage_values("269 abc 288").is_err());
        assert!(parse_damage_values("").is_err());
    }

    #[test]
    fn seed_choice_splits_index_from_value() {
        assert_eq!(parse_seed_choice("0"), Ok(SeedChoice::Index(0)));
        assert_eq!(parse_seed_choice("255"), Ok(SeedChoice::Index(255)));
        assert_eq!(
            parse_seed_choice("3556394350"),
            Ok(SeedChoice::Value(3556394350))
        );
        assert!(parse_seed_choice("-1").is_err());
        assert!(parse_seed_choice("4294967296").is_err());
        assert!(parse_seed_choice("abc").is_err());
    }

    #[test]
    fn mystery_byte_bounds() {
        assert_eq!(parse_mystery_byte("0"), Ok(0));
        assert_eq!(parse_mystery_byte("255"), Ok(255));
        assert!(parse_mystery_byte("256").is_err());
        assert!(parse_mystery_byte("-1").is_err());
        assert!(parse_mystery_byte("").is_err());
    }
}
