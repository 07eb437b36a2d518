//! Per-invocation preferences. Read once, then passed into the core as plain
//! values; nothing here is held across runs.

use clap::Args;

use crate::defaults::Defaults;
use crate::export::ExportFormat;

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct Preferences {
    /// Export format for the generated batch
    #[arg(long = "format", value_enum, env = "SWG_OUTPUT_FORMAT", default_value = Defaults::OUTPUT_FORMAT)]
    pub output_format: ExportFormat,

    /// Number of wallets (free text; unparseable input falls back to 10)
    #[arg(long = "count", env = "SWG_DEFAULT_WALLET_COUNT", default_value = Defaults::WALLET_COUNT_TEXT)]
    pub default_wallet_count: String,

    /// Render public keys next to the secret keys
    #[arg(long, env = "SWG_INCLUDE_PUBLIC_KEYS")]
    pub include_public_keys: bool,

    /// Save the batch to local history
    #[arg(long = "save", env = "SWG_SAVE_TO_HISTORY")]
    pub save_to_history: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            output_format: ExportFormat::Csv,
            default_wallet_count: Defaults::WALLET_COUNT_TEXT.to_string(),
            include_public_keys: false,
            save_to_history: false,
        }
    }
}

impl Preferences {
    pub fn wallet_count(&self) -> i64 {
        parse_count_text(&self.default_wallet_count)
    }
}

/// Lenient text -> count coercion with number-literal semantics: decimal,
/// exponent and `0x`/`0o`/`0b` forms are accepted. Empty, non-numeric or zero
/// input becomes the default. Fractions round up, so `2.5` asks for 3 wallets.
/// Everything else, including negative or huge values, is passed through so
/// the generator's strict bound check can report it.
pub fn parse_count_text(text: &str) -> i64 {
    let n = parse_number_text(text);
    if n.is_nan() || n == 0.0 {
        return Defaults::WALLET_COUNT;
    }
    // saturating cast: infinities land on i64::MIN / i64::MAX
    n.ceil() as i64
}

fn parse_number_text(text: &str) -> f64 {
    let t = text.trim();
    if t.is_empty() {
        return 0.0;
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = t.strip_prefix(prefix) {
            if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
                return f64::NAN;
            }
            // valid digits that still fail to parse only overflow
            return u64::from_str_radix(digits, radix)
                .map(|v| v as f64)
                .unwrap_or(f64::INFINITY);
        }
    }

    match t {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    // f64::from_str also takes "inf" / "nan" spellings; number literals don't
    if t.chars().any(|c| c.is_ascii_alphabetic() && !matches!(c, 'e' | 'E')) {
        return f64::NAN;
    }
    t.parse::<f64>().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_or_missing_text_defaults_to_ten() {
        for t in ["", "   ", "abc", "0", "0.0", "-0", "12abc", "0x", "0xzz", "inf", "nan", "NaN", "1e"] {
            assert_eq!(parse_count_text(t), 10, "{t:?}");
        }
    }

    #[test]
    fn integers_pass_through_unbounded() {
        assert_eq!(parse_count_text(" 25 "), 25);
        assert_eq!(parse_count_text("1000"), 1000);
        assert_eq!(parse_count_text("5000"), 5000);
        assert_eq!(parse_count_text("-3"), -3);
        assert_eq!(parse_count_text("+7"), 7);
    }

    #[test]
    fn number_literal_forms() {
        assert_eq!(parse_count_text("1e3"), 1000);
        assert_eq!(parse_count_text("2E1"), 20);
        assert_eq!(parse_count_text("0x10"), 16);
        assert_eq!(parse_count_text("0o17"), 15);
        assert_eq!(parse_count_text("0b101"), 5);
        assert_eq!(parse_count_text(".5"), 1);
    }

    #[test]
    fn fractions_round_up() {
        assert_eq!(parse_count_text("2.5"), 3);
        assert_eq!(parse_count_text("999.1"), 1000);
        assert_eq!(parse_count_text("1000.5"), 1001);
    }

    #[test]
    fn huge_values_stay_out_of_range() {
        assert_eq!(parse_count_text("Infinity"), i64::MAX);
        assert_eq!(parse_count_text("-Infinity"), i64::MIN);
        assert_eq!(parse_count_text("1e400"), i64::MAX);
        assert_eq!(parse_count_text("0xffffffffffffffffffff"), i64::MAX);
        assert!(crate::batch::validate_count(parse_count_text("1e9")).is_err());
    }

    #[test]
    fn defaults() {
        let p = Preferences::default();
        assert_eq!(p.output_format, ExportFormat::Csv);
        assert_eq!(p.wallet_count(), 10);
        assert!(!p.include_public_keys);
        assert!(!p.save_to_history);
    }
}
