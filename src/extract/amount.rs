use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use rust_decimal::Decimal;

use crate::lexicon::{CURRENCY_SYMBOL, CURRENCY_WORD};

static AMOUNT: OnceLock<Regex> = OnceLock::new();
static ANCHORED_AMOUNT: OnceLock<Regex> = OnceLock::new();

/// A number written with optional thousands separators and decimals,
/// "1,250.50" or "45".
fn amount_pattern() -> &'static Regex {
    AMOUNT.get_or_init(|| {
        Regex::new(r"\d{1,3}(?:,\d{3})*(?:\.\d+)?").expect("invalid amount pattern")
    })
}

/// Same number shape, but only when followed by a currency marker.
fn anchored_amount_pattern() -> &'static Regex {
    ANCHORED_AMOUNT.get_or_init(|| {
        let pattern = format!(
            r"(\d{{1,3}}(?:,\d{{3}})*(?:\.\d+)?)\s*(?:{CURRENCY_WORD}|{CURRENCY_SYMBOL})"
        );
        Regex::new(&pattern).expect("invalid anchored amount pattern")
    })
}

/// Pulls the first number out of a spoken phrase.
///
/// Speech never surrounds the amount with other numerals, so the first match
/// wins without needing a currency anchor.
pub fn extract_amount(text: &str) -> Option<Decimal> {
    let token = amount_pattern().find(text)?.as_str();
    parse_decimal(token)
}

/// Pulls the first number that sits directly before "บาท" or "฿".
///
/// Receipt text is full of numerals that are not amounts, so only a
/// currency-anchored match is accepted.
pub fn extract_anchored_amount(text: &str) -> Option<Decimal> {
    let captures = anchored_amount_pattern().captures(text)?;
    parse_decimal(captures.get(1)?.as_str())
}

fn parse_decimal(token: &str) -> Option<Decimal> {
    Decimal::from_str(&token.replace(',', "")).ok()
}
