//! Free-text query parsing.
//!
//! Shoppers type price constraints straight into the search box
//! ("sneakers under $150", "$20-$50"). Price terms are recognized and
//! stripped before the remaining text is used for substring matching.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::money::{Currency, Money};

static RANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$?(\d+\.?\d*)\s*-\s*\$?(\d+\.?\d*)").unwrap());
static UNDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:under|less than|<)\s*\$?(\d+\.?\d*)").unwrap());
static OVER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:over|greater than|>)\s*\$?(\d+\.?\d*)").unwrap());

/// A free-text query with price terms extracted.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedQuery {
    /// Lowercased remaining text after price terms were stripped.
    pub text: String,
    /// Inclusive lower price bound, if the query named one.
    pub min_price: Option<Money>,
    /// Inclusive upper price bound, if the query named one.
    pub max_price: Option<Money>,
}

impl ParsedQuery {
    /// Check a price against the parsed window.
    pub fn price_in_window(&self, price: Money) -> bool {
        if let Some(min) = self.min_price {
            if price.amount_cents < min.amount_cents {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if price.amount_cents > max.amount_cents {
                return false;
            }
        }
        true
    }
}

/// Extract price terms from a raw query.
///
/// A range pattern (`$20-$50`, `20 - 50`) wins outright; otherwise
/// "under"/"less than"/"<" sets the upper bound and "over"/"greater
/// than"/">" sets the lower bound, and both may appear in one query.
/// Every matched term is stripped from the remaining text.
pub fn parse_price_terms(raw: &str, currency: Currency) -> ParsedQuery {
    let mut text = raw.to_lowercase().trim().to_string();
    let mut min_price = None;
    let mut max_price = None;

    if let Some((range, low, high)) = capture_two(&RANGE, &text) {
        min_price = parse_amount(&low, currency);
        max_price = parse_amount(&high, currency);
        text = strip(&text, range);
    } else {
        if let Some((range, amount)) = capture_one(&UNDER, &text) {
            max_price = parse_amount(&amount, currency);
            text = strip(&text, range);
        }
        if let Some((range, amount)) = capture_one(&OVER, &text) {
            min_price = parse_amount(&amount, currency);
            text = strip(&text, range);
        }
    }

    ParsedQuery {
        text,
        min_price,
        max_price,
    }
}

fn capture_one(re: &Regex, text: &str) -> Option<(std::ops::Range<usize>, String)> {
    let caps = re.captures(text)?;
    let whole = caps.get(0)?;
    let amount = caps.get(1)?;
    Some((whole.range(), amount.as_str().to_string()))
}

fn capture_two(re: &Regex, text: &str) -> Option<(std::ops::Range<usize>, String, String)> {
    let caps = re.captures(text)?;
    let whole = caps.get(0)?;
    let low = caps.get(1)?;
    let high = caps.get(2)?;
    Some((
        whole.range(),
        low.as_str().to_string(),
        high.as_str().to_string(),
    ))
}

fn parse_amount(text: &str, currency: Currency) -> Option<Money> {
    text.parse::<f64>()
        .ok()
        .map(|amount| Money::from_decimal(amount, currency))
}

fn strip(text: &str, range: std::ops::Range<usize>) -> String {
    let mut out = String::with_capacity(text.len());
    out.push_str(&text[..range.start]);
    out.push_str(&text[range.end..]);
    out.trim().to_string()
}
