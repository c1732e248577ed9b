//! Coercion of free-form numeric form input.
//!
//! Quantity and price fields arrive as text. They are never rejected: the
//! longest numeric prefix is used, the way `parseInt`/`parseFloat` read a
//! browser number input, and text without a numeric prefix becomes zero.

use std::str::FromStr;

use rust_decimal::Decimal;

/// Coerce quantity text into an integer.
///
/// Leading whitespace and an optional sign are accepted, then decimal digits
/// up to the first non-digit. `"3.7"` is 3, `"12abc"` is 12.
///
/// ```
/// use order_desk_core::input::coerce_quantity;
///
/// assert_eq!(coerce_quantity("3"), 3);
/// assert_eq!(coerce_quantity(" -4 boxes"), -4);
/// assert_eq!(coerce_quantity("abc"), 0);
/// ```
#[must_use]
pub fn coerce_quantity(input: &str) -> i64 {
    let (sign, rest) = split_sign(input.trim_start());
    let digits = leading_digits(rest);

    if digits.is_empty() {
        tracing::warn!(input, "quantity has no leading integer, using 0");
        return 0;
    }

    match i64::from_str(&format!("{sign}{digits}")) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(input, error = %e, "quantity out of range, using 0");
            0
        }
    }
}

/// Coerce price text into a decimal.
///
/// Leading whitespace and an optional sign are accepted, then digits with at
/// most one decimal point and an optional `e`/`E` exponent. `"9.99"` is 9.99,
/// `".5"` is 0.5, `"4.5.6"` is 4.5, `"1e2"` is 100. An exponent outside the
/// decimal range is ignored.
///
/// ```
/// use std::str::FromStr;
///
/// use order_desk_core::input::coerce_price;
/// use rust_decimal::Decimal;
///
/// assert_eq!(coerce_price("9.99"), Decimal::from_str("9.99").unwrap());
/// assert_eq!(coerce_price("1.5e2"), Decimal::from(150));
/// assert_eq!(coerce_price("free"), Decimal::ZERO);
/// ```
#[must_use]
pub fn coerce_price(input: &str) -> Decimal {
    let (sign, rest) = split_sign(input.trim_start());
    let whole = leading_digits(rest);
    let after_whole = rest.get(whole.len()..).unwrap_or("");
    let fraction = after_whole.strip_prefix('.').map_or("", leading_digits);
    let after_mantissa = if after_whole.starts_with('.') {
        after_whole.get(1 + fraction.len()..).unwrap_or("")
    } else {
        after_whole
    };

    if whole.is_empty() && fraction.is_empty() {
        tracing::warn!(input, "price has no leading number, using 0");
        return Decimal::ZERO;
    }

    let whole = if whole.is_empty() { "0" } else { whole };
    let literal = if fraction.is_empty() {
        format!("{sign}{whole}")
    } else {
        format!("{sign}{whole}.{fraction}")
    };

    let mantissa = match Decimal::from_str(&literal) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(input, error = %e, "price out of range, using 0");
            return Decimal::ZERO;
        }
    };

    let Some(exponent) = exponent(after_mantissa) else {
        return mantissa;
    };
    Decimal::from_scientific(&format!("{literal}e{exponent}")).unwrap_or_else(|e| {
        tracing::warn!(input, error = %e, "price exponent out of range, ignoring it");
        mantissa
    })
}

/// Signed exponent digits after an `e`/`E`, without a leading `+`.
fn exponent(s: &str) -> Option<String> {
    let rest = s.strip_prefix(['e', 'E'])?;
    let (sign, rest) = split_sign(rest);
    let digits = leading_digits(rest);
    (!digits.is_empty()).then(|| format!("{sign}{digits}"))
}

fn split_sign(s: &str) -> (&'static str, &str) {
    if let Some(rest) = s.strip_prefix('-') {
        ("-", rest)
    } else if let Some(rest) = s.strip_prefix('+') {
        ("", rest)
    } else {
        ("", s)
    }
}

fn leading_digits(s: &str) -> &str {
    let end = s
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(s.len());
    s.get(..end).unwrap_or("")
}
