use iso_currency::Currency;
use num_format::{Locale, ToFormattedString as _};

/// Standard number decimal places for the given currency
/// (ex. JPY = 0, CNY = 2).
fn decimal_places(currency: Currency) -> u32 {
    currency.exponent().unwrap_or(0) as u32
}

/// Format cash amount with currency symbol, correct number of decimal places,
/// proper thousands separators, and optional trailing decimal mark.
///
/// Always uses en locale ('.' as decimal mark, i.e. 1,000.00). The amount is
/// rounded to the currency's minor unit before formatting.
///
/// For currencies with 0 decimal places, a decimal mark is always included if
/// 'trailing_decimal' is true. For other currencies, this flag has no effect.
pub fn format_amount(amount: f64, currency: Currency, trailing_decimal: bool) -> String {
    let places = decimal_places(currency);
    let scale = 10_u64.pow(places);
    let minor_units = (amount * scale as f64).round() as i64;
    let sign = if minor_units < 0 { "-" } else { "" };
    let minor_units = minor_units.unsigned_abs();
    let whole = (minor_units / scale).to_formatted_string(&Locale::en);

    if places == 0 {
        format!(
            "{sign}{whole}{} {}",
            if trailing_decimal { "." } else { "" },
            currency.symbol()
        )
    } else {
        let fraction = minor_units % scale;
        let width = places as usize;
        format!("{sign}{whole}.{fraction:0width$} {}", currency.symbol())
    }
}

/// Pads or truncates `s` to exactly `width` characters.
pub(crate) fn fit(s: &str, width: usize) -> String {
    let truncated: String = s.chars().take(width).collect();
    format!("{truncated:<width$}")
}
