//! Currency rendering for dashboard figures.

pub fn symbol_for(code: &str) -> String {
    match code {
        "INR" => "₹".into(),
        "USD" => "$".into(),
        "EUR" => "€".into(),
        "GBP" => "£".into(),
        "JPY" => "¥".into(),
        _ => code.into(),
    }
}

pub fn minor_units_for(code: &str) -> usize {
    match code {
        "JPY" => 0,
        _ => 2,
    }
}

/// Formats `amount` with the currency symbol and the locale's digit grouping.
///
/// `en-IN` groups the last three digits, then pairs (`1,00,000`); every other
/// locale groups in threes.
pub fn format_amount(amount: f64, currency: &str, locale: &str) -> String {
    let body = format!("{:.*}", minor_units_for(currency), amount.abs());
    let (int_part, fraction) = match body.find('.') {
        Some(pos) => body.split_at(pos),
        None => (body.as_str(), ""),
    };
    let grouped = if locale.eq_ignore_ascii_case("en-IN") {
        group_indian(int_part)
    } else {
        group_digits(int_part, 3)
    };
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{}{}{}{}", sign, symbol_for(currency), grouped, fraction)
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    format!("{},{}", group_digits(head, 2), tail)
}

fn group_digits(digits: &str, size: usize) -> String {
    let mut grouped = String::new();
    for (count, ch) in digits.chars().rev().enumerate() {
        if count != 0 && count % size == 0 {
            grouped.insert(0, ',');
        }
        grouped.insert(0, ch);
    }
    grouped
}
