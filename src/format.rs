//! Canonical amount rendering shared by front ends.

/// Formats an amount with a currency symbol, two decimals, and comma-grouped
/// thousands: `1234.5` becomes `$1,234.50`, `-400.0` becomes `-$400.00`.
pub fn format_currency(amount: f64, symbol: &str) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = group_thousands(cents / 100);
    let fraction = cents % 100;
    if negative {
        format!("-{}{}.{:02}", symbol, whole, fraction)
    } else {
        format!("{}{}.{:02}", symbol, whole, fraction)
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
