use chrono::NaiveDate;

/// Format a currency amount with the rupee sign and thousands separators:
/// `36000` becomes `"₹36,000"`.
pub fn format_money(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("₹{}", grouped)
}

/// Format a travel date as `"15 Jun, 2025"`.
pub fn format_date(date: &NaiveDate) -> String {
    date.format("%d %b, %Y").to_string()
}

/// Pluralize day/member counts: `"3 days"`, `"1 day"`.
pub fn format_count(count: u32, unit: &str) -> String {
    if count == 1 { format!("1 {}", unit) } else { format!("{} {}s", count, unit) }
}
