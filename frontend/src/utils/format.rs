//! pt-BR number formatting for prices and mileage.

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

/// `320000` -> `"320.000"`.
pub fn format_integer(value: i64) -> String {
    let grouped = group_thousands(&value.unsigned_abs().to_string());
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

pub fn format_mileage(km: i32) -> String {
    format!("{} km", format_integer(i64::from(km)))
}

/// `450000.5` -> `"R$ 450.000,50"`.
pub fn format_brl(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as i64;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!(
        "R$ {}{},{:02}",
        sign,
        format_integer(cents / 100),
        cents % 100
    )
}

/// Compact stock value used on the dashboard: `1234567.0` -> `"R$ 1235k"`.
pub fn format_thousands_brl(value: f64) -> String {
    format!("R$ {:.0}k", value / 1000.0)
}
