/// `1234567` -> `"1,234,567"`.
pub fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Dollar amount with thousands separators. Cents are dropped from whole
/// values.
pub fn currency(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let cents = (value.abs() * 100.0).round() as u64;
    let (whole, frac) = (cents / 100, cents % 100);
    if frac == 0 {
        format!("{}${}", sign, thousands(whole))
    } else {
        format!("{}${}.{:02}", sign, thousands(whole), frac)
    }
}

pub fn percent(value: f64) -> String {
    format!("{:.1}%", value)
}
