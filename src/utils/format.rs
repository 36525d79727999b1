use chrono::NaiveTime;

/// Format a duration in seconds to "Xh Ym" or "Ym" string
pub fn format_duration_secs(secs: i64) -> String {
    if secs <= 0 {
        return "now".to_string();
    }
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}

/// Format a NaiveTime to "HH:MM"
pub fn format_time(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

/// Round to a whole amount and group thousands: 1234567.6 → "1,234,568"
pub fn format_amount(amount: f64) -> String {
    let rounded = amount.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if negative {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Format a decimal quantity, trimming a zero fraction: 2.0 → "2", 1.8 → "1.8"
pub fn format_quantity(value: f64) -> String {
    if value == value.floor() {
        format!("{}", value as i64)
    } else {
        format!("{:.1}", value)
    }
}
