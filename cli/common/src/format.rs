//! Formatting utilities for CLI output.

/// Format bytes as a human-readable string using binary units.
///
/// # Examples
///
/// ```
/// use tier_cli_common::format_bytes;
///
/// assert_eq!(format_bytes(500), "500 B");
/// assert_eq!(format_bytes(131_072), "128.00 KiB");
/// assert_eq!(format_bytes(1_073_741_824), "1.00 GiB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["KiB", "MiB", "GiB", "TiB", "PiB"];

    if bytes < 1024 {
        return format!("{bytes} B");
    }

    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    format!("{value:.2} {}", UNITS[unit])
}

/// Format a count with thousands separators.
///
/// # Examples
///
/// ```
/// use tier_cli_common::format_number;
///
/// assert_eq!(format_number(999), "999");
/// assert_eq!(format_number(1_234_567), "1,234,567");
/// ```
pub fn format_number(n: u64) -> String {
    group_thousands(&n.to_string())
}

/// Format a dollar amount with cents and thousands separators.
///
/// # Examples
///
/// ```
/// use tier_cli_common::format_usd;
///
/// assert_eq!(format_usd(1234.5), "$1,234.50");
/// assert_eq!(format_usd(-5.85), "-$5.85");
/// ```
pub fn format_usd(amount: f64) -> String {
    let cents = format!("{:.2}", amount.abs());
    let (whole, fraction) = cents.split_once('.').unwrap_or((&cents, "00"));
    let sign = if amount < 0.0 && cents != "0.00" { "-" } else { "" };

    format!("{sign}${}.{fraction}", group_thousands(whole))
}

fn group_thousands(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result
}
