//! Utility functions

/// Short magnitude label for a size: `5_000 → "5K"`, `1_000_000 → "1M"`
///
/// Values are truncated, not rounded (`1_500 → "1K"`); sizes below a
/// thousand are printed verbatim.
pub fn magnitude_label(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{}M", n / 1_000_000)
    } else if n >= 1_000 {
        format!("{}K", n / 1_000)
    } else {
        n.to_string()
    }
}

/// Format number with thousands separators
pub fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
