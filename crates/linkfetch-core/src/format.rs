//! Human-readable byte sizes for the run log.

const KB: u64 = 1024;
const MB: u64 = KB * 1024;
const GB: u64 = MB * 1024;

/// Formats a byte count as `500 bytes`, `2.00 KB`, `5.00 MB` or `3.00 GB`.
///
/// Scaled values keep two decimals (rounded half away from zero) and group
/// the integer part with commas, e.g. `1,023.44 KB`.
#[must_use]
pub fn format_file_size(bytes: u64) -> String {
    if bytes >= GB {
        format!("{} GB", two_decimals(bytes, GB))
    } else if bytes >= MB {
        format!("{} MB", two_decimals(bytes, MB))
    } else if bytes >= KB {
        format!("{} KB", two_decimals(bytes, KB))
    } else {
        format!("{} bytes", bytes)
    }
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn two_decimals(bytes: u64, unit: u64) -> String {
    let hundredths = (bytes as f64 * 100.0 / unit as f64).round() as u64;
    format!("{}.{:02}", group_thousands(hundredths / 100), hundredths % 100)
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
