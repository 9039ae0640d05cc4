//! Human-readable formatting helpers.

use chrono::{DateTime, Utc};

const UNITS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];
const STEP: f64 = 1024.0;

/// Format a byte count with binary units: `0 B`, `1.00 KB`, `1.00 GB`.
pub fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= STEP && unit < UNITS.len() - 1 {
        value /= STEP;
        unit += 1;
    }
    format!("{value:.2} {}", UNITS[unit])
}

/// Format a percentage with one decimal place.
pub fn format_percent(percent: f64) -> String {
    format!("{percent:.1}%")
}

/// Format a timestamp the way the file table shows it.
pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.format("%b %d, %Y %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_byte_boundaries() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(1023), "1023 B");
        assert_eq!(format_bytes(1024), "1.00 KB");
        assert_eq!(format_bytes(1536), "1.50 KB");
        assert_eq!(format_bytes(1_048_576), "1.00 MB");
        assert_eq!(format_bytes(1_073_741_824), "1.00 GB");
        assert_eq!(format_bytes(1_099_511_627_776), "1.00 TB");
    }

    #[test]
    fn huge_values_stay_in_largest_unit() {
        assert_eq!(format_bytes(u64::MAX), "16384.00 PB");
    }

    #[test]
    fn formats_percent_and_timestamp() {
        assert_eq!(format_percent(45.0), "45.0%");
        let at = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        assert_eq!(format_timestamp(&at), "Jan 15, 2024 10:30");
    }
}
