//! Type-breakdown chart: slices, legend percentages and pie geometry.
//!
//! Angles are in degrees, clockwise from 12 o'clock. Slice angles cover
//! the full circle in proportion to the breakdown total; the legend
//! percentage is relative to used storage.

use std::fmt::Write;

use dash_model::StorageSnapshot;

/// Slice colours, assigned in slice order and reused cyclically.
pub const PALETTE: [&str; 8] = [
    "#3b82f6", "#10b981", "#f59e0b", "#ef4444", "#8b5cf6", "#ec4899", "#14b8a6", "#64748b",
];

const FULL_CIRCLE: f64 = 360.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub label: String,
    pub bytes: u64,
    /// Share of used storage, 0-100.
    pub percent: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub color: &'static str,
}

impl Slice {
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// SVG path for this slice of a pie centred at (`cx`, `cy`).
    pub fn svg_path(&self, cx: f64, cy: f64, radius: f64) -> String {
        if self.sweep() >= FULL_CIRCLE - f64::EPSILON {
            // A single arc cannot start and end at the same point.
            return format!(
                "M {:.2} {cy:.2} A {radius:.2} {radius:.2} 0 1 1 {:.2} {cy:.2} A {radius:.2} {radius:.2} 0 1 1 {:.2} {cy:.2} Z",
                cx - radius,
                cx + radius,
                cx - radius,
            );
        }
        let (x1, y1) = point_on_circle(cx, cy, radius, self.start_angle);
        let (x2, y2) = point_on_circle(cx, cy, radius, self.end_angle);
        let large_arc = u8::from(self.sweep() > 180.0);
        let mut path = String::new();
        let _ = write!(
            path,
            "M {cx:.2} {cy:.2} L {x1:.2} {y1:.2} A {radius:.2} {radius:.2} 0 {large_arc} 1 {x2:.2} {y2:.2} Z"
        );
        path
    }
}

fn point_on_circle(cx: f64, cy: f64, radius: f64, angle: f64) -> (f64, f64) {
    let radians = angle.to_radians();
    (cx + radius * radians.sin(), cy - radius * radians.cos())
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Slices of the per-type breakdown, largest first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TypeBreakdown {
    pub slices: Vec<Slice>,
}

impl TypeBreakdown {
    pub fn from_snapshot(snapshot: &StorageSnapshot) -> Self {
        let mut entries: Vec<(&String, u64)> = snapshot
            .storage_by_type
            .iter()
            .map(|(label, bytes)| (label, *bytes))
            .filter(|(_, bytes)| *bytes > 0)
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

        let total: u64 = entries.iter().map(|(_, bytes)| bytes).sum();
        let used = snapshot.used_storage;
        let mut start = 0.0;
        let slices = entries
            .into_iter()
            .enumerate()
            .map(|(index, (label, bytes))| {
                let sweep = bytes as f64 / total as f64 * FULL_CIRCLE;
                let end = if index == 0 && bytes == total {
                    FULL_CIRCLE
                } else {
                    (start + sweep).min(FULL_CIRCLE)
                };
                let slice = Slice {
                    label: label.clone(),
                    bytes,
                    percent: if used == 0 {
                        0.0
                    } else {
                        bytes as f64 / used as f64 * 100.0
                    },
                    start_angle: start,
                    end_angle: end,
                    color: PALETTE[index % PALETTE.len()],
                };
                start = end;
                slice
            })
            .collect();
        Self { slices }
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// Bytes covered by all slices.
    pub fn total_bytes(&self) -> u64 {
        self.slices.iter().map(|slice| slice.bytes).sum()
    }

    /// Standalone SVG document for the pie chart.
    pub fn to_svg(&self, size: f64) -> String {
        let radius = size / 2.0;
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#
        );
        for slice in &self.slices {
            let _ = write!(
                svg,
                r#"<path d="{}" fill="{}"><title>{}</title></path>"#,
                slice.svg_path(radius, radius, radius),
                slice.color,
                escape_xml(&slice.label)
            );
        }
        svg.push_str("</svg>");
        svg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::collections::BTreeMap;

    fn snapshot(by_type: &[(&str, u64)], used: u64) -> StorageSnapshot {
        let mut snapshot = StorageSnapshot::default_at(Utc::now());
        snapshot.used_storage = used;
        snapshot.storage_by_type = by_type
            .iter()
            .map(|(label, bytes)| (label.to_string(), *bytes))
            .collect::<BTreeMap<_, _>>();
        snapshot
    }

    #[test]
    fn slices_are_largest_first_and_cover_the_circle() {
        let breakdown =
            TypeBreakdown::from_snapshot(&snapshot(&[("Audio", 25), ("Video", 50), ("Docs", 25)], 200));
        let labels: Vec<_> = breakdown.slices.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, ["Video", "Audio", "Docs"]);
        assert_eq!(breakdown.slices[0].start_angle, 0.0);
        assert_eq!(breakdown.slices[0].end_angle, 180.0);
        assert_eq!(breakdown.slices[2].end_angle, 360.0);
        let sweep: f64 = breakdown.slices.iter().map(Slice::sweep).sum();
        assert!((sweep - 360.0).abs() < 1e-9);
        assert_eq!(breakdown.slices[0].percent, 25.0);
    }

    #[test]
    fn zero_entries_are_skipped() {
        let breakdown = TypeBreakdown::from_snapshot(&snapshot(&[("Empty", 0)], 10));
        assert!(breakdown.is_empty());
        assert_eq!(breakdown.to_svg(100.0).matches("<path").count(), 0);
    }

    #[test]
    fn svg_titles_are_escaped() {
        let breakdown =
            TypeBreakdown::from_snapshot(&snapshot(&[("Docs & <Notes>", 10)], 10));
        let svg = breakdown.to_svg(100.0);
        assert!(svg.contains("<title>Docs &amp; &lt;Notes&gt;</title>"));
        assert!(!svg.contains("<Notes>"));
    }

    #[test]
    fn single_slice_is_a_full_circle() {
        let breakdown = TypeBreakdown::from_snapshot(&snapshot(&[("Only", 10)], 10));
        let path = breakdown.slices[0].svg_path(50.0, 50.0, 50.0);
        assert_eq!(
            path,
            "M 0.00 50.00 A 50.00 50.00 0 1 1 100.00 50.00 A 50.00 50.00 0 1 1 0.00 50.00 Z"
        );
    }

    #[test]
    fn quarter_slice_path() {
        let slice = Slice {
            label: "q".to_string(),
            bytes: 1,
            percent: 25.0,
            start_angle: 0.0,
            end_angle: 90.0,
            color: PALETTE[0],
        };
        assert_eq!(
            slice.svg_path(50.0, 50.0, 50.0),
            "M 50.00 50.00 L 50.00 0.00 A 50.00 50.00 0 0 1 100.00 50.00 Z"
        );
    }
}
