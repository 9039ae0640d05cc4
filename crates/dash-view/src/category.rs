//! Grouping of file types into breakdown categories.

use std::collections::BTreeMap;

use dash_model::FileRecord;

/// Category label for a MIME-ish type string.
pub fn category_for(file_type: &str) -> &'static str {
    let lower = file_type.to_ascii_lowercase();
    let (major, minor) = lower.split_once('/').unwrap_or((lower.as_str(), ""));
    match major {
        "image" => "Images",
        "video" => "Videos",
        "audio" => "Audio",
        "text" => "Documents",
        "application" => match minor {
            "pdf" | "msword" | "rtf" | "json" | "xml" => "Documents",
            m if m.contains("officedocument") || m.contains("opendocument") => "Documents",
            "zip" | "gzip" | "x-tar" | "x-7z-compressed" | "vnd.rar" | "x-rar-compressed" => {
                "Archives"
            }
            _ => "Other",
        },
        _ => "Other",
    }
}

/// Bytes per category, summed from the given files.
pub fn breakdown_from_files(files: &[FileRecord]) -> BTreeMap<String, u64> {
    let mut breakdown = BTreeMap::new();
    for file in files {
        *breakdown
            .entry(category_for(&file.file_type).to_string())
            .or_insert(0) += file.size;
    }
    breakdown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_common_types() {
        assert_eq!(category_for("image/jpeg"), "Images");
        assert_eq!(category_for("VIDEO/MP4"), "Videos");
        assert_eq!(category_for("audio/mpeg"), "Audio");
        assert_eq!(category_for("application/pdf"), "Documents");
        assert_eq!(
            category_for("application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"),
            "Documents"
        );
        assert_eq!(category_for("application/zip"), "Archives");
        assert_eq!(category_for("application/octet-stream"), "Other");
        assert_eq!(category_for("folder"), "Other");
    }
}
