//! Terminal rendering with `comfy-table`.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use dash_model::StorageSnapshot;

use crate::chart::TypeBreakdown;
use crate::file_table::{FileTable, SortKey};
use crate::format::{format_bytes, format_percent, format_timestamp};
use crate::stats::{StorageStats, UsageLevel};
use crate::theme::{Palette, Rgb};

const BAR_WIDTH: usize = 30;

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.0,
        g: rgb.1,
        b: rgb.2,
    }
}

fn header_cell(label: &str, palette: &Palette) -> Cell {
    Cell::new(label)
        .fg(color(palette.accent))
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T, palette: &Palette) -> Cell {
    Cell::new(value).fg(color(palette.muted))
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

/// A fixed-width text bar, e.g. `[#######-----------]`.
pub fn usage_bar(percent: f64) -> String {
    let clamped = percent.clamp(0.0, 100.0);
    let filled = ((clamped / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

/// Stat cards plus a usage bar.
pub fn render_overview(snapshot: &StorageSnapshot, palette: &Palette) -> String {
    let stats = StorageStats::from_snapshot(snapshot);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Metric", palette),
        header_cell("Value", palette),
        header_cell("Details", palette),
    ]);
    apply_table_style(&mut table);
    for card in stats.cards() {
        table.add_row(vec![
            Cell::new(card.title).add_attribute(Attribute::Bold),
            Cell::new(card.value),
            dim_cell(card.detail, palette),
        ]);
    }
    align_column(&mut table, 1, CellAlignment::Right);

    let level_color = match stats.usage_level() {
        UsageLevel::Normal => palette.accent,
        UsageLevel::Warning => palette.warning,
        UsageLevel::Critical => palette.danger,
    };
    let mut bar = Table::new();
    apply_table_style(&mut bar);
    bar.add_row(vec![
        Cell::new(usage_bar(stats.usage_percent)).fg(color(level_color)),
        Cell::new(format_percent(stats.usage_percent)).add_attribute(Attribute::Bold),
    ]);

    format!("{table}\n{bar}")
}

/// The file table with its current sort, filter and selection.
pub fn render_files(snapshot: &StorageSnapshot, files: &FileTable, palette: &Palette) -> String {
    let rows = files.rows(snapshot);
    let mut table = Table::new();
    let headers = ["", "Name", "Size", "Type", "Modified", "Path"].map(|label| {
        let sorted = match label {
            "Name" => files.sort_key() == SortKey::Name,
            "Size" => files.sort_key() == SortKey::Size,
            "Type" => files.sort_key() == SortKey::Type,
            "Modified" => files.sort_key() == SortKey::LastModified,
            _ => false,
        };
        if sorted {
            header_cell(&format!("{label} {}", files.direction().arrow()), palette)
        } else {
            header_cell(label, palette)
        }
    });
    table.set_header(headers.to_vec());
    apply_table_style(&mut table);
    for file in &rows {
        let marker = if files.is_selected(&file.id) { "x" } else { "" };
        table.add_row(vec![
            Cell::new(marker),
            Cell::new(&file.name),
            Cell::new(format_bytes(file.size)),
            dim_cell(&file.file_type, palette),
            Cell::new(format_timestamp(&file.last_modified)),
            dim_cell(&file.path, palette),
        ]);
    }
    align_column(&mut table, 2, CellAlignment::Right);

    let mut footer = format!("{} of {} files", rows.len(), snapshot.files.len());
    if !files.filter().trim().is_empty() {
        footer.push_str(&format!(" matching \"{}\"", files.filter().trim()));
    }
    let selected = files.selected_ids().len();
    if selected > 0 {
        footer.push_str(&format!(
            ", {selected} selected ({})",
            format_bytes(files.selected_size(snapshot))
        ));
    }
    format!("{table}\n{footer}")
}

/// Breakdown legend with a bar per type.
pub fn render_breakdown(snapshot: &StorageSnapshot, palette: &Palette) -> String {
    let breakdown = TypeBreakdown::from_snapshot(snapshot);
    if breakdown.is_empty() {
        return "No storage breakdown available.".to_string();
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Type", palette),
        header_cell("Size", palette),
        header_cell("Share", palette),
        header_cell("", palette),
    ]);
    apply_table_style(&mut table);
    for slice in &breakdown.slices {
        table.add_row(vec![
            Cell::new(&slice.label).add_attribute(Attribute::Bold),
            Cell::new(format_bytes(slice.bytes)),
            Cell::new(format_percent(slice.percent)),
            dim_cell(usage_bar(slice.percent), palette),
        ]);
    }
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);

    let untracked = snapshot.used_storage.saturating_sub(breakdown.total_bytes());
    if untracked > 0 {
        table.add_row(vec![
            dim_cell("Untracked", palette),
            dim_cell(format_bytes(untracked), palette),
            dim_cell("-", palette),
            dim_cell("", palette),
        ]);
    }
    table.to_string()
}
