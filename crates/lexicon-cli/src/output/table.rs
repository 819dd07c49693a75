//! Table formatting utilities for CLI output.

use comfy_table::{ContentArrangement, Table, presets};

/// What one locale directory contributed for the requested locale.
pub struct DirectoryReport {
    /// Directory as given on the command line.
    pub directory: String,
    /// Catalog file that was loaded, if any.
    pub catalog: Option<String>,
    /// Number of translated messages in that catalog.
    pub messages: Option<usize>,
}

/// Format per-directory catalog data as a table, in precedence order.
pub fn format_directory_table(reports: &[DirectoryReport]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Directory", "Catalog", "Messages"]);

    for (index, report) in reports.iter().enumerate() {
        table.add_row(vec![
            (index + 1).to_string(),
            report.directory.clone(),
            report.catalog.clone().unwrap_or_else(|| "-".to_string()),
            report
                .messages
                .map_or_else(|| "-".to_string(), |count| count.to_string()),
        ]);
    }

    table
}
