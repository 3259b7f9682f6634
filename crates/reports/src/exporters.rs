//! Statement exporters - CSV, JSON, Markdown.

use crate::statement::Statement;

/// Trait for exporting reports to different formats
pub trait ReportExporter {
    /// Export to the target format
    fn export(&self, report: &dyn ReportData) -> String;

    /// Get the file extension for this format
    fn extension(&self) -> &'static str;
}

/// Trait for data that can be exported
pub trait ReportData {
    /// Get the report title
    fn title(&self) -> String;

    /// Get column headers
    fn headers(&self) -> Vec<String>;

    /// Get data rows
    fn rows(&self) -> Vec<Vec<String>>;

    /// Get summary figures as key-value pairs
    fn summary(&self) -> Vec<(String, String)>;
}

impl ReportData for Statement {
    fn title(&self) -> String {
        format!("Statement for {} ({})", self.owner, self.username)
    }

    fn headers(&self) -> Vec<String> {
        vec!["#".to_string(), "type".to_string(), "amount".to_string()]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| {
                vec![
                    row.index.to_string(),
                    row.kind.as_str().to_string(),
                    row.amount.to_string(),
                ]
            })
            .collect()
    }

    fn summary(&self) -> Vec<(String, String)> {
        vec![
            ("balance".to_string(), format!("{} EUR", self.summary.balance)),
            ("in".to_string(), format!("{} EUR", self.summary.inflow)),
            ("out".to_string(), format!("{} EUR", self.summary.outflow)),
            ("interest".to_string(), self.display_interest().to_string()),
        ]
    }
}

// ============================================================================
// CSV Exporter
// ============================================================================

/// CSV format exporter
pub struct CsvExporter {
    delimiter: char,
    include_header: bool,
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self {
            delimiter: ',',
            include_header: true,
        }
    }
}

impl CsvExporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn without_header(mut self) -> Self {
        self.include_header = false;
        self
    }

    fn escape_field(&self, field: &str) -> String {
        if field.contains(self.delimiter) || field.contains('"') || field.contains('\n') {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }
}

impl ReportExporter for CsvExporter {
    fn export(&self, report: &dyn ReportData) -> String {
        let mut output = String::new();
        let delimiter = self.delimiter.to_string();

        if self.include_header {
            let headers: Vec<String> = report
                .headers()
                .iter()
                .map(|h| self.escape_field(h))
                .collect();
            output.push_str(&headers.join(&delimiter));
            output.push('\n');
        }

        for row in report.rows() {
            let escaped: Vec<String> =
                row.iter().map(|field| self.escape_field(field)).collect();
            output.push_str(&escaped.join(&delimiter));
            output.push('\n');
        }

        output
    }

    fn extension(&self) -> &'static str {
        "csv"
    }
}

// ============================================================================
// JSON Exporter
// ============================================================================

/// JSON format exporter
pub struct JsonExporter {
    pretty: bool,
}

impl Default for JsonExporter {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl JsonExporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }
}

impl ReportExporter for JsonExporter {
    fn export(&self, report: &dyn ReportData) -> String {
        let headers = report.headers();

        let json_rows: Vec<serde_json::Value> = report
            .rows()
            .iter()
            .map(|row| {
                let mut obj = serde_json::Map::new();
                for (i, header) in headers.iter().enumerate() {
                    let value = row.get(i).cloned().unwrap_or_default();
                    obj.insert(header.clone(), serde_json::Value::String(value));
                }
                serde_json::Value::Object(obj)
            })
            .collect();

        let summary_obj: serde_json::Map<String, serde_json::Value> = report
            .summary()
            .into_iter()
            .map(|(k, v)| (k, serde_json::Value::String(v)))
            .collect();

        let output = serde_json::json!({
            "title": report.title(),
            "summary": summary_obj,
            "movements": json_rows,
        });

        if self.pretty {
            serde_json::to_string_pretty(&output).unwrap_or_default()
        } else {
            serde_json::to_string(&output).unwrap_or_default()
        }
    }

    fn extension(&self) -> &'static str {
        "json"
    }
}

// ============================================================================
// Markdown Exporter
// ============================================================================

/// Markdown table exporter
#[derive(Default)]
pub struct MarkdownExporter;

impl MarkdownExporter {
    pub fn new() -> Self {
        Self
    }
}

impl ReportExporter for MarkdownExporter {
    fn export(&self, report: &dyn ReportData) -> String {
        let mut output = String::new();

        output.push_str(&format!("# {}\n\n", report.title()));

        let headers = report.headers();
        output.push_str(&format!("| {} |\n", headers.join(" | ")));
        output.push_str(&format!(
            "|{}\n",
            " --- |".repeat(headers.len())
        ));
        for row in report.rows() {
            output.push_str(&format!("| {} |\n", row.join(" | ")));
        }

        output.push('\n');
        for (key, value) in report.summary() {
            output.push_str(&format!("- **{}**: {}\n", key, value));
        }

        output
    }

    fn extension(&self) -> &'static str {
        "md"
    }
}
