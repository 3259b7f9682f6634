//! # Minibank Reports
//!
//! The presentation layer: turns an account's movement log and ledger
//! figures into a statement (rows plus summary), and exports statements
//! as CSV, JSON or Markdown.
//!
//! All rounding happens here. The ledger engine returns exact values;
//! the statement rounds interest to 2 decimal places for display.
//!
//! ## Exporters
//!
//! - [`CsvExporter`] - CSV with proper escaping
//! - [`JsonExporter`] - JSON (pretty or compact)
//! - [`MarkdownExporter`] - Markdown tables
//!
//! ## Example
//!
//! ```rust,ignore
//! use minibank_reports::{CsvExporter, ReportExporter, SortOrder, Statement};
//!
//! let statement = Statement::build(&account, SortOrder::LatestFirst);
//! println!("{statement}");
//! let csv = CsvExporter::new().export(&statement);
//! ```

pub mod exporters;
pub mod statement;

pub use exporters::{CsvExporter, JsonExporter, MarkdownExporter, ReportData, ReportExporter};
pub use statement::{SortOrder, Statement, StatementRow};
