#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/foliolabs/folio/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod charts;
pub mod export;
pub mod report;
pub mod summary;

pub use export::{ExportError, ExportFormat, Exporter};
pub use report::{ReportError, export_report, make_responsive, render_html};
pub use summary::{to_ascii_table, to_markdown};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
