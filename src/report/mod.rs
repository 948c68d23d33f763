// SPDX-License-Identifier: PMPL-1.0-or-later

//! Console output for the `folio` command

pub mod formatter;
pub mod output;

pub use formatter::ReportFormatter;
pub use output::OutputFormat;
