//! Query document construction.
//!
//! The template is a plain text file with `{{ name }}` placeholders (a leading
//! dot, `{{ .name }}`, is accepted too). Known names are `disk_path`,
//! `file_path` and `num` (alias `sample_count`); the Go-style field names
//! `DiskPath`, `FilePath` and `Num` resolve to the same values. String values
//! are escaped so they stay valid inside a quoted string literal of the query.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::config::QueryParameters;
use crate::error::{GprofError, Result};

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\{\s*\.?([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").expect("placeholder regex is valid")
});

/// Builds query documents from a template file on disk.
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    template_path: PathBuf,
}

impl QueryBuilder {
    pub fn new<P: Into<PathBuf>>(template_path: P) -> Self {
        Self {
            template_path: template_path.into(),
        }
    }

    pub fn template_path(&self) -> &Path {
        &self.template_path
    }

    /// Read the template and fill it from `params`.
    ///
    /// The file is read on every call so edits are picked up on the next tick.
    pub fn build(&self, params: &QueryParameters) -> Result<String> {
        let source = fs::read_to_string(&self.template_path).map_err(|e| {
            GprofError::template(format!(
                "Failed to read template {:?}: {}",
                self.template_path, e
            ))
        })?;

        render_template(&source, params)
    }
}

/// Substitute every placeholder in `source`.
pub fn render_template(source: &str, params: &QueryParameters) -> Result<String> {
    let mut out = String::with_capacity(source.len());
    let mut last = 0;

    for caps in PLACEHOLDER.captures_iter(source) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        check_literal(&source[last..whole.start()], last)?;

        let name = &caps[1];
        let value = lookup(params, name).ok_or_else(|| {
            GprofError::template(format!("unknown field {:?} in placeholder", name))
        })?;

        out.push_str(&source[last..whole.start()]);
        out.push_str(&value);
        last = whole.end();
    }

    check_literal(&source[last..], last)?;
    out.push_str(&source[last..]);

    Ok(out)
}

fn lookup(params: &QueryParameters, name: &str) -> Option<String> {
    match name {
        "disk_path" | "DiskPath" => Some(escape_string(&params.disk_path)),
        "file_path" | "FilePath" => Some(escape_string(&params.file_path)),
        "num" | "sample_count" | "Num" => Some(params.sample_count.to_string()),
        _ => None,
    }
}

/// Text between placeholders must not open another one.
fn check_literal(text: &str, offset: usize) -> Result<()> {
    match text.find("{{") {
        Some(pos) => Err(GprofError::template(format!(
            "malformed placeholder at byte {}",
            offset + pos
        ))),
        None => Ok(()),
    }
}

fn escape_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            c => escaped.push(c),
        }
    }
    escaped
}
