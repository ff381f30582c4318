use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use percent_encoding::percent_decode_str;
use paytick_core::{Document, DocumentIntake, PayRecord, PayslipExtractor};

/// Runs intake on a local file. Missing files are refused before intake sees them.
pub fn read_payslip<E: PayslipExtractor>(intake: &DocumentIntake<E>, path: &Path) -> Result<PayRecord> {
    if !path.is_file() {
        tracing::warn!("Payslip not found: {}", path.display());
        bail!("File not found: {}", path.display());
    }
    let document = Document::from_path(path);
    Ok(intake.intake(&document)?)
}

/// Terminals deliver a dropped file as pasted text: a path, maybe quoted,
/// maybe a `file://` URI with percent-escapes.
pub fn parse_dropped_path(text: &str) -> Option<PathBuf> {
    let first = text.lines().map(str::trim).find(|l| !l.is_empty())?;
    let unquoted = first
        .strip_prefix('\'')
        .and_then(|s| s.strip_suffix('\''))
        .or_else(|| first.strip_prefix('"').and_then(|s| s.strip_suffix('"')))
        .unwrap_or(first);

    let path = match unquoted.strip_prefix("file://") {
        Some(rest) => percent_decode_str(rest).decode_utf8_lossy().into_owned(),
        None => unescape_spaces(unquoted),
    };
    if path.is_empty() {
        None
    } else {
        Some(PathBuf::from(path))
    }
}

// Shells escape spaces when dragging into some terminals: `My\ Payslip.pdf`
fn unescape_spaces(input: &str) -> String {
    input.replace("\\ ", " ")
}
