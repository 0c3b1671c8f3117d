use std::fs;
use std::path::Path;

use crate::Result;

/// Header prepended to every generated file.
pub const GENERATED_HEADER: &str = "//! This is a generated file, please do not edit manually. Changes can be
//! made in the schemas under `src/schemas/` and regenerated with `gce-mv`.";

/// Writes `contents` to `file` unless it already holds them.
///
/// Returns whether the file was updated.
pub fn ensure_file_contents(file: &Path, contents: &str) -> Result<bool> {
    if let Ok(old_contents) = fs::read_to_string(file) {
        if normalize_newlines(&old_contents) == normalize_newlines(contents) {
            return Ok(false);
        }
    }

    tracing::info!("{} was not up-to-date, updating", file.display());
    if let Some(parent) = file.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file, contents)?;
    Ok(true)
}

fn normalize_newlines(s: &str) -> String {
    s.replace("\r\n", "\n")
}

/// Collection name for a record type: `Address` -> `Addresses`, `Disk` -> `Disks`.
pub fn pluralize(s: &str) -> String {
    if s.ends_with('s') {
        format!("{}es", s)
    } else {
        format!("{}s", s)
    }
}

pub fn to_lower_snake_case(s: &str) -> String {
    let mut buf = String::with_capacity(s.len() + 4);
    let mut prev = false;
    for c in s.chars() {
        if c.is_ascii_uppercase() && prev {
            buf.push('_')
        }
        prev = true;

        buf.push(c.to_ascii_lowercase());
    }
    buf
}

pub fn to_upper_snake_case(s: &str) -> String {
    to_lower_snake_case(s).to_ascii_uppercase()
}

/// `InstanceGroupManagers` -> `instanceGroupManagers`
pub fn to_lower_camel_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// Line width generated sources are laid out for, rustfmt's default.
pub const MAX_WIDTH: usize = 100;

/// A function signature the way rustfmt lays it out: on one line when it
/// fits, otherwise one parameter per line. `tail` follows the closing paren,
/// e.g. ` -> Self {`.
pub fn fn_signature(indent: usize, head: &str, params: &[String], tail: &str) -> String {
    let pad = " ".repeat(indent);
    let line = format!("{pad}{head}({}){tail}\n", params.join(", "));
    if line.len() - 1 <= MAX_WIDTH {
        return line;
    }

    let mut out = format!("{pad}{head}(\n");
    for param in params {
        out.push_str(&format!("{pad}    {param},\n"));
    }
    out.push_str(&format!("{pad}){tail}\n"));
    out
}

/// Top-level `impl <trait_ref> for <self_ty> {` header. Too long for one line,
/// the self type moves to its own line and the brace follows on the next.
pub fn impl_header(trait_ref: &str, self_ty: &str) -> String {
    let line = format!("impl {trait_ref} for {self_ty} {{\n");
    if line.len() - 1 <= MAX_WIDTH {
        line
    } else {
        format!("impl {trait_ref}\n    for {self_ty}\n{{\n")
    }
}
