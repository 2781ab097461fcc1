/*!
CSV rendering and atomic persistence of the prefix table.
*/
use crate::table::PrefixAsnTable;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Header line of the exported mapping.
pub const CSV_HEADER: &str = "network,asn";

/// Render the table as CSV: the header plus one `prefix,asn` line per entry
/// in table order, every line newline-terminated.
///
/// No field escaping: CIDR notation cannot contain the delimiter.
pub fn render_csv(table: &PrefixAsnTable) -> String {
    let mut out = String::with_capacity(CSV_HEADER.len() + 1 + table.len() * 24);
    out.push_str(CSV_HEADER);
    out.push('\n');
    for (prefix, asn) in table.iter() {
        out.push_str(&format!("{},{}\n", prefix, asn));
    }
    out
}

/// Fail-fast probe that the destination can be written, meant to run before
/// any fetch or decode work is spent.
///
/// An existing file must open for writing; otherwise its directory must
/// accept the creation of a new file. The probe file is removed on drop.
pub fn check_writable(path: &Path) -> io::Result<()> {
    if path.exists() {
        std::fs::OpenOptions::new().append(true).open(path)?;
        return Ok(());
    }
    NamedTempFile::new_in(parent_dir(path))?;
    Ok(())
}

/// Write the fully rendered CSV to a temporary file next to the
/// destination, then move it into place.
///
/// The rename keeps a failed run from leaving a partial file at the
/// destination path.
pub fn write_csv(table: &PrefixAsnTable, path: &Path) -> io::Result<()> {
    let mut tmp = NamedTempFile::new_in(parent_dir(path))?;
    tmp.write_all(render_csv(table).as_bytes())?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    }
}
