// Helpers for laying contract files out on disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File name for a contract: characters outside `[A-Za-z0-9._-]` become `_`
pub fn contract_file_name(contract_name: &str, extension: &str) -> String {
    let stem: String = contract_name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') { c } else { '_' })
        .collect();
    format!("{}.{}", stem.trim_matches('_'), extension)
}

/// Writes one contract file into `output_dir`, creating the directory on first use
pub fn write_contract_file<P: AsRef<Path>>(output_dir: P, file_name: &str, content: &str) -> io::Result<PathBuf> {
    let output_dir = output_dir.as_ref();
    fs::create_dir_all(output_dir)?;

    let path = output_dir.join(file_name);
    fs::write(&path, content)?;
    Ok(path)
}
