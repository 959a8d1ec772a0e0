#![allow(dead_code)]

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub const DEMO_FASTA: &str = ">demo_protein\nMKFLKFSLLTAVLLSVVFAFSSCGDDDDTGYLPPSQAIQDLLKRMKV\n";

/// Writes a multi-line FASTA input, wrapping each sequence at `width` columns.
pub fn write_input(path: &Path, records: &[(&str, &str)], width: usize) -> Result<()> {
    let mut out = String::new();
    for (id, seq) in records {
        out.push('>');
        out.push_str(id);
        out.push('\n');
        for chunk in seq.as_bytes().chunks(width) {
            out.push_str(std::str::from_utf8(chunk)?);
            out.push('\n');
        }
    }
    fs::write(path, out).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

pub fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| panic!("{} should be readable: {e}", path.display()))
}

pub fn entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("directory should be listable")
        .map(|e| {
            e.expect("entry should be readable")
                .file_name()
                .to_string_lossy()
                .into_owned()
        })
        .collect();
    names.sort();
    names
}
