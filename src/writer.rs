use crate::error::{Error, Result};
use crate::fastx::SequenceRecord;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Column width of FASTA body lines.
pub const LINE_WIDTH: usize = 80;

pub const RESULTS_DIR: &str = "results";

/// Splits `sequence` into body lines of at most [`LINE_WIDTH`] characters.
///
/// Splits on character boundaries, so multi-byte input is never cut in half.
/// An empty sequence yields no lines.
pub fn wrap_sequence(sequence: &str) -> Vec<&str> {
    let mut lines = Vec::with_capacity(sequence.len().div_ceil(LINE_WIDTH));
    let mut start = 0;
    for (count, (idx, _)) in sequence.char_indices().enumerate() {
        if count > 0 && count % LINE_WIDTH == 0 {
            lines.push(&sequence[start..idx]);
            start = idx;
        }
    }
    if start < sequence.len() {
        lines.push(&sequence[start..]);
    }
    lines
}

pub fn format_record(record: &SequenceRecord) -> String {
    let mut out = String::with_capacity(record.sequence().len() + record.name().len() + 8);
    push_record(&mut out, record);
    out
}

pub fn format_records(records: &[SequenceRecord]) -> String {
    let mut out = String::new();
    for record in records {
        push_record(&mut out, record);
    }
    out
}

fn push_record(out: &mut String, record: &SequenceRecord) {
    out.push('>');
    out.push_str(record.name());
    out.push('\n');
    for line in wrap_sequence(record.sequence()) {
        out.push_str(line);
        out.push('\n');
    }
}

/// `dir/file`, or just `file` when `dir` is the working directory.
pub fn in_dir(dir: &Path, file: &str) -> PathBuf {
    if dir.as_os_str().is_empty() || dir == Path::new(".") {
        PathBuf::from(file)
    } else {
        dir.join(file)
    }
}

pub fn fasta_path(dir: &Path, name: &str) -> PathBuf {
    in_dir(dir, &format!("{name}.fasta"))
}

/// Text of `results/README.txt`, listing the files ColabFold names after `name`.
pub fn results_readme(name: &str) -> String {
    let files = [
        ("ranked_0.pdb".to_string(), "Best 3D structure"),
        (format!("{name}_plddt.png"), "Confidence chart"),
        (format!("{name}_pae.png"), "Uncertainty heatmap"),
        ("ranking_debug.json".to_string(), "Detailed scores"),
    ];
    let mut out = String::from(
        "This folder will contain AlphaFold 2 prediction outputs:\n\n\
         After running ColabFold (which uses AlphaFold 2), you'll get:\n",
    );
    for (file, description) in files {
        out.push_str(&format!("  - {file:<23} ({description})\n"));
    }
    out
}

/// Writes `<dir>/<name>.fasta`, replacing any existing file.
///
/// Returns the path together with the text that was written.
pub fn write_fasta(dir: &Path, record: &SequenceRecord) -> Result<(PathBuf, String)> {
    let path = fasta_path(dir, record.name());
    let content = format_record(record);
    write_text(&path, &content)?;
    info!(path = %path.display(), residues = record.len(), "wrote FASTA");
    Ok((path, content))
}

pub fn write_multi_fasta(path: &Path, records: &[SequenceRecord]) -> Result<()> {
    write_text(path, &format_records(records))?;
    info!(path = %path.display(), records = records.len(), "wrote FASTA");
    Ok(())
}

/// Creates `<dir>/results/README.txt` describing the files ColabFold will produce for `name`.
pub fn write_results_placeholder(dir: &Path, name: &str) -> Result<PathBuf> {
    let results = in_dir(dir, RESULTS_DIR);
    fs::create_dir_all(&results).map_err(|source| Error::CreateDir {
        path: results.clone(),
        source,
    })?;
    let readme = results.join("README.txt");
    write_text(&readme, &results_readme(name))?;
    info!(path = %readme.display(), "wrote results placeholder");
    Ok(readme)
}

fn write_text(path: &Path, content: &str) -> Result<()> {
    debug!(path = %path.display(), bytes = content.len(), "writing");
    fs::write(path, content).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}
