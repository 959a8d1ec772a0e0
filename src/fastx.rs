use crate::error::{Error, Result};
use needletail::parse_fastx_file;
use std::path::Path;
use tracing::debug;

/// A named sequence, kept verbatim: no case folding and no alphabet checks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SequenceRecord {
    name: String,
    sequence: String,
}

impl SequenceRecord {
    pub fn new(name: impl Into<String>, sequence: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::EmptyName);
        }
        Ok(Self {
            name,
            sequence: sequence.into(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    /// Length in characters, which is the residue count for protein input.
    pub fn len(&self) -> usize {
        self.sequence.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    pub fn with_name(self, name: impl Into<String>) -> Result<Self> {
        Self::new(name, self.sequence)
    }
}

/// Reads the first record of a FASTA/FASTQ file (plain or compressed).
///
/// The record name is the first whitespace-delimited token of the header.
pub fn load_first_record(path: &Path) -> Result<SequenceRecord> {
    let parse_err = |message: String| Error::Parse {
        path: path.to_path_buf(),
        message,
    };

    let mut reader = parse_fastx_file(path).map_err(|e| parse_err(e.to_string()))?;
    let record = match reader.next() {
        Some(record) => record.map_err(|e| parse_err(e.to_string()))?,
        None => return Err(parse_err("no records found".to_string())),
    };

    let header = String::from_utf8_lossy(record.id());
    let name = header.split_whitespace().next().unwrap_or_default();
    let sequence = String::from_utf8_lossy(&record.seq()).into_owned();
    debug!(record = name, len = sequence.len(), path = %path.display(), "loaded input record");

    SequenceRecord::new(name, sequence)
}
