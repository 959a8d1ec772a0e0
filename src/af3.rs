//! AlphaFold 3 examples: protein-DNA, protein-RNA, protein-ligand and
//! multi-component complexes, plus how to submit them to AlphaFold Server.

use crate::complexes::{self, Component, ExampleComplex, preview};
use crate::error::{Error, Result};
use crate::text::{WIDE, arrow_table, bullets, heading, rule, subheading};
use crate::writer::{fasta_path, write_multi_fasta};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const SERVER_URL: &str = "https://golgi.sandbox.google.com/";
const PAPER_URL: &str = "https://www.nature.com/articles/s41586-024-07487-w";

const CAPABILITIES: &[(&str, &str)] = &[
    (
        "Proteins",
        "Enhanced accuracy for protein structures and complexes",
    ),
    (
        "DNA/RNA",
        "Predict protein-nucleic acid interactions (e.g., transcription factors)",
    ),
    (
        "Ligands",
        "Small molecule binding (drugs, cofactors, metabolites)",
    ),
    (
        "Ions",
        "Metal ions and their coordination (Mg²⁺, Ca²⁺, Zn²⁺, etc.)",
    ),
    (
        "Modifications",
        "Post-translational modifications (glycosylation, phosphorylation)",
    ),
    (
        "Complexes",
        "Multi-component assemblies (protein + DNA + ligands)",
    ),
];

const WORKFLOW: &[(&str, &str)] = &[
    ("1. Access", "Go to https://golgi.sandbox.google.com/"),
    ("2. Sign in", "Use Google account (free for academic use)"),
    ("3. Create job", "Click 'New Prediction'"),
    ("4. Add protein", "Paste sequence or upload FASTA"),
    ("5. Add DNA/RNA", "(Optional) Add nucleic acid sequences"),
    (
        "6. Add ligands",
        "(Optional) Add SMILES strings or select from library",
    ),
    ("7. Configure", "Set job name and parameters"),
    ("8. Submit", "Run prediction (takes ~10-30 minutes)"),
    (
        "9. Download",
        "Get PDB file + confidence scores + visualizations",
    ),
];

const METRICS: &[(&str, &str)] = &[
    ("pLDDT", "Per-residue confidence (same as AF2, 0-100)"),
    ("pAE", "Position error between pairs (same as AF2)"),
    (
        "pTM",
        "Predicted TM-score (overall structure similarity, 0-1)",
    ),
    (
        "ipTM",
        "Interface pTM (confidence in protein-protein interfaces)",
    ),
    (
        "Ligand confidence",
        "Binding pose reliability (contact probability)",
    ),
    (
        "Interface contact",
        "Probability of correct molecular interface",
    ),
];

#[derive(Clone, Debug, Default)]
pub struct Af3Options {
    /// When set, sequence-bearing complexes are written here as FASTA.
    pub export_dir: Option<PathBuf>,
}

pub fn run(out: &mut dyn Write, opts: &Af3Options) -> Result<Vec<PathBuf>> {
    writeln!(out, "\n🧬 AlphaFold 3 Examples and Guide")?;
    rule(out, '=', WIDE)?;
    writeln!(out, "Demonstrations of AlphaFold 3's extended capabilities.")?;
    writeln!(
        out,
        "Note: Currently available only via AlphaFold Server (web interface)\n"
    )?;

    explain_capabilities(out)?;

    let examples = complexes::all();
    for (idx, example) in examples.iter().enumerate() {
        print_example(out, idx + 1, example)?;
    }

    show_server_workflow(out)?;
    show_confidence_metrics(out)?;
    compare_use_cases(out)?;

    let exported = match &opts.export_dir {
        Some(dir) => export_examples(out, dir, &examples)?,
        None => Vec::new(),
    };

    heading(out, 2, "✅ AlphaFold 3 examples complete!")?;
    writeln!(out, "\n🌐 Get started: {SERVER_URL}")?;
    writeln!(out, "📖 Read paper: {PAPER_URL}")?;
    writeln!(
        out,
        "\n💡 For protein-only predictions, see the AlphaFold 2 quick start\n"
    )?;
    out.flush()?;

    Ok(exported)
}

fn explain_capabilities(out: &mut dyn Write) -> Result<()> {
    heading(out, 0, "ALPHAFOLD 3 CAPABILITIES (2024)")?;
    arrow_table(out, "", 15, CAPABILITIES)?;
    writeln!(out)?;
    rule(out, '=', WIDE)?;
    writeln!(out)?;
    Ok(())
}

fn print_example(out: &mut dyn Write, number: usize, example: &ExampleComplex) -> Result<()> {
    let gap = if number == 1 { 0 } else { 2 };
    subheading(
        out,
        gap,
        &format!("EXAMPLE {number}: {}", example.title),
    )?;
    writeln!(out, "{}", example.description)?;

    let mut listed_header = false;
    for component in &example.components {
        match component {
            Component::Chain {
                kind,
                name,
                sequence,
                preview: shown,
                note,
            } => {
                writeln!(out, "\n{}: {name}", kind.label())?;
                match (note, shown) {
                    (Some(note), _) => writeln!(out, "  Note: {note}")?,
                    (None, Some(n)) => writeln!(out, "  Sequence: {}", preview(sequence, *n))?,
                    (None, None) => writeln!(out, "  Sequence: {sequence}")?,
                }
            }
            Component::Ligand { name, smiles, note } => {
                writeln!(out, "\nLigand: {name}")?;
                writeln!(out, "  {note}")?;
                writeln!(out, "  SMILES: {}", preview(smiles, 40))?;
            }
            Component::HistoneOctamer { chains, copies } => {
                list_header(out, &mut listed_header)?;
                writeln!(out, "  - Histones {}: {copies}", chains.join(", "))?;
            }
            Component::WrappedDna { length } => {
                list_header(out, &mut listed_header)?;
                writeln!(out, "  - DNA: {length}")?;
            }
            Component::Modifications { sites } => {
                list_header(out, &mut listed_header)?;
                writeln!(out, "  - Modifications: {}", sites.join(", "))?;
            }
        }
    }

    writeln!(out, "\nExpected: {}", example.expected_output)?;
    Ok(())
}

fn list_header(out: &mut dyn Write, listed: &mut bool) -> Result<()> {
    if !*listed {
        writeln!(out, "\nComponents:")?;
        *listed = true;
    }
    Ok(())
}

fn show_server_workflow(out: &mut dyn Write) -> Result<()> {
    heading(out, 2, "HOW TO USE ALPHAFOLD 3 SERVER")?;

    subheading(out, 1, "📌 STEP-BY-STEP WORKFLOW:")?;
    for (step, description) in WORKFLOW {
        writeln!(out, "\n   {step:<15} {description}")?;
    }

    subheading(out, 2, "💡 INPUT FORMAT TIPS:")?;
    bullets(
        out,
        "•",
        &[
            "Proteins: Standard amino acid sequence (FASTA)",
            "DNA: A, T, G, C (automatically paired with complement)",
            "RNA: A, U, G, C",
            "Ligands: SMILES notation or PubChem CID",
            "Ions: Select from dropdown (Mg, Ca, Zn, Fe, etc.)",
        ],
    )?;
    Ok(())
}

fn show_confidence_metrics(out: &mut dyn Write) -> Result<()> {
    heading(out, 2, "ALPHAFOLD 3 CONFIDENCE METRICS")?;

    subheading(out, 1, "📊 NEW METRICS:")?;
    arrow_table(out, "", 20, METRICS)?;

    writeln!(out, "\n\n✅ GOOD PREDICTION INDICATORS:")?;
    bullets(
        out,
        "•",
        &[
            "pLDDT > 70 for protein regions",
            "pTM > 0.5 for overall fold",
            "ipTM > 0.5 for interface contacts",
            "High contact probability for ligand binding",
        ],
    )?;

    writeln!(out, "\n\n⚠️  CAUTION ZONES:")?;
    bullets(
        out,
        "•",
        &[
            "Low pLDDT (<50) indicates disorder or uncertainty",
            "Low ipTM (<0.3) suggests uncertain complex orientation",
            "Weak ligand contacts may indicate multiple binding modes",
        ],
    )?;
    Ok(())
}

fn compare_use_cases(out: &mut dyn Write) -> Result<()> {
    heading(out, 2, "WHICH VERSION SHOULD YOU USE?")?;

    subheading(out, 1, "🔬 USE ALPHAFOLD 2 FOR:")?;
    bullets(
        out,
        "✓",
        &[
            "Single protein structure prediction",
            "Protein-protein complexes (multimer)",
            "High-throughput structure generation",
            "Local installation required",
            "Need full code access for modifications",
        ],
    )?;

    subheading(out, 2, "🧬 USE ALPHAFOLD 3 FOR:")?;
    bullets(
        out,
        "✓",
        &[
            "Protein-DNA/RNA interactions",
            "Drug binding predictions",
            "Protein-ligand complexes",
            "Multi-component assemblies",
            "Post-translational modifications",
            "Most accurate protein structures (improved over AF2)",
        ],
    )?;
    Ok(())
}

/// Writes one multi-record FASTA per complex that has explicit sequences.
pub fn export_examples(
    out: &mut dyn Write,
    dir: &Path,
    examples: &[ExampleComplex],
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).map_err(|source| Error::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    heading(out, 2, "FASTA FILES FOR ALPHAFOLD SERVER UPLOAD")?;
    let mut written = Vec::new();
    for example in examples {
        let records = example.sequence_records()?;
        if records.is_empty() {
            debug!(complex = example.name, "no explicit sequences, skipping export");
            continue;
        }
        let path = fasta_path(dir, example.name);
        write_multi_fasta(&path, &records)?;
        writeln!(
            out,
            "\n   {:<30} {} chain(s) → {}",
            example.name,
            records.len(),
            path.display()
        )?;
        written.push(path);
    }
    info!(dir = %dir.display(), files = written.len(), "exported example complexes");
    Ok(written)
}
