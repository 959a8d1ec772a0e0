//! AlphaFold 2 / ColabFold quick start.
//!
//! Writes the input FASTA and a placeholder `results/` folder, and prints a
//! walkthrough of running ColabFold on it.

use crate::error::{Error, Result};
use crate::fastx::SequenceRecord;
use crate::text::{NARROW, WIDE, arrow_table, bullets, heading, rule, subheading};
use crate::writer::{RESULTS_DIR, in_dir, write_fasta, write_results_placeholder};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

pub const DEMO_NAME: &str = "demo_protein";

/// Shortened from a real protein.
pub const DEMO_SEQUENCE: &str = "MKFLKFSLLTAVLLSVVFAFSSCGDDDDTGYLPPSQAIQDLLKRMKV";

const TERMS: &[(&str, &str)] = &[
    (
        "Protein",
        "Biological molecule made of amino acids that performs functions",
    ),
    (
        "Amino Acid",
        "Building block of proteins (20 types: A,C,D,E,F,G,H,I,K,L,M,N,P,Q,R,S,T,V,W,Y)",
    ),
    ("Sequence", "Order of amino acids, written as text (e.g., 'MKFL...')"),
    (
        "Residue",
        "Amino acid in a protein chain. When amino acids link (peptide bonds), they lose H₂O \
         and form residues. Used for counting: 150 residues = 150 amino acids long",
    ),
    (
        "FASTA",
        "Text file format for storing sequences (starts with '>' then name)",
    ),
    (
        "MSA",
        "Multiple Sequence Alignment - similar sequences found in nature",
    ),
    (
        "pLDDT",
        "Confidence score (0-100) per residue. >90 = very reliable",
    ),
    (
        "PAE",
        "Predicted Aligned Error - uncertainty between residue positions",
    ),
    (
        "PDB",
        "File format storing 3D coordinates of atoms in a protein",
    ),
];

const OUTPUTS: &[(&str, &str)] = &[
    (
        "ranked_0.pdb",
        "Best predicted structure (3D coordinates of all atoms)",
    ),
    (
        "ranked_1.pdb",
        "Second-best structure (if multiple models run)",
    ),
    (
        "*_plddt.png",
        "Chart showing confidence per residue (0-100 scale)",
    ),
    (
        "*_pae.png",
        "Heatmap showing position uncertainty between residues",
    ),
    (
        "ranking_debug.json",
        "Detailed scores for all model predictions",
    ),
];

const NEXT_STEPS: &[(&str, &str)] = &[
    ("1️⃣  Run the prediction", "Use ColabFold (Option 1 or 2 above)"),
    ("2️⃣  Check confidence", "Look at pLDDT and PAE charts"),
    (
        "3️⃣  Visualize structure",
        "Open PDB file in PyMOL, ChimeraX, or online viewer",
    ),
    (
        "4️⃣  Interpret results",
        "Focus on high-confidence regions (pLDDT > 90)",
    ),
    (
        "5️⃣  Try your own",
        "Replace demo sequence with your protein of interest",
    ),
];

#[derive(Clone, Debug)]
pub struct QuickstartOptions {
    pub record: SequenceRecord,
    pub output_dir: PathBuf,
}

impl QuickstartOptions {
    pub fn demo(output_dir: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self {
            record: SequenceRecord::new(DEMO_NAME, DEMO_SEQUENCE)?,
            output_dir: output_dir.into(),
        })
    }
}

/// Files created by a quick start run.
#[derive(Clone, Debug)]
pub struct QuickstartReport {
    pub fasta_path: PathBuf,
    pub fasta_content: String,
    pub readme_path: PathBuf,
}

pub fn run(out: &mut dyn Write, opts: &QuickstartOptions) -> Result<QuickstartReport> {
    fs::create_dir_all(&opts.output_dir).map_err(|source| Error::CreateDir {
        path: opts.output_dir.clone(),
        source,
    })?;

    writeln!(out, "\n🧬 AlphaFold 2 / ColabFold Quick Start")?;
    rule(out, '=', WIDE)?;
    writeln!(
        out,
        "This script shows you how to predict protein 3D structures using AlphaFold 2."
    )?;
    writeln!(out, "No biology background needed!\n")?;

    explain_terminology(out)?;
    let (fasta_path, fasta_content) = create_fasta(out, &opts.output_dir, &opts.record)?;
    let results_dir = in_dir(&opts.output_dir, RESULTS_DIR);
    show_colabfold_options(out, &fasta_path, &results_dir)?;
    explain_command(out, &fasta_path, &results_dir)?;
    describe_outputs(out, &results_dir)?;
    let readme_path = create_results_placeholder(out, &opts.output_dir, opts.record.name())?;
    show_next_steps(out)?;

    heading(out, 2, "✅ Setup complete! You're ready to predict protein structures.")?;
    writeln!(
        out,
        "\n💡 Quick start: Try the Google Colab notebook (Option 1) first!"
    )?;
    writeln!(
        out,
        "   It's the easiest way to get started with zero installation.\n"
    )?;
    out.flush()?;

    info!(fasta = %fasta_path.display(), readme = %readme_path.display(), "quick start complete");
    Ok(QuickstartReport {
        fasta_path,
        fasta_content,
        readme_path,
    })
}

fn explain_terminology(out: &mut dyn Write) -> Result<()> {
    heading(out, 0, "KEY TERMS EXPLAINED")?;
    arrow_table(out, "", 15, TERMS)?;
    writeln!(out)?;
    rule(out, '=', WIDE)?;
    writeln!(out)?;
    Ok(())
}

fn create_fasta(
    out: &mut dyn Write,
    dir: &Path,
    record: &SequenceRecord,
) -> Result<(PathBuf, String)> {
    writeln!(out, "Creating FASTA file for: {}", record.name())?;
    writeln!(
        out,
        "Sequence length: {} residues (amino acids)\n",
        record.len()
    )?;

    let (path, content) = write_fasta(dir, record)?;

    writeln!(out, "✅ Created: {}", path.display())?;
    writeln!(out, "\nFASTA file content:")?;
    rule(out, '-', NARROW)?;
    writeln!(out, "{content}")?;
    rule(out, '-', NARROW)?;
    Ok((path, content))
}

fn show_colabfold_options(out: &mut dyn Write, fasta_path: &Path, results: &Path) -> Result<()> {
    let results = results.display();
    heading(out, 1, "HOW TO RUN ALPHAFOLD 2 / COLABFOLD")?;

    subheading(out, 1, "📌 OPTION 1: Google Colab (Easiest - No Installation!)")?;
    writeln!(out, "1. Open this link:")?;
    writeln!(
        out,
        "   https://colab.research.google.com/github/sokrypton/ColabFold/blob/main/AlphaFold2.ipynb"
    )?;
    writeln!(out, "\n2. Click: Runtime → Change runtime type → Select 'GPU'")?;
    writeln!(out, "\n3. Paste your sequence in the input cell")?;
    writeln!(out, "\n4. Click: Runtime → Run all")?;
    writeln!(
        out,
        "\n5. Wait for results (10-30 minutes for typical proteins)"
    )?;
    writeln!(
        out,
        "\n6. Download results from the notebook's '{RESULTS_DIR}/' folder into '{results}/'"
    )?;

    subheading(out, 2, "📌 OPTION 2: Local Installation (For Repeated Use)")?;
    writeln!(out, "Step 1: Install ColabFold")?;
    writeln!(out, "   pip install colabfold[alphafold]")?;
    writeln!(out, "\nStep 2: Run prediction")?;
    writeln!(
        out,
        "   colabfold_batch {} {results}/",
        fasta_path.display()
    )?;
    writeln!(out, "\nStep 3: Check results in '{results}/' folder")?;
    Ok(())
}

fn explain_command(out: &mut dyn Write, fasta_path: &Path, results: &Path) -> Result<()> {
    let fasta = fasta_path.display();
    let results = results.display();
    heading(out, 2, "COMMAND BREAKDOWN")?;

    writeln!(out, "\nBasic command:")?;
    writeln!(out, "   colabfold_batch {fasta} {results}/")?;

    writeln!(out, "\n\nWhat this does:")?;
    writeln!(out, "   colabfold_batch  →  Run ColabFold prediction")?;
    writeln!(out, "   {fasta}     →  Your input sequence file")?;
    writeln!(out, "   {results}/         →  Where to save output files")?;

    writeln!(out, "\n\nOptional flags you can add:")?;
    writeln!(
        out,
        "   --num-models 5      →  Run 5 different model variants (default)"
    )?;
    writeln!(
        out,
        "   --num-recycle 3     →  Refine prediction 3 times (default)"
    )?;
    writeln!(
        out,
        "   --amber             →  Polish geometry using Amber force field"
    )?;
    writeln!(
        out,
        "   --use-gpu-relax     →  Speed up Amber relaxation with GPU"
    )?;

    writeln!(out, "\n\nExample with options:")?;
    writeln!(
        out,
        "   colabfold_batch {fasta} {results}/ --num-models 5 --amber"
    )?;
    Ok(())
}

fn describe_outputs(out: &mut dyn Write, results: &Path) -> Result<()> {
    heading(out, 2, "OUTPUT FILES YOU'LL GET")?;
    writeln!(out, "\n📁 Files in {}/ folder:", results.display())?;
    arrow_table(out, "   ", 25, OUTPUTS)?;

    heading(out, 2, "HOW TO INTERPRET RESULTS")?;

    writeln!(out, "\n✅ GOOD PREDICTION:")?;
    bullets(
        out,
        "•",
        &[
            "pLDDT scores mostly > 90 (green in visualization)",
            "PAE heatmap shows blue blocks",
            "Structure looks compact and well-folded",
        ],
    )?;

    writeln!(out, "\n⚠️  MODERATE PREDICTION:")?;
    bullets(
        out,
        "•",
        &[
            "pLDDT scores 70-90 (yellow/orange)",
            "PAE shows some yellow/orange regions",
            "Some parts may be flexible or uncertain",
        ],
    )?;

    writeln!(out, "\n❌ LOW CONFIDENCE:")?;
    bullets(
        out,
        "•",
        &[
            "pLDDT scores < 70 (red)",
            "PAE heatmap is red/orange",
            "Likely disordered or insufficient data",
        ],
    )?;

    writeln!(
        out,
        "\n💡 TIP: Focus on regions with pLDDT > 90 for reliable structure!"
    )?;
    Ok(())
}

fn create_results_placeholder(out: &mut dyn Write, dir: &Path, name: &str) -> Result<PathBuf> {
    let readme = write_results_placeholder(dir, name)?;
    writeln!(
        out,
        "\n\n📁 Created placeholder '{}/' folder",
        in_dir(dir, RESULTS_DIR).display()
    )?;
    writeln!(
        out,
        "   (Run ColabFold to populate with actual predictions)"
    )?;
    Ok(readme)
}

fn show_next_steps(out: &mut dyn Write) -> Result<()> {
    heading(out, 2, "NEXT STEPS")?;
    for (step, description) in NEXT_STEPS {
        writeln!(out, "\n{step:<25} {description}")?;
    }

    writeln!(out, "\n\n🎓 LEARNING RESOURCES:")?;
    bullets(
        out,
        "•",
        &[
            "AlphaFold 2 paper    → https://www.nature.com/articles/s41586-021-03819-2",
            "DeepMind GitHub      → https://github.com/deepmind/alphafold",
            "Mol* viewer          → https://molstar.org/ (visualize PDB online)",
        ],
    )?;
    Ok(())
}
