//! Argument sets shared by the `foldguide` subcommands and the standalone binaries.

use crate::af3::{self, Af3Options};
use crate::fastx::{SequenceRecord, load_first_record};
use crate::logging::setup_logging;
use crate::quickstart::{self, DEMO_NAME, DEMO_SEQUENCE, QuickstartOptions};
use anyhow::{Context, Result, bail};
use clap::{ArgAction, Args};
use std::io;
use std::path::PathBuf;
use tracing::debug;

#[derive(Args, Debug, Clone, Default)]
pub struct LogArgs {
    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable logging
    #[arg(short = 'q', long = "quiet", action = ArgAction::SetTrue, global = true)]
    pub quiet: bool,
}

impl LogArgs {
    pub fn init(&self) {
        setup_logging(self.verbose, self.quiet);
    }
}

#[derive(Args, Debug, Clone)]
#[command(about = "Prepare a FASTA input and walk through an AlphaFold 2 / ColabFold run")]
pub struct QuickstartArgs {
    /// Protein name, used as the FASTA header and file stem
    #[arg(short = 'n', long = "name")]
    pub name: Option<String>,

    /// Raw sequence to write (defaults to the demo protein)
    #[arg(short = 's', long = "sequence", conflicts_with = "input")]
    pub sequence: Option<String>,

    /// Take the first record of a FASTA/FASTQ file instead
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Directory for the FASTA file and the results/ placeholder
    #[arg(short = 'o', long = "output_dir", default_value = ".")]
    pub output_dir: PathBuf,
}

impl Default for QuickstartArgs {
    fn default() -> Self {
        Self {
            name: None,
            sequence: None,
            input: None,
            output_dir: PathBuf::from("."),
        }
    }
}

impl QuickstartArgs {
    pub fn into_options(self) -> Result<QuickstartOptions> {
        if let Some(name) = &self.name
            && name.is_empty()
        {
            bail!("--name must not be empty");
        }

        let record = match (self.input, self.sequence) {
            (Some(path), _) => {
                let loaded = load_first_record(&path)
                    .with_context(|| format!("failed to load {}", path.display()))?;
                match self.name {
                    Some(name) => loaded.with_name(name)?,
                    None => loaded,
                }
            }
            (None, sequence) => SequenceRecord::new(
                self.name.as_deref().unwrap_or(DEMO_NAME),
                sequence.as_deref().unwrap_or(DEMO_SEQUENCE),
            )?,
        };
        debug!(record = record.name(), residues = record.len(), "quick start input");

        Ok(QuickstartOptions {
            record,
            output_dir: self.output_dir,
        })
    }
}

#[derive(Args, Debug, Clone, Default)]
#[command(about = "Show AlphaFold 3 example complexes and the AlphaFold Server workflow")]
pub struct Af3Args {
    /// Also write the example complexes as FASTA files into this directory
    #[arg(short = 'e', long = "export_dir")]
    pub export_dir: Option<PathBuf>,
}

pub fn run_quickstart(args: QuickstartArgs) -> Result<()> {
    let opts = args.into_options()?;
    let mut stdout = io::stdout().lock();
    quickstart::run(&mut stdout, &opts).context("quick start failed")?;
    Ok(())
}

pub fn run_af3(args: Af3Args) -> Result<()> {
    let opts = Af3Options {
        export_dir: args.export_dir,
    };
    let mut stdout = io::stdout().lock();
    af3::run(&mut stdout, &opts).context("AlphaFold 3 examples failed")?;
    Ok(())
}
