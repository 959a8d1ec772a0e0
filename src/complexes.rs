//! Example complexes used to illustrate AlphaFold 3 inputs.
//!
//! Sequences marked as shortened end in `...`; they are display material only.

use crate::error::Result;
use crate::fastx::SequenceRecord;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoleculeKind {
    Protein,
    Dna,
    Rna,
}

impl MoleculeKind {
    pub fn label(self) -> &'static str {
        match self {
            MoleculeKind::Protein => "Protein",
            MoleculeKind::Dna => "DNA",
            MoleculeKind::Rna => "RNA",
        }
    }
}

#[derive(Clone, Debug)]
pub enum Component {
    Chain {
        kind: MoleculeKind,
        name: &'static str,
        sequence: &'static str,
        /// Characters shown before `...` when printed; `None` prints it whole.
        preview: Option<usize>,
        note: Option<&'static str>,
    },
    Ligand {
        name: &'static str,
        smiles: &'static str,
        note: &'static str,
    },
    HistoneOctamer {
        chains: &'static [&'static str],
        copies: &'static str,
    },
    WrappedDna {
        length: &'static str,
    },
    Modifications {
        sites: &'static [&'static str],
    },
}

#[derive(Clone, Debug)]
pub struct ExampleComplex {
    pub title: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub components: Vec<Component>,
    pub expected_output: &'static str,
}

impl ExampleComplex {
    /// Sequence-bearing chains as FASTA records, in component order.
    ///
    /// The `...` marker of shortened sequences is not exported.
    pub fn sequence_records(&self) -> Result<Vec<SequenceRecord>> {
        self.components
            .iter()
            .filter_map(|c| match c {
                Component::Chain { name, sequence, .. } => {
                    Some(SequenceRecord::new(*name, sequence.trim_end_matches("...")))
                }
                _ => None,
            })
            .collect()
    }
}

pub fn protein_dna() -> ExampleComplex {
    ExampleComplex {
        title: "Protein-DNA Complex (Transcription Factor)",
        name: "Transcription_Factor_Complex",
        description: "Zinc finger protein binding to DNA promoter region",
        components: vec![
            Component::Chain {
                kind: MoleculeKind::Protein,
                name: "ZincFingerProtein",
                sequence: "MKLKFSLLTHVKLPVPGDKVEVRCPHYTCPVCGKSFSQKSDLVKHQRTHTG",
                preview: Some(30),
                note: None,
            },
            Component::Chain {
                kind: MoleculeKind::Dna,
                name: "PromoterDNA",
                sequence: "ATGCTAGCTAGCTAGCTA",
                preview: None,
                note: None,
            },
        ],
        expected_output: "Structure showing zinc finger motifs inserted into DNA major groove",
    }
}

pub fn protein_rna() -> ExampleComplex {
    ExampleComplex {
        title: "Protein-RNA Complex (CRISPR-Cas9)",
        name: "CRISPR_Cas9_Complex",
        description: "Cas9 protein bound to guide RNA",
        components: vec![
            Component::Chain {
                kind: MoleculeKind::Protein,
                name: "Cas9_Protein",
                sequence: "MDKKYSIGLDIGTNSVGWAVITDEYKVPSKKFKVLGNTDRHSIKKNLIGAL...",
                preview: None,
                note: Some("Full sequence ~1300 residues"),
            },
            Component::Chain {
                kind: MoleculeKind::Rna,
                name: "GuideRNA",
                sequence: "GUUUUAGAGCUAGAAAUAGCAAGUUAAAAUAAGGC",
                preview: None,
                note: None,
            },
        ],
        expected_output: "Cas9 with RNA guide in the active site channel",
    }
}

pub fn protein_ligand() -> ExampleComplex {
    ExampleComplex {
        title: "Protein-Ligand Complex (Drug Binding)",
        name: "Kinase_Inhibitor_Complex",
        description: "Protein kinase bound to ATP-competitive inhibitor",
        components: vec![
            Component::Chain {
                kind: MoleculeKind::Protein,
                name: "Protein_Kinase",
                sequence: "MENFQKVEKIGEGTYGVVYKARNKLTGEVVALKKIRLDTETEGVPSTAIRE...",
                preview: Some(40),
                note: None,
            },
            Component::Ligand {
                name: "Kinase_Inhibitor",
                smiles: "CC1=C2C(=NC=C1)N(C3=C(C=CC=C3)C2=O)CC4=CC=CC=C4",
                note: "SMILES notation for small molecule",
            },
        ],
        expected_output: "Inhibitor in ATP binding pocket with key H-bonds",
    }
}

pub fn nucleosome() -> ExampleComplex {
    ExampleComplex {
        title: "Multi-Component Complex (Nucleosome)",
        name: "Nucleosome_Core_Particle",
        description: "Histone octamer wrapped by DNA with modifications",
        components: vec![
            Component::HistoneOctamer {
                chains: &["H2A", "H2B", "H3", "H4"],
                copies: "2 copies each (8 total histones)",
            },
            Component::WrappedDna {
                length: "147 base pairs",
            },
            Component::Modifications {
                sites: &["H3K4me3", "H3K27ac"],
            },
        ],
        expected_output: "DNA superhelix around histone octamer with modification sites",
    }
}

pub fn all() -> Vec<ExampleComplex> {
    vec![protein_dna(), protein_rna(), protein_ligand(), nucleosome()]
}

/// First `max_chars` characters followed by `...`, as the guides print long strings.
pub fn preview(text: &str, max_chars: usize) -> String {
    let mut out: String = text.chars().take(max_chars).collect();
    out.push_str("...");
    out
}
