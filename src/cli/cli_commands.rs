//! One-shot command mode: `chemseq [--json] <command> <args…>`.
//! Without a subcommand the binary opens the interactive menu.
use clap::{Parser, Subcommand};

use super::render::{show_molecule_report, show_sequence_report};
use crate::Molecular::molecule_api::analyze_molecule;
use crate::Molecular::structure2d::generate_2d_structure;
use crate::Molecular::validators::{validate_inchi, validate_smiles};
use crate::Sequences::sequence_api::analyze_sequence_with;
use crate::settings::AnalyzerSettings;

#[derive(Parser, Debug)]
#[command(
    name = "chemseq",
    about = "Heuristic analysis of molecular strings and biological sequences",
    version
)]
pub struct Cli {
    /// Print reports as JSON instead of a table
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Analyze a SMILES string, an InChI or a plain formula
    Molecule {
        /// smiles, inchi or formula
        #[arg(value_name = "TYPE")]
        input_type: String,
        value: String,
    },
    /// Profile a DNA, RNA, protein or gene sequence
    Sequence {
        /// dna, rna, protein or gene
        #[arg(value_name = "TYPE")]
        sequence_type: String,
        sequence: String,
        /// secondaryStructure, geneAnnotation, conservationAnalysis
        #[arg(value_name = "OPTION")]
        options: Vec<String>,
    },
    /// Print the 2-D layout sketch of a SMILES string as JSON
    Layout { smiles: String },
    /// Check bracket balance of a SMILES string
    ValidateSmiles { smiles: String },
    /// Check the InChI= prefix
    ValidateInchi { inchi: String },
}

impl Command {
    /// Runs the command. Returns `true` when the analysis succeeded or the
    /// validated string passed.
    pub fn run(&self, json: bool, settings: &AnalyzerSettings) -> bool {
        let json = json || settings.wants_json();
        match self {
            Command::Molecule { input_type, value } => {
                let report = analyze_molecule(value, input_type);
                show_molecule_report(&report, json);
                report.success
            }
            Command::Sequence {
                sequence_type,
                sequence,
                options,
            } => {
                let options = if options.is_empty() {
                    &settings.default_sequence_options
                } else {
                    options
                };
                let report =
                    analyze_sequence_with(sequence, sequence_type, options.as_slice(), settings);
                show_sequence_report(&report, json);
                report.success
            }
            Command::Layout { smiles } => match generate_2d_structure(smiles) {
                Some(layout) => {
                    println!("{}", layout);
                    true
                }
                None => false,
            },
            Command::ValidateSmiles { smiles } => {
                let valid = validate_smiles(smiles);
                println!("{}", valid);
                valid
            }
            Command::ValidateInchi { inchi } => {
                let valid = validate_inchi(inchi);
                println!("{}", valid);
                valid
            }
        }
    }
}

pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_parse_molecule() {
        let cli = Cli::try_parse_from(["chemseq", "molecule", "smiles", "CCO", "--json"]).unwrap();
        assert!(cli.json);
        assert_eq!(
            cli.command,
            Some(Command::Molecule {
                input_type: "smiles".to_string(),
                value: "CCO".to_string()
            })
        );

        let cli = Cli::try_parse_from(["chemseq", "--json", "layout", "CCO"]).unwrap();
        assert!(cli.json);
        assert_eq!(
            cli.command,
            Some(Command::Layout {
                smiles: "CCO".to_string()
            })
        );
    }

    #[test]
    fn test_parse_sequence_with_options() {
        let cli = Cli::try_parse_from([
            "chemseq",
            "sequence",
            "dna",
            "ATGC",
            "geneAnnotation",
            "secondaryStructure",
        ])
        .unwrap();
        assert!(!cli.json);
        match cli.command {
            Some(Command::Sequence { options, .. }) => assert_eq!(options.len(), 2),
            other => panic!("unexpected command {:?}", other),
        }

        let cli = Cli::try_parse_from(["chemseq", "sequence", "rna", "AUGC"]).unwrap();
        match cli.command {
            Some(Command::Sequence { options, .. }) => assert!(options.is_empty()),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_errors_and_help() {
        assert_eq!(Cli::try_parse_from(["chemseq"]).unwrap().command, None);
        assert!(Cli::try_parse_from(["chemseq", "molecule", "smiles"]).is_err());
        assert!(Cli::try_parse_from(["chemseq", "frobnicate"]).is_err());

        let err = Cli::try_parse_from(["chemseq", "--help", "molecule"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        let err = Cli::try_parse_from(["chemseq", "molecule", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_run_reports_success() {
        let settings = AnalyzerSettings::default();
        let run = |args: &[&str]| {
            let cli = Cli::try_parse_from(args).unwrap();
            cli.command.unwrap().run(cli.json, &settings)
        };
        assert!(run(&["chemseq", "validate-smiles", "CC(=O)O"]));
        assert!(!run(&["chemseq", "validate-inchi", "C2H6O"]));
        assert!(!run(&["chemseq", "molecule", "pdb", "CCO", "--json"]));
        assert!(run(&["chemseq", "sequence", "rna", "AUGC", "--json"]));
    }
}
