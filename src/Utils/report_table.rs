use prettytable::{Table, row};

use crate::Molecular::molecule_api::MoleculeReport;
use crate::Sequences::sequence_api::SequenceReport;

fn fmt_counts<K: std::fmt::Display, V: std::fmt::Display>(
    counts: &std::collections::BTreeMap<K, V>,
) -> String {
    counts
        .iter()
        .map(|(k, v)| format!("{}: {}", k, v))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Two-column field/value table of a molecule report.
pub fn molecule_report_table(report: &MoleculeReport) -> Table {
    let mut table = Table::new();
    table.add_row(row!["field", "value"]);
    table.add_row(row!["input", report.input_value]);
    table.add_row(row!["type", report.input_type]);
    table.add_row(row!["success", report.success]);
    if let Some(error) = &report.error {
        table.add_row(row!["error", error]);
    }
    if let Some(formula) = &report.molecular_formula {
        table.add_row(row!["molecular formula", formula]);
    }
    if let Some(weight) = report.molecular_weight {
        table.add_row(row!["molecular weight, g/mol", format!("{:.2}", weight)]);
    }
    if let Some(counts) = &report.atom_counts {
        table.add_row(row!["atom counts", fmt_counts(counts)]);
    }
    if let Some(atom_count) = report.atom_count {
        table.add_row(row!["atoms", atom_count]);
    }
    if let Some(props) = &report.properties {
        table.add_row(row!["aromatic rings", props.aromatic_rings]);
        table.add_row(row!["hydroxyl groups", props.hydroxyl_groups]);
        table.add_row(row!["nitrogen", props.nitrogen_count]);
        table.add_row(row!["sulfur", props.sulfur_count]);
        table.add_row(row!["halogens", props.halogen_count]);
        table.add_row(row!["estimated logP", format!("{:.2}", props.estimated_logp)]);
        table.add_row(row!["Lipinski violations", props.lipinski_violations]);
        table.add_row(row!["drug-like", props.drug_like]);
    }
    table
}

/// Summary table of a sequence report followed by one row per ORF.
pub fn sequence_report_table(report: &SequenceReport) -> Table {
    let mut table = Table::new();
    table.add_row(row!["field", "value"]);
    table.add_row(row!["type", report.sequence_type]);
    table.add_row(row!["success", report.success]);
    if let Some(error) = &report.error {
        table.add_row(row!["error", error]);
    }
    let Some(profile) = &report.profile else {
        return table;
    };
    table.add_row(row!["length", profile.length]);
    table.add_row(row!["composition", fmt_counts(&profile.composition)]);
    table.add_row(row!["molecular weight, g/mol", format!("{:.2}", profile.molecular_weight)]);
    if let Some(gc) = profile.gc_content {
        table.add_row(row!["GC content, %", format!("{:.2}", gc)]);
    }
    if let Some(tm) = profile.melting_temp {
        table.add_row(row!["melting temperature, C", format!("{:.1}", tm)]);
    }
    if let Some(structure) = &profile.secondary_structure {
        table.add_row(row![
            format!("secondary structure ({})", structure.method),
            fmt_counts(&structure.fractions)
        ]);
    }
    if let Some(conservation) = &profile.conservation {
        table.add_row(row![
            format!("conservation ({})", conservation.method),
            format!("{:.2}", conservation.score)
        ]);
    }
    if let Some(orfs) = &profile.orfs {
        table.add_row(row!["ORFs", orfs.len()]);
        for orf in orfs {
            table.add_row(row![
                format!("ORF frame {}", orf.frame),
                format!("{}..{} ({} nt)", orf.start, orf.end, orf.length)
            ]);
        }
    }
    table
}

pub fn print_molecule_report(report: &MoleculeReport) {
    molecule_report_table(report).printstd();
}

pub fn print_sequence_report(report: &SequenceReport) {
    sequence_report_table(report).printstd();
}
