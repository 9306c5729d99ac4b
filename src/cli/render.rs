use log::error;

use crate::Molecular::molecule_api::MoleculeReport;
use crate::Sequences::sequence_api::SequenceReport;
use crate::Utils::report_table::{print_molecule_report, print_sequence_report};

pub fn show_molecule_report(report: &MoleculeReport, json: bool) {
    if !json {
        print_molecule_report(report);
        return;
    }
    match report.to_json() {
        Ok(text) => println!("{}", text),
        Err(e) => error!("could not serialize report: {}", e),
    }
}

pub fn show_sequence_report(report: &SequenceReport, json: bool) {
    if !json {
        print_sequence_report(report);
        return;
    }
    match report.to_json() {
        Ok(text) => println!("{}", text),
        Err(e) => error!("could not serialize report: {}", e),
    }
}
