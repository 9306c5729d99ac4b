use super::cli_input::prompt;
use super::render::show_sequence_report;
use crate::Sequences::sequence_api::analyze_sequence_with;
use crate::settings::with_settings;

fn read_options(defaults: &[String]) -> Vec<String> {
    println!("Options: secondaryStructure geneAnnotation conservationAnalysis");
    let answer = prompt("Space separated options (Enter for defaults): ");
    let options: Vec<String> = answer.split_whitespace().map(|s| s.to_string()).collect();
    if options.is_empty() {
        defaults.to_vec()
    } else {
        options
    }
}

pub fn sequence_menu() {
    loop {
        println!("\n=== Sequence Analysis ===");
        println!("1. DNA");
        println!("2. RNA");
        println!("3. Protein");
        println!("4. Gene");
        println!("0. Back to main menu");
        let choice = prompt("Enter your choice: ");
        let sequence_type = match choice.trim() {
            "1" => "dna",
            "2" => "rna",
            "3" => "protein",
            "4" => "gene",
            "0" => break,
            _ => {
                println!("Invalid choice. Please try again.");
                continue;
            }
        };
        let sequence = prompt("Sequence (single line, FASTA header allowed): ");
        let settings = with_settings(|manager| manager.settings().clone());
        let options = read_options(&settings.default_sequence_options);
        let report = analyze_sequence_with(&sequence, sequence_type, options.as_slice(), &settings);
        show_sequence_report(&report, settings.wants_json());
    }
}
