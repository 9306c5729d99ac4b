use super::cli_input::prompt;
use super::render::show_molecule_report;
use crate::Molecular::molecule_api::analyze_molecule;
use crate::Molecular::structure2d::generate_2d_structure;
use crate::settings::with_settings;

pub fn molecule_menu() {
    loop {
        println!("\n=== Molecule Analysis ===");
        println!("1. SMILES");
        println!("2. InChI");
        println!("3. Molecular formula");
        println!("4. 2D layout sketch of a SMILES");
        println!("0. Back to main menu");
        let choice = prompt("Enter your choice: ");
        let input_type = match choice.trim() {
            "1" => "smiles",
            "2" => "inchi",
            "3" => "formula",
            "4" => {
                let smiles = prompt("SMILES: ");
                match generate_2d_structure(smiles.trim()) {
                    Some(json) => println!("{}", json),
                    None => println!("Layout could not be generated"),
                }
                continue;
            }
            "0" => break,
            _ => {
                println!("Invalid choice. Please try again.");
                continue;
            }
        };
        let value = prompt(&format!("Enter {}: ", input_type));
        let report = analyze_molecule(value.trim(), input_type);
        let json = with_settings(|manager| manager.settings().wants_json());
        show_molecule_report(&report, json);
    }
}
