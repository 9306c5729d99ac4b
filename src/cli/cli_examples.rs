use super::cli_input::prompt;
use crate::Examples::molecular_examples::molecular_examples;
use crate::Examples::sequence_examples::sequence_examples;

pub fn examples_menu() {
    loop {
        println!("\n=== Examples ===");
        println!("1. Formula weights");
        println!("2. SMILES atom counts and descriptors");
        println!("3. Molecule reports for every input type");
        println!("4. DNA and RNA profiles");
        println!("5. Protein profile");
        println!("6. Gene annotation (ORFs)");
        println!("0. Back to main menu");

        let choice = prompt("Enter your choice: ");
        match choice.trim() {
            "1" => molecular_examples(0),
            "2" => molecular_examples(1),
            "3" => molecular_examples(2),
            "4" => sequence_examples(0),
            "5" => sequence_examples(1),
            "6" => sequence_examples(2),
            "0" => break,
            _ => println!("Invalid choice. Please try again."),
        }
    }
}
