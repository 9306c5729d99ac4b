use super::cli_examples::examples_menu;
use super::cli_input::{get_user_input, prompt};
use super::cli_molecule::molecule_menu;
use super::cli_sequence::sequence_menu;
use crate::Molecular::validators::{validate_inchi, validate_smiles};
use std::io::{self, Write};

pub fn run_interactive_menu() {
    loop {
        show_main_menu();
        let choice = get_user_input();

        match choice.trim() {
            "1" => molecule_menu(),
            "2" => sequence_menu(),
            "3" => validators_menu(),
            "4" => examples_menu(),
            "0" => {
                println!("Goodbye!");
                break;
            }
            _ => println!("Invalid choice. Please try again."),
        }
    }
}
/* colors
Blue (\x1b[34m) - Welcome header text

Yellow (\x1b[33m) - Menu options

Cyan (\x1b[36m) - "Enter your choice:" prompt

Reset (\x1b[0m) - Returns to normal color after each colored section
*/
fn show_main_menu() {
    println!(
        "\x1b[34m\n Welcome to ChemSeq: molecular strings and biological sequences \n
    formula weights, SMILES descriptors, DNA/RNA/protein profiles \n \x1b[0m"
    );
    println!("\x1b[33m1. Molecule analysis (SMILES, InChI, formula)\x1b[0m");
    println!("\x1b[33m2. Sequence analysis (DNA, RNA, protein, gene)\x1b[0m");
    println!("\x1b[33m3. Validators\x1b[0m");
    println!("\x1b[33m4. Examples\x1b[0m");
    println!("\x1b[33m0. Exit\x1b[0m");
    print!("\x1b[36mEnter your choice: \x1b[0m");
    let _ = io::stdout().flush();
}

fn validators_menu() {
    loop {
        println!("\n=== Validators ===");
        println!("1. Check SMILES brackets");
        println!("2. Check InChI prefix");
        println!("0. Back to main menu");
        let choice = prompt("Enter your choice: ");
        match choice.trim() {
            "1" => {
                let smiles = prompt("SMILES: ");
                println!("valid: {}", validate_smiles(smiles.trim()));
            }
            "2" => {
                let inchi = prompt("InChI: ");
                println!("valid: {}", validate_inchi(inchi.trim()));
            }
            "0" => break,
            _ => println!("Invalid choice. Please try again."),
        }
    }
}
