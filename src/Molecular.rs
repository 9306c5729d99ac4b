/// Module to calculate the atomic composition and molecular weight of a chemical formula
///
///  # Examples
/// ```
/// use ChemSeq::Molecular::molmass::{calculate_weight, parse_formula};
/// let weight = calculate_weight("C6H12O6");
/// assert!((weight - 180.16).abs() < 1e-9);
/// let counts = parse_formula("CH3COOH");
/// assert_eq!(counts["C"], 2);
/// ```
pub mod molmass;
/// Atom counting on SMILES strings by stripping structural syntax and reading
/// element symbols left to right. No chemistry toolkit is involved.
///
///  # Examples
/// ```
/// use ChemSeq::Molecular::smiles_parser::parse_smiles_basic;
/// let summary = parse_smiles_basic("CCO");
/// assert_eq!(summary.molecular_formula, "C2O");
/// ```
pub mod smiles_parser;
/// Heuristic descriptors (aromatic rings, heteroatoms, logP, Lipinski violations)
/// counted as substrings of the raw SMILES.
pub mod properties;
/// Bracket balance check for SMILES and prefix check for InChI
pub mod validators;
/// Zig-zag placeholder layout for drawing a SMILES in a front end
pub mod structure2d;
/// Entry point: tagged molecular input in, flat report record out.
pub mod molecule_api;
