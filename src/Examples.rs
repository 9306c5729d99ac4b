/// Runnable demonstrations of formula, SMILES and molecule report functions
pub mod molecular_examples;
/// Runnable demonstrations of nucleotide, protein and ORF analysis
pub mod sequence_examples;
