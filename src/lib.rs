//! # ChemSeq
//!
//! Molecular string and biological sequence analysis without a chemistry
//! toolkit: formula weights, SMILES atom counting, heuristic drug-likeness
//! descriptors, and DNA/RNA/protein profiles with a naive ORF scan.
//!
//! Every analyzer is a pure function over its input string and the constant
//! weight tables, so calls can be made from any number of threads.
#[allow(non_snake_case)]
pub mod Examples;
#[allow(non_snake_case)]
pub mod Molecular;
#[allow(non_snake_case)]
pub mod Sequences;
#[allow(non_snake_case)]
pub mod Utils;
pub mod cli;
pub mod settings;
