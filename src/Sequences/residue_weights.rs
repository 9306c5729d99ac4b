/// Per-symbol weight tables for nucleotides and amino acids, g/mol.

/// Average weight of a nucleotide within a strand.
pub const NUCLEOTIDE_WEIGHTS: [(char, f64); 5] = [
    ('A', 331.2),
    ('T', 322.2),
    ('G', 347.2),
    ('C', 307.2),
    ('U', 308.2),
];
pub const DEFAULT_NUCLEOTIDE_WEIGHT: f64 = 320.0;

/// Free amino acid average weights; peptide bonds release one water each.
pub const AMINO_ACID_WEIGHTS: [(char, f64); 20] = [
    ('A', 89.09),
    ('R', 174.20),
    ('N', 132.12),
    ('D', 133.10),
    ('C', 121.16),
    ('E', 147.13),
    ('Q', 146.15),
    ('G', 75.07),
    ('H', 155.16),
    ('I', 131.17),
    ('L', 131.17),
    ('K', 146.19),
    ('M', 149.21),
    ('F', 165.19),
    ('P', 115.13),
    ('S', 105.09),
    ('T', 119.12),
    ('W', 204.23),
    ('Y', 181.19),
    ('V', 117.15),
];
pub const DEFAULT_AMINO_ACID_WEIGHT: f64 = 120.0;
pub const WATER_WEIGHT: f64 = 18.015;

pub const DNA_ALPHABET: &str = "ACTG";
pub const RNA_ALPHABET: &str = "AUCG";
pub const PROTEIN_ALPHABET: &str = "ACDEFGHIKLMNPQRSTVWY";

fn lookup(table: &[(char, f64)], symbol: char) -> Option<f64> {
    table
        .iter()
        .find(|(s, _)| *s == symbol)
        .map(|(_, weight)| *weight)
}

pub fn nucleotide_weight(base: char) -> f64 {
    lookup(&NUCLEOTIDE_WEIGHTS, base).unwrap_or(DEFAULT_NUCLEOTIDE_WEIGHT)
}

pub fn amino_acid_weight(residue: char) -> f64 {
    lookup(&AMINO_ACID_WEIGHTS, residue).unwrap_or(DEFAULT_AMINO_ACID_WEIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookups_and_defaults() {
        assert_eq!(nucleotide_weight('G'), 347.2);
        assert_eq!(nucleotide_weight('N'), DEFAULT_NUCLEOTIDE_WEIGHT);
        assert_eq!(amino_acid_weight('W'), 204.23);
        assert_eq!(amino_acid_weight('X'), DEFAULT_AMINO_ACID_WEIGHT);
    }

    #[test]
    fn test_protein_alphabet_matches_weight_table() {
        assert_eq!(PROTEIN_ALPHABET.len(), 20);
        for residue in PROTEIN_ALPHABET.chars() {
            assert!(lookup(&AMINO_ACID_WEIGHTS, residue).is_some(), "{}", residue);
        }
    }
}
