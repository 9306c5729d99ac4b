/// Nucleotide and amino acid weight tables, alphabets
pub mod residue_weights;
/// eng
/// Naive forward-strand ORF scan in three reading frames. A start codon is
/// closed by the first in-frame stop; candidates shorter than the threshold
/// (150 nt by default) are dropped.
///
///  # Examples
/// ```
/// use ChemSeq::Sequences::orf::find_orfs;
/// let sequence = format!("ATG{}TAA", "AAA".repeat(150));
/// let orfs = find_orfs(&sequence, 150);
/// assert_eq!(orfs.len(), 1);
/// assert_eq!(orfs[0].end, 456);
/// ```
pub mod orf;
/// Fixed-formula stand-ins for secondary structure and conservation
pub mod placeholders;
/// Normalization, alphabet validation and the per-type sequence profile
/// (composition, weight, GC content, melting temperature).
pub mod sequence_analyzer;
/// Request-level entry point returning a report record with a success flag
pub mod sequence_api;
mod sequence_api_tests;
