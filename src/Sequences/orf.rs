//! Naive open reading frame scan on the forward strand.
//!
//! Each of the three frames is walked codon by codon. An `ATG` opens a
//! candidate that is closed by the first in-frame stop codon; the scan resumes
//! after that stop, so ORFs never overlap within a frame. A start codon with no
//! downstream stop ends the frame.
use serde::{Deserialize, Serialize};

pub const START_CODON: &str = "ATG";
pub const STOP_CODONS: [&str; 3] = ["TAA", "TAG", "TGA"];
pub const DEFAULT_MIN_ORF_LENGTH: usize = 150;

/// One ORF. `start` is 1-based, `end` is inclusive and covers the stop codon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrfRecord {
    pub start: usize,
    pub end: usize,
    pub length: usize,
    pub frame: usize,
}

fn codon_at(sequence: &[u8], i: usize) -> Option<&[u8]> {
    sequence.get(i..i + 3)
}

fn is_stop(codon: &[u8]) -> bool {
    STOP_CODONS.iter().any(|stop| stop.as_bytes() == codon)
}

/// Position of the first in-frame stop codon at or after `from`.
fn next_stop(sequence: &[u8], from: usize) -> Option<usize> {
    let mut j = from;
    while let Some(codon) = codon_at(sequence, j) {
        if is_stop(codon) {
            return Some(j);
        }
        j += 3;
    }
    None
}

fn scan_frame(sequence: &[u8], frame: usize, min_length: usize, orfs: &mut Vec<OrfRecord>) {
    let mut i = frame;
    while let Some(codon) = codon_at(sequence, i) {
        if codon != START_CODON.as_bytes() {
            i += 3;
            continue;
        }
        let Some(stop) = next_stop(sequence, i + 3) else {
            break;
        };
        let end = stop + 3;
        let length = end - i;
        if length >= min_length {
            orfs.push(OrfRecord {
                start: i + 1,
                end,
                length,
                frame,
            });
        }
        i = end;
    }
}

/// ORFs of at least `min_length` nucleotides in frames 0, 1 and 2, frame by frame.
/// Expects an uppercase DNA sequence.
pub fn find_orfs(sequence: &str, min_length: usize) -> Vec<OrfRecord> {
    let bytes = sequence.as_bytes();
    let mut orfs = Vec::new();
    for frame in 0..3 {
        scan_frame(bytes, frame, min_length, &mut orfs);
    }
    orfs
}
