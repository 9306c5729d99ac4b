//! Placeholder 2-D depiction of a SMILES string.
//!
//! Atoms are laid out on a zig-zag line in the order their symbols appear and
//! every atom is bonded to the next one. Nothing about the real topology is
//! used; the output only gives a front end something to draw.
use log::error;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static ATOM_SYMBOL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z][a-z]?").expect("atom symbol pattern"));

const ORIGIN_X: usize = 50;
const ORIGIN_Y: usize = 50;
const ATOM_SPACING: usize = 40;
const ZIGZAG_HEIGHT: usize = 20;
const MIN_WIDTH: usize = 200;
const CANVAS_HEIGHT: usize = 150;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutAtom {
    pub symbol: String,
    pub x: usize,
    pub y: usize,
    pub id: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutBond {
    pub from: usize,
    pub to: usize,
    #[serde(rename = "type")]
    pub bond_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout2D {
    pub atoms: Vec<LayoutAtom>,
    pub bonds: Vec<LayoutBond>,
    pub width: usize,
    pub height: usize,
}

impl Layout2D {
    pub fn from_smiles(smiles: &str) -> Self {
        let atoms: Vec<LayoutAtom> = ATOM_SYMBOL
            .find_iter(smiles)
            .enumerate()
            .map(|(i, m)| LayoutAtom {
                symbol: m.as_str().to_string(),
                x: ORIGIN_X + i * ATOM_SPACING,
                y: ORIGIN_Y + (i % 2) * ZIGZAG_HEIGHT,
                id: i,
            })
            .collect();
        let bonds = (1..atoms.len())
            .map(|i| LayoutBond {
                from: i - 1,
                to: i,
                bond_type: "single".to_string(),
            })
            .collect();
        let width = MIN_WIDTH.max(atoms.len() * ATOM_SPACING + 100);
        Self {
            atoms,
            bonds,
            width,
            height: CANVAS_HEIGHT,
        }
    }
}

/// JSON form of `Layout2D::from_smiles`; `None` if serialization fails.
pub fn generate_2d_structure(smiles: &str) -> Option<String> {
    match serde_json::to_string(&Layout2D::from_smiles(smiles)) {
        Ok(json) => Some(json),
        Err(e) => {
            error!("Error generating 2D structure: {}", e);
            None
        }
    }
}
