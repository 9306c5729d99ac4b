/// Module to calculate the atomic composition and molecular weight of a chemical formula
///
/// Formulae are read as a flat sequence of (element symbol, optional count) tokens:
/// an uppercase letter, optionally one lowercase letter, then optional digits.
/// Brackets, charges and hydrates are not expanded.
use log::warn;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::Utils::numeric::round_to;

// Define a struct to hold element data
#[derive(Debug, Clone, Copy)]
pub struct Element {
    pub name: &'static str,
    pub atomic_mass: f64,
}

// Elements known to the analyzer and their atomic masses, g/mol
pub const ELEMENTS: &[Element] = &[
    Element {
        name: "H",
        atomic_mass: 1.008,
    },
    Element {
        name: "C",
        atomic_mass: 12.011,
    },
    Element {
        name: "N",
        atomic_mass: 14.007,
    },
    Element {
        name: "O",
        atomic_mass: 15.999,
    },
    Element {
        name: "F",
        atomic_mass: 18.998,
    },
    Element {
        name: "P",
        atomic_mass: 30.974,
    },
    Element {
        name: "S",
        atomic_mass: 32.065,
    },
    Element {
        name: "Cl",
        atomic_mass: 35.453,
    },
    Element {
        name: "Br",
        atomic_mass: 79.904,
    },
    Element {
        name: "I",
        atomic_mass: 126.904,
    },
    Element {
        name: "Na",
        atomic_mass: 22.990,
    },
    Element {
        name: "K",
        atomic_mass: 39.098,
    },
    Element {
        name: "Mg",
        atomic_mass: 24.305,
    },
    Element {
        name: "Ca",
        atomic_mass: 40.078,
    },
    Element {
        name: "Fe",
        atomic_mass: 55.845,
    },
    Element {
        name: "Zn",
        atomic_mass: 65.409,
    },
    Element {
        name: "Cu",
        atomic_mass: 63.546,
    },
    Element {
        name: "Mn",
        atomic_mass: 54.938,
    },
    Element {
        name: "Co",
        atomic_mass: 58.933,
    },
    Element {
        name: "Ni",
        atomic_mass: 58.693,
    },
];

static FORMULA_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z][a-z]?)(\d*)").expect("formula token pattern"));

/// Atomic mass of an element symbol, `None` for symbols outside the table.
pub fn atomic_weight(symbol: &str) -> Option<f64> {
    ELEMENTS
        .iter()
        .find(|element| element.name == symbol)
        .map(|element| element.atomic_mass)
}

/// Splits a formula into (symbol, count) tokens, left to right, without overlaps.
/// A missing count means 1. Characters that do not start a token are skipped.
pub fn tokenize_formula(formula: &str) -> Vec<(String, usize)> {
    FORMULA_TOKEN
        .captures_iter(formula)
        .map(|caps| {
            let symbol = caps[1].to_string();
            let digits = &caps[2];
            let count = if digits.is_empty() {
                1
            } else {
                // absurdly long digit runs saturate instead of failing the whole formula
                digits.parse::<usize>().unwrap_or(usize::MAX)
            };
            (symbol, count)
        })
        .collect()
}

/// Element counts of a formula. Repeated symbols ("CH3COOH") are summed.
pub fn parse_formula(formula: &str) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for (symbol, count) in tokenize_formula(formula) {
        let entry = counts.entry(symbol).or_insert(0usize);
        *entry = entry.saturating_add(count);
    }
    counts
}

/// Unrounded weight of a sequence of (symbol, count) pairs. Unknown symbols
/// contribute nothing and are reported through the logger.
fn sum_weights<'a, I>(tokens: I) -> f64
where
    I: IntoIterator<Item = (&'a str, usize)>,
{
    let mut total_weight = 0.0;
    for (symbol, count) in tokens {
        match atomic_weight(symbol) {
            Some(mass) => total_weight += mass * count as f64,
            None => warn!("Unknown element: {}", symbol),
        }
    }
    total_weight
}

/// Molecular weight of a formula in g/mol, rounded to 2 decimals.
///
/// Never fails: a string without any recognisable token weighs 0.0.
pub fn calculate_weight(formula: &str) -> f64 {
    let tokens = tokenize_formula(formula);
    let total = sum_weights(tokens.iter().map(|(symbol, count)| (symbol.as_str(), *count)));
    round_to(total, 2)
}

/// Weight of an already counted atom profile, rounded to 2 decimals.
pub fn weight_of_counts(counts: &BTreeMap<String, usize>) -> f64 {
    let total = sum_weights(counts.iter().map(|(symbol, count)| (symbol.as_str(), *count)));
    round_to(total, 2)
}

/// Weights of a batch of formulae, in input order.
pub fn calculate_weight_of_vector_of_formulae(vec_of_formulae: &[&str]) -> Vec<f64> {
    vec_of_formulae
        .iter()
        .map(|formula| calculate_weight(formula))
        .collect()
}
