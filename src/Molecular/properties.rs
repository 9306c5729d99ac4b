//! Heuristic descriptors read straight off the SMILES text.
//!
//! Every count here is a plain substring count over the raw string, not a
//! chemical perception: `Cl` also contributes a `C` to the carbon count, each
//! `OH` is counted once as `O` and once more as `OH`, and a benzene ring can be
//! matched by both ring patterns. These numbers feed stored reports, so the
//! counting rules must stay exactly as they are.
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use super::smiles_parser::parse_smiles_basic;
use crate::Utils::numeric::round_to;

static AROMATIC_RING_LOWERCASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"c1c+c+c+c+c+1").expect("aromatic ring pattern"));
static AROMATIC_RING_KEKULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"C1=CC=CC=C1").expect("kekule ring pattern"));

pub const MAX_MOLECULAR_WEIGHT: f64 = 500.0;
pub const MAX_LOGP: f64 = 5.0;
pub const MAX_HYDROXYL_GROUPS: usize = 5;
pub const MAX_NITROGEN_AND_HYDROXYL: usize = 10;

/// Descriptor record recomputed on demand from a SMILES string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyEstimate {
    pub aromatic_rings: usize,
    pub hydroxyl_groups: usize,
    pub nitrogen_count: usize,
    pub sulfur_count: usize,
    pub halogen_count: usize,
    pub estimated_logp: f64,
    pub lipinski_violations: u32,
    pub drug_like: bool,
}

fn occurrences(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

/// Matches of the aromatic six-ring patterns, lowercase and alternating-bond form summed.
pub fn count_aromatic_rings(smiles: &str) -> usize {
    AROMATIC_RING_LOWERCASE.find_iter(smiles).count() + AROMATIC_RING_KEKULE.find_iter(smiles).count()
}

/// `O` occurrences plus `OH` occurrences.
pub fn count_hydroxyl_groups(smiles: &str) -> usize {
    occurrences(smiles, "O") + occurrences(smiles, "OH")
}

pub fn count_halogens(smiles: &str) -> usize {
    ["F", "Cl", "Br", "I"]
        .iter()
        .map(|halogen| occurrences(smiles, halogen))
        .sum()
}

/// Crude lipophilicity: half a unit per carbon, minus half a unit per oxygen when any is present.
pub fn estimate_logp(smiles: &str) -> f64 {
    let carbon_count = occurrences(smiles, "C") + occurrences(smiles, "c");
    let oxygen_count = occurrences(smiles, "O");
    let logp = if oxygen_count > 0 {
        (carbon_count as f64 - oxygen_count as f64) * 0.5
    } else {
        carbon_count as f64 * 0.5
    };
    round_to(logp, 2)
}

/// Rule-of-five style violation counter, 0 to 4.
pub fn count_lipinski_violations(
    molecular_weight: f64,
    estimated_logp: f64,
    hydroxyl_groups: usize,
    nitrogen_count: usize,
) -> u32 {
    let mut violations = 0;
    if molecular_weight > MAX_MOLECULAR_WEIGHT {
        violations += 1;
    }
    if estimated_logp > MAX_LOGP {
        violations += 1;
    }
    if hydroxyl_groups > MAX_HYDROXYL_GROUPS {
        violations += 1;
    }
    if nitrogen_count + hydroxyl_groups > MAX_NITROGEN_AND_HYDROXYL {
        violations += 1;
    }
    violations
}

pub fn is_drug_like(lipinski_violations: u32) -> bool {
    lipinski_violations <= 1
}

/// Estimates all descriptors of a SMILES string. The molecular weight used for
/// the Lipinski check comes from the basic SMILES atom count.
pub fn estimate_properties(smiles: &str) -> PropertyEstimate {
    let hydroxyl_groups = count_hydroxyl_groups(smiles);
    let nitrogen_count = occurrences(smiles, "N");
    let estimated_logp = estimate_logp(smiles);
    let molecular_weight = parse_smiles_basic(smiles).molecular_weight;
    let lipinski_violations =
        count_lipinski_violations(molecular_weight, estimated_logp, hydroxyl_groups, nitrogen_count);

    PropertyEstimate {
        aromatic_rings: count_aromatic_rings(smiles),
        hydroxyl_groups,
        nitrogen_count,
        sulfur_count: occurrences(smiles, "S"),
        halogen_count: count_halogens(smiles),
        estimated_logp,
        lipinski_violations,
        drug_like: is_drug_like(lipinski_violations),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_all_lipinski_rules_violated() {
        let violations = count_lipinski_violations(600.0, 6.0, 6, 5);
        assert_eq!(violations, 4);
        assert!(!is_drug_like(violations));
    }

    #[test]
    fn test_lipinski_thresholds_are_exclusive() {
        assert_eq!(count_lipinski_violations(500.0, 5.0, 5, 5), 0);
        assert_eq!(count_lipinski_violations(500.01, 5.0, 5, 5), 1);
        assert_eq!(count_lipinski_violations(0.0, 0.0, 0, 11), 1);
        assert!(is_drug_like(1));
        assert!(!is_drug_like(2));
    }

    #[test]
    fn test_hydroxyl_double_count() {
        // one O inside one OH: counted twice
        assert_eq!(count_hydroxyl_groups("CCOH"), 2);
        assert_eq!(count_hydroxyl_groups("CCO"), 1);
        assert_eq!(count_hydroxyl_groups("CC"), 0);
    }

    #[test]
    fn test_aromatic_rings() {
        assert_eq!(count_aromatic_rings("c1ccccc1"), 1);
        assert_eq!(count_aromatic_rings("C1=CC=CC=C1"), 1);
        assert_eq!(count_aromatic_rings("c1ccccc1.C1=CC=CC=C1"), 2);
        assert_eq!(count_aromatic_rings("C1CCCCC1"), 0);
    }

    #[test]
    fn test_halogens_overlap_other_counts() {
        assert_eq!(count_halogens("FC(Cl)(Br)I"), 4);
        // the C of Cl is a carbon for the logP estimate
        assert_relative_eq!(estimate_logp("Cl"), 0.5);
    }

    #[test]
    fn test_estimate_logp() {
        assert_relative_eq!(estimate_logp("CCO"), 0.5);
        assert_relative_eq!(estimate_logp("CCCC"), 2.0);
        assert_relative_eq!(estimate_logp("c1ccccc1"), 3.0);
        assert_relative_eq!(estimate_logp("OO"), -1.0);
    }

    #[test]
    fn test_estimate_properties_ethanol() {
        let props = estimate_properties("CCO");
        assert_eq!(props.aromatic_rings, 0);
        assert_eq!(props.hydroxyl_groups, 1);
        assert_eq!(props.nitrogen_count, 0);
        assert_eq!(props.sulfur_count, 0);
        assert_eq!(props.halogen_count, 0);
        assert_relative_eq!(props.estimated_logp, 0.5);
        assert_eq!(props.lipinski_violations, 0);
        assert!(props.drug_like);
    }

    #[test]
    fn test_long_alkane_is_not_drug_like() {
        // 40 carbons: 480.44 g/mol, logP 20
        let smiles = "C".repeat(40);
        let props = estimate_properties(&smiles);
        assert_relative_eq!(props.estimated_logp, 20.0);
        assert_eq!(props.lipinski_violations, 1);
        assert!(props.drug_like);

        // 50 carbons also breaks the weight limit
        let smiles = "C".repeat(50);
        let props = estimate_properties(&smiles);
        assert_eq!(props.lipinski_violations, 2);
        assert!(!props.drug_like);
    }
}
