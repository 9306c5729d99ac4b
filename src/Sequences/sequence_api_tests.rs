#[cfg(test)]
mod tests {
    use crate::Sequences::orf::OrfRecord;
    use crate::Sequences::sequence_analyzer::SequenceType;
    use crate::Sequences::sequence_api::{analyze_sequence, analyze_sequence_with};
    use crate::settings::AnalyzerSettings;
    use approx::assert_relative_eq;
    use serde_json::Value;
    use std::collections::BTreeMap;

    const NO_OPTIONS: [&str; 0] = [];

    #[test]
    fn test_dna_gc_content() {
        let report = analyze_sequence("GGCC", "dna", &NO_OPTIONS);
        assert!(report.success);
        let profile = report.profile.unwrap();
        assert_eq!(
            profile.composition,
            BTreeMap::from([("C".to_string(), 2), ("G".to_string(), 2)])
        );
        assert_eq!(profile.gc_content, Some(100.0));

        let profile = analyze_sequence("AATT", "dna", &NO_OPTIONS).profile.unwrap();
        assert_eq!(profile.gc_content, Some(0.0));
        // Wallace rule: 2*4
        assert_eq!(profile.melting_temp, Some(8.0));
    }

    #[test]
    fn test_fasta_input() {
        let report = analyze_sequence(">my gene\natgc\nATGC\n", "DNA", &NO_OPTIONS);
        assert!(report.success);
        let profile = report.profile.unwrap();
        assert_eq!(profile.sequence, "ATGCATGC");
        assert_eq!(profile.length, 8);
        assert_eq!(profile.sequence_type, SequenceType::Dna);
    }

    #[test]
    fn test_gene_annotation_finds_orf() {
        let sequence = format!("ATG{}TAA", "AAA".repeat(150));
        let report = analyze_sequence(&sequence, "gene", &["geneAnnotation"]);
        let orfs = report.profile.unwrap().orfs.unwrap();
        assert_eq!(
            orfs,
            vec![OrfRecord {
                start: 1,
                end: 456,
                length: 456,
                frame: 0
            }]
        );
    }

    #[test]
    fn test_orfs_only_when_requested() {
        let sequence = format!("ATG{}TAA", "AAA".repeat(150));
        let report = analyze_sequence(&sequence, "dna", &NO_OPTIONS);
        assert_eq!(report.profile.unwrap().orfs, None);
    }

    #[test]
    fn test_orf_threshold_from_settings() {
        let settings = AnalyzerSettings {
            min_orf_length: 9,
            ..AnalyzerSettings::default()
        };
        let report = analyze_sequence_with("ATGAAATAA", "dna", &["geneAnnotation"], &settings);
        assert_eq!(report.profile.unwrap().orfs.unwrap().len(), 1);

        let report = analyze_sequence("ATGAAATAA", "dna", &["geneAnnotation"]);
        assert!(report.profile.unwrap().orfs.unwrap().is_empty());
    }

    #[test]
    fn test_invalid_character_fails_request() {
        let report = analyze_sequence("ACGU", "dna", &NO_OPTIONS);
        assert!(!report.success);
        assert!(report.profile.is_none());
        let message = report.error.unwrap();
        assert!(message.contains("DNA"));
        assert!(message.contains('U'));
    }

    #[test]
    fn test_unknown_type_and_option() {
        let report = analyze_sequence("ACGT", "plasmid", &NO_OPTIONS);
        assert!(!report.success);
        assert_eq!(report.error.as_deref(), Some("Unsupported sequence type: plasmid"));

        let report = analyze_sequence("ACGT", "dna", &["foldingPrediction"]);
        assert!(!report.success);
        assert_eq!(
            report.error.as_deref(),
            Some("Unknown analysis option: foldingPrediction")
        );
    }

    #[test]
    fn test_protein_report() {
        let report = analyze_sequence("mktayiakqr", "protein", &["secondaryStructure"]);
        assert!(report.success);
        let profile = report.profile.unwrap();
        assert_eq!(profile.length, 10);
        assert_eq!(profile.gc_content, None);
        let structure = profile.secondary_structure.unwrap();
        assert_eq!(structure.method, "placeholder");
        let total: f64 = structure.fractions.values().sum();
        assert_relative_eq!(total, 100.0, epsilon = 1e-9);
        assert!(profile.molecular_weight > 0.0);
    }

    #[test]
    fn test_rna_report() {
        let report = analyze_sequence("AUGC", "rna", &["conservationAnalysis"]);
        let profile = report.profile.unwrap();
        assert_eq!(profile.gc_content, Some(50.0));
        // 331.2 + 308.2 + 347.2 + 307.2
        assert_relative_eq!(profile.molecular_weight, 1293.8);
        assert_eq!(profile.conservation.unwrap().method, "placeholder");
    }

    #[test]
    fn test_report_json() {
        let report = analyze_sequence("GGCC", "dna", &NO_OPTIONS);
        let json: Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["profile"]["sequence_type"], "dna");
        assert_eq!(json["profile"]["composition"]["G"], 2);
        assert!(json["profile"].get("orfs").is_none());
    }

    #[test]
    fn test_repeated_analysis_is_identical() {
        let sequence = format!("CC{}ATG{}TGA", "GT".repeat(5), "GCC".repeat(60));
        let first = analyze_sequence(&sequence, "gene", &["geneAnnotation", "secondaryStructure"]);
        let second = analyze_sequence(&sequence, "gene", &["geneAnnotation", "secondaryStructure"]);
        assert_eq!(first, second);
        assert_eq!(first.to_json().unwrap(), second.to_json().unwrap());
    }
}
