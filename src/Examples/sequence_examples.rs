pub fn sequence_examples(task: usize) {
    //

    match task {
        0 => {
            // DNA AND RNA PROFILES
            use crate::Sequences::sequence_api::analyze_sequence;
            use crate::Utils::report_table::print_sequence_report;
            let fasta = ">primer\nGCGTACGTAGCTAGCTAGGCT";
            let report = analyze_sequence(fasta, "dna", &["secondaryStructure"]);
            print_sequence_report(&report);

            let report = analyze_sequence("AUGGCUUAA", "rna", &["conservationAnalysis"]);
            print_sequence_report(&report);

            // U is not a DNA base
            let report = analyze_sequence("AUGGCUUAA", "dna", &["conservationAnalysis"]);
            assert!(!report.success);
            println!("{:?}", report.error);
        }
        1 => {
            // PROTEIN PROFILE
            use crate::Sequences::sequence_api::analyze_sequence;
            let insulin_b = "FVNQHLCGSHLVEALYLVCGERGFFYTPKT";
            let report = analyze_sequence(insulin_b, "protein", &["secondaryStructure", "conservationAnalysis"]);
            match report.to_json() {
                Ok(json) => println!("{}", json),
                Err(e) => println!("{}", e),
            }
        }
        2 => {
            // GENE ANNOTATION
            use crate::Sequences::sequence_api::analyze_sequence_with;
            use crate::Utils::report_table::print_sequence_report;
            use crate::settings::AnalyzerSettings;
            let gene = format!("CC{}TAA{}ATG{}TGA", "GT".repeat(20), "A".repeat(7), "GCA".repeat(70));
            let report = analyze_sequence_with(&gene, "gene", &["geneAnnotation"], &AnalyzerSettings::default());
            print_sequence_report(&report);

            // the same region with a lower threshold
            let settings = AnalyzerSettings {
                min_orf_length: 60,
                ..AnalyzerSettings::default()
            };
            let short = format!("ATG{}TAG", "GCA".repeat(20));
            let report = analyze_sequence_with(&short, "dna", &["geneAnnotation"], &settings);
            print_sequence_report(&report);
        }
        _ => {
            println!("there is no such task");
        }
    }
}
