pub fn molecular_examples(task: usize) {
    //

    match task {
        0 => {
            // FORMULA WEIGHTS
            use crate::Molecular::molmass::{
                calculate_weight, calculate_weight_of_vector_of_formulae, parse_formula,
            };
            let formula = "C8H10N4O2"; // caffeine
            println!("Element counts: {:?}", parse_formula(formula));
            println!("Molecular weight: {:?} g/mol", calculate_weight(formula));

            let vec_of_formulae = vec!["H2O", "NaCl", "C6H12O6", "C9H8O4"];
            let expected = vec![18.02, 58.44, 180.16, 180.16];
            let weights = calculate_weight_of_vector_of_formulae(&vec_of_formulae);
            for (i, &expected_weight) in expected.iter().enumerate() {
                println!("{}: {:?} g/mol", vec_of_formulae[i], weights[i]);
                assert!((weights[i] - expected_weight).abs() < 1e-2);
            }
            // unknown symbols are skipped with a warning
            println!("XeF2: {:?} g/mol", calculate_weight("XeF2"));
        }
        1 => {
            // SMILES ATOM COUNTS AND DESCRIPTORS
            use crate::Molecular::properties::estimate_properties;
            use crate::Molecular::smiles_parser::parse_smiles_basic;
            use crate::Molecular::validators::validate_smiles;
            let aspirin = "CC(=O)OC1=CC=CC=C1C(=O)O";
            assert!(validate_smiles(aspirin));
            let summary = parse_smiles_basic(aspirin);
            println!("atom counts: {:?}", summary.atom_counts);
            println!("formula {}, weight {} g/mol", summary.molecular_formula, summary.molecular_weight);
            let props = estimate_properties(aspirin);
            println!("{:#?}", props);

            // aromatic lowercase atoms are invisible to the counter
            let benzene = parse_smiles_basic("c1ccccc1");
            println!("benzene (aromatic form) atom counts: {:?}", benzene.atom_counts);
        }
        2 => {
            // REPORTS FOR EVERY INPUT TYPE
            use crate::Molecular::molecule_api::analyze_molecule;
            use crate::Utils::report_table::print_molecule_report;
            let inputs = [
                ("CN1C=NC2=C1C(=O)N(C(=O)N2C)C", "smiles"),
                ("InChI=1S/C8H10N4O2/c1-10-4-9-6-5(10)7(13)12(3)8(14)11(6)2/h4H,1-3H3", "inchi"),
                ("C8H10N4O2", "formula"),
                ("CN1C=NC2=C1C(=O)N(C(=O)N2C)C", "mol"),
            ];
            for (value, input_type) in inputs {
                let report = analyze_molecule(value, input_type);
                print_molecule_report(&report);
            }
        }
        _ => {
            println!("there is no such task");
        }
    }
}
