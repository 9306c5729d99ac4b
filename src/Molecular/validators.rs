/// Cheap syntactic checks used before a string is accepted as a SMILES or InChI.

pub const INCHI_PREFIX: &str = "InChI=";

fn closer_for(opener: char) -> Option<char> {
    match opener {
        '(' => Some(')'),
        '[' => Some(']'),
        _ => None,
    }
}

/// True when the string is non-empty and its `()` / `[]` pairs nest properly.
pub fn validate_smiles(smiles: &str) -> bool {
    if smiles.is_empty() {
        return false;
    }
    let mut stack: Vec<char> = Vec::new();
    for c in smiles.chars() {
        if closer_for(c).is_some() {
            stack.push(c);
        } else if c == ')' || c == ']' {
            match stack.pop() {
                Some(opener) if closer_for(opener) == Some(c) => {}
                _ => return false,
            }
        }
    }
    stack.is_empty()
}

/// True when the string starts with the literal `InChI=` prefix.
pub fn validate_inchi(inchi: &str) -> bool {
    !inchi.is_empty() && inchi.starts_with(INCHI_PREFIX)
}
