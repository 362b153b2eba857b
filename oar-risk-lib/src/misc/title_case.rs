/// Turn an identifier like `optic_nerve` into `Optic Nerve`.
///
/// Underscores become spaces. The first letter of every run of letters is uppercased and the
/// rest lowercased, so `CT_scan2b` becomes `Ct Scan2B`.
#[must_use]
pub fn title_case(id: &str) -> String {
    let mut out = String::with_capacity(id.len());
    let mut in_word = false;

    for c in id.chars() {
        let c = if c == '_' { ' ' } else { c };
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snake_case() {
        assert_eq!(title_case("spinal_cord"), "Spinal Cord");
        assert_eq!(title_case("unknown_organ_xyz"), "Unknown Organ Xyz");
    }

    #[test]
    fn test_mixed_case_and_digits() {
        assert_eq!(title_case("CT_scan2b"), "Ct Scan2B");
    }

    #[test]
    fn test_empty() {
        assert_eq!(title_case(""), "");
    }
}
