/// Identifier conversion shared by validation and the emitter.
///
/// Model names are camelCase or PascalCase; generated field and module
/// idents are snake_case. Validation rejects models whose distinct names
/// converge on the same ident, so the emitter can rely on uniqueness.
pub fn snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev_lower = false;
    for ch in name.chars() {
        if ch.is_uppercase() {
            if prev_lower {
                out.push('_');
            }
            for lower in ch.to_lowercase() {
                out.push(lower);
            }
            prev_lower = false;
        } else {
            out.push(ch);
            prev_lower = ch.is_lowercase() || ch.is_ascii_digit();
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_camel_and_pascal_case() {
        assert_eq!(snake_case("SoccerTeam"), "soccer_team");
        assert_eq!(snake_case("officiatedBy"), "officiated_by");
        assert_eq!(snake_case("playedAt"), "played_at");
        assert_eq!(snake_case("name"), "name");
    }

    #[test]
    fn distinct_names_can_converge() {
        assert_eq!(snake_case("playedAt"), snake_case("played_at"));
        assert_eq!(snake_case("PlayedAt"), snake_case("Played_At"));
    }
}
