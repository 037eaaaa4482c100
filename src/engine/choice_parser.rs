use crate::error::ChoiceFormatError;
use crate::model::story::ChoiceSet;

/// Parses the choices model output into a [`ChoiceSet`].
///
/// Grammar, one option per non-blank line:
///
/// ```text
/// line := ws* digits ". " text
/// ```
///
/// Any non-conforming line fails the whole parse, as does a count other
/// than three.
pub fn parse_choices(text: &str) -> Result<ChoiceSet, ChoiceFormatError> {
    let mut choices = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        choices.push(parse_choice_line(index + 1, line)?);
    }

    ChoiceSet::try_from(choices)
}

fn parse_choice_line(line_number: usize, line: &str) -> Result<String, ChoiceFormatError> {
    let Some((ordinal, text)) = line.split_once(". ") else {
        return Err(ChoiceFormatError::MissingSeparator {
            line_number,
            line: line.to_string(),
        });
    };

    if ordinal.is_empty() || !ordinal.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ChoiceFormatError::BadOrdinal {
            line_number,
            line: line.to_string(),
        });
    }

    // "1. " alone trims to "1." and never reaches here, so text is non-empty
    Ok(text.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numbered_list() {
        let choices = parse_choices("1. Go left\n2. Go right\n3. Jump off a cliff").unwrap();
        assert_eq!(choices.as_slice(), ["Go left", "Go right", "Jump off a cliff"]);
    }

    #[test]
    fn skips_blank_lines_and_surrounding_whitespace() {
        let raw = "\n  1. Suivre la rivière  \n\n2. Allumer un feu\r\n   \n3. Réveiller le dragon\n";
        let choices = parse_choices(raw).unwrap();
        assert_eq!(
            choices.as_slice(),
            ["Suivre la rivière", "Allumer un feu", "Réveiller le dragon"]
        );
    }

    #[test]
    fn splits_only_on_first_separator() {
        let choices = parse_choices("1. Wait. Then run\n2. Hide\n3. Shout. Loudly. Twice").unwrap();
        assert_eq!(choices.as_slice()[0], "Wait. Then run");
        assert_eq!(choices.unfavorable(), "Shout. Loudly. Twice");
    }

    #[test]
    fn line_without_separator_fails() {
        let err = parse_choices("1. Go left\nOption A\n3. Jump").unwrap_err();
        assert_eq!(
            err,
            ChoiceFormatError::MissingSeparator {
                line_number: 2,
                line: "Option A".into(),
            }
        );
    }

    #[test]
    fn bare_ordinal_fails() {
        let err = parse_choices("1. Go left\n2. \n3. Jump").unwrap_err();
        assert!(matches!(err, ChoiceFormatError::MissingSeparator { line_number: 2, .. }));
    }

    #[test]
    fn non_numeric_ordinal_fails() {
        let err = parse_choices("A. Go left\nB. Go right\nC. Jump").unwrap_err();
        assert!(matches!(err, ChoiceFormatError::BadOrdinal { line_number: 1, .. }));

        let err = parse_choices("Choice one. Go left\n2. Go right\n3. Jump").unwrap_err();
        assert!(matches!(err, ChoiceFormatError::BadOrdinal { .. }));
    }

    #[test]
    fn wrong_count_fails() {
        assert_eq!(
            parse_choices("1. Go left\n2. Go right").unwrap_err(),
            ChoiceFormatError::WrongCount { expected: 3, found: 2 }
        );
        assert_eq!(
            parse_choices("1. a\n2. b\n3. c\n4. d").unwrap_err(),
            ChoiceFormatError::WrongCount { expected: 3, found: 4 }
        );
        assert_eq!(
            parse_choices("   \n").unwrap_err(),
            ChoiceFormatError::WrongCount { expected: 3, found: 0 }
        );
    }
}
