use serde::Serialize;

use crate::error::ChoiceFormatError;

pub const CHOICE_COUNT: usize = 3;

/// The options offered after a story segment.
///
/// By prompt contract the first two are favorable and the last one leads to a
/// bad outcome. Only the count is checked locally.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ChoiceSet([String; CHOICE_COUNT]);

impl ChoiceSet {
    #[cfg(test)]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn unfavorable(&self) -> &str {
        &self.0[CHOICE_COUNT - 1]
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0.into()
    }
}

impl TryFrom<Vec<String>> for ChoiceSet {
    type Error = ChoiceFormatError;

    fn try_from(choices: Vec<String>) -> Result<Self, Self::Error> {
        let found = choices.len();
        let choices: [String; CHOICE_COUNT] =
            choices
                .try_into()
                .map_err(|_| ChoiceFormatError::WrongCount {
                    expected: CHOICE_COUNT,
                    found,
                })?;
        Ok(Self(choices))
    }
}

/// One turn of the story as returned to the client.
#[derive(Clone, Debug)]
pub struct StoryTurn {
    pub story: String,
    pub image_url: String,
    pub choices: ChoiceSet,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn accepts_exactly_three() {
        let set = ChoiceSet::try_from(strings(&["a", "b", "c"])).unwrap();
        assert_eq!(set.as_slice(), ["a", "b", "c"]);
        assert_eq!(set.unfavorable(), "c");
    }

    #[test]
    fn rejects_other_counts() {
        for items in [&["a", "b"][..], &["a", "b", "c", "d"][..], &[][..]] {
            let err = ChoiceSet::try_from(strings(items)).unwrap_err();
            assert!(matches!(
                err,
                ChoiceFormatError::WrongCount { expected: 3, found } if found == items.len()
            ));
        }
    }

    #[test]
    fn serializes_as_plain_array() {
        let set = ChoiceSet::try_from(strings(&["a", "b", "c"])).unwrap();
        assert_eq!(serde_json::to_string(&set).unwrap(), r#"["a","b","c"]"#);
    }
}
