//! Restricted name pairs whose result is withheld.

use log::debug;
use serde::{Deserialize, Serialize};

/// Default first-side names
pub const DEFAULT_LIST_A: &[&str] = &["mohammedfayizt", "mohammedfayiz", "fayiz"];

/// Default second-side names
pub const DEFAULT_LIST_B: &[&str] = &["fathimafarhanakp", "fathimafarhana", "farhana", "fafa"];

/// Shown instead of the result for a restricted pair
pub const REFUSAL_MESSAGE: &str = "Sorry buddy… I can't continue with this one ☺️\n\
My master still carries her in his heart.\n\
Some flames don't fade… even if they burn alone.";

/// Pair of name lists; a match needs one name from each list
///
/// Deserializing goes through `new`, so entries are always normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RestrictedLists")]
pub struct RestrictedPairPolicy {
    pub list_a: Vec<String>,
    pub list_b: Vec<String>,
}

/// Lists as written in a config file
#[derive(Debug, Deserialize)]
struct RestrictedLists {
    #[serde(default = "default_list_a")]
    list_a: Vec<String>,

    #[serde(default = "default_list_b")]
    list_b: Vec<String>,
}

impl From<RestrictedLists> for RestrictedPairPolicy {
    fn from(lists: RestrictedLists) -> Self {
        Self::new(lists.list_a, lists.list_b)
    }
}

fn default_list_a() -> Vec<String> {
    DEFAULT_LIST_A.iter().map(|s| s.to_string()).collect()
}

fn default_list_b() -> Vec<String> {
    DEFAULT_LIST_B.iter().map(|s| s.to_string()).collect()
}

impl Default for RestrictedPairPolicy {
    fn default() -> Self {
        Self {
            list_a: default_list_a(),
            list_b: default_list_b(),
        }
    }
}

impl RestrictedPairPolicy {
    /// Build a policy from custom lists
    ///
    /// Entries are normalized the same way input names are, so the lists
    /// can be written in any case or spacing.
    pub fn new<A, B>(list_a: A, list_b: B) -> Self
    where
        A: IntoIterator,
        A::Item: AsRef<str>,
        B: IntoIterator,
        B::Item: AsRef<str>,
    {
        Self {
            list_a: list_a.into_iter().map(|s| normalize_for_policy(s.as_ref())).collect(),
            list_b: list_b.into_iter().map(|s| normalize_for_policy(s.as_ref())).collect(),
        }
    }

    /// Check whether the pair is restricted, in either order
    ///
    /// **Public** - called with the raw names the user typed
    pub fn is_restricted(&self, name1: &str, name2: &str) -> bool {
        let n1 = normalize_for_policy(name1);
        let n2 = normalize_for_policy(name2);

        let direct = self.in_list_a(&n1) && self.in_list_b(&n2);
        let reverse = self.in_list_a(&n2) && self.in_list_b(&n1);

        if direct || reverse {
            debug!("Restricted pair matched: {:?} / {:?}", n1, n2);
        }

        direct || reverse
    }

    fn in_list_a(&self, name: &str) -> bool {
        self.list_a.iter().any(|entry| entry == name)
    }

    fn in_list_b(&self, name: &str) -> bool {
        self.list_b.iter().any(|entry| entry == name)
    }
}

/// Lower-case and drop whitespace; punctuation and digits are kept
pub fn normalize_for_policy(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_for_policy() {
        assert_eq!(normalize_for_policy("  Mohammed Fayiz T "), "mohammedfayizt");
        assert_eq!(normalize_for_policy("Fa.Fa"), "fa.fa");
    }

    #[test]
    fn test_default_pair_both_orders() {
        let policy = RestrictedPairPolicy::default();
        assert!(policy.is_restricted("Fayiz", "Farhana"));
        assert!(policy.is_restricted("Farhana", "Fayiz"));
    }

    #[test]
    fn test_same_side_names_do_not_match() {
        let policy = RestrictedPairPolicy::default();
        assert!(!policy.is_restricted("fayiz", "mohammedfayiz"));
        assert!(!policy.is_restricted("fafa", "farhana"));
    }

    #[test]
    fn test_punctuation_is_not_stripped() {
        let policy = RestrictedPairPolicy::default();
        assert!(!policy.is_restricted("fayiz!", "farhana"));
    }

    #[test]
    fn test_custom_lists_are_normalized() {
        let policy = RestrictedPairPolicy::new(["Alice Smith"], ["BOB"]);
        assert_eq!(policy.list_a, vec!["alicesmith".to_string()]);
        assert!(policy.is_restricted("bob", "alice smith"));
        assert!(!policy.is_restricted("fayiz", "farhana"));
    }

    #[test]
    fn test_deserialized_lists_are_normalized() {
        let policy: RestrictedPairPolicy =
            serde_json::from_str(r#"{"list_a": ["  Romeo Montague "], "list_b": ["JULIET"]}"#)
                .unwrap();

        assert_eq!(policy.list_a, vec!["romeomontague".to_string()]);
        assert_eq!(policy.list_b, vec!["juliet".to_string()]);
        assert!(policy.is_restricted("juliet", "romeo montague"));
    }

    #[test]
    fn test_deserialized_missing_list_uses_default() {
        let policy: RestrictedPairPolicy =
            serde_json::from_str(r#"{"list_b": ["Juliet"]}"#).unwrap();
        assert!(policy.is_restricted("Fayiz", "juliet"));
    }
}
