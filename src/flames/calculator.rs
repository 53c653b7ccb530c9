//! The FLAMES letter-elimination calculation.
//!
//! Both names are normalized, letters common to both are cancelled in
//! pairs, and the number of leftover letters is used as the counting step
//! around the F-L-A-M-E-S circle until one letter survives.

use super::letter::{FlamesLetter, FLAMES_ORDER};
use super::schema::{EliminationRound, FlamesResult};
use log::debug;

/// Run the full calculation for two raw names
///
/// **Public** - main entry point of the core
///
/// # Arguments
/// * `name1` - First name, any text
/// * `name2` - Second name, any text
///
/// # Returns
/// The final letter together with the full elimination trace.
/// Never fails: empty names or names without letters give a count of 0.
///
/// # Example
/// ```
/// use flames_finder::flames::{calculate_flames, FlamesLetter};
///
/// let result = calculate_flames("ROMEO", "JULIET");
/// assert_eq!(result.letter_count, 9);
/// assert_eq!(result.result, FlamesLetter::E);
/// ```
pub fn calculate_flames(name1: &str, name2: &str) -> FlamesResult {
    let n1 = normalize_name(name1);
    let n2 = normalize_name(name2);

    let letter_count = count_remaining_letters(&n1, &n2);
    debug!("FLAMES count for {:?} / {:?}: {}", n1, n2, letter_count);

    let (result, elimination_rounds) = eliminate(letter_count);

    FlamesResult {
        name1: n1,
        name2: n2,
        letter_count,
        result,
        elimination_rounds,
    }
}

/// Lower-case a name and drop everything outside `a`-`z`
///
/// **Public** - also used when displaying names
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase())
        .collect()
}

/// Count letters left over after cancelling common letters
///
/// **Public** - exposed for testing the cancellation step on its own
///
/// Each letter of `n1`, left to right, cancels the first still-uncancelled
/// equal letter of `n2`. Expects already-normalized input.
pub fn count_remaining_letters(n1: &str, n2: &str) -> usize {
    let left: Vec<char> = n1.chars().collect();
    let mut right: Vec<Option<char>> = n2.chars().map(Some).collect();

    let mut cancelled = 0;
    for c in &left {
        if let Some(slot) = right.iter_mut().find(|slot| **slot == Some(*c)) {
            *slot = None;
            cancelled += 1;
        }
    }

    left.len() + right.len() - 2 * cancelled
}

/// Count around the circle `letter_count` steps at a time until one letter is left
///
/// **Public** - exposed for testing the loop with arbitrary counts
///
/// # Returns
/// The surviving letter and the five elimination rounds
pub fn eliminate(letter_count: usize) -> (FlamesLetter, Vec<EliminationRound>) {
    let mut flames: Vec<FlamesLetter> = FLAMES_ORDER.to_vec();
    let mut rounds = Vec::with_capacity(FLAMES_ORDER.len() - 1);
    let mut index = 0usize;

    while flames.len() > 1 {
        index = step_index(index, letter_count, flames.len());
        let eliminated = flames.remove(index);

        rounds.push(EliminationRound {
            round: rounds.len() + 1,
            eliminated,
            remaining: flames.clone(),
        });

        if index >= flames.len() {
            index = 0;
        }
    }

    (flames[0], rounds)
}

/// `(index + count - 1) mod len`, always non-negative
///
/// **Private** - a count of 0 lands on the letter just before `index`
fn step_index(index: usize, count: usize, len: usize) -> usize {
    // reduce first so huge counts can't overflow
    (index + count % len + len - 1) % len
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flames::letter::FlamesLetter::*;

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("Mary Jane"), "maryjane");
        assert_eq!(normalize_name("O'Brien-2nd"), "obriennd");
        assert_eq!(normalize_name("José"), "jos");
        assert_eq!(normalize_name("   "), "");
    }

    #[test]
    fn test_count_remaining_letters() {
        assert_eq!(count_remaining_letters("romeo", "juliet"), 9);
        assert_eq!(count_remaining_letters("aa", "aa"), 0);
        assert_eq!(count_remaining_letters("aab", "a"), 2);
        assert_eq!(count_remaining_letters("", "abc"), 3);
    }

    #[test]
    fn test_step_index_zero_count_wraps_backwards() {
        assert_eq!(step_index(0, 0, 6), 5);
        assert_eq!(step_index(2, 0, 4), 1);
    }

    #[test]
    fn test_step_index_huge_count() {
        assert_eq!(step_index(3, usize::MAX, 5), (3 + usize::MAX % 5 + 4) % 5);
    }

    #[test]
    fn test_eliminate_count_one() {
        let (result, rounds) = eliminate(1);
        assert_eq!(result, S);
        let order: Vec<_> = rounds.iter().map(|r| r.eliminated).collect();
        assert_eq!(order, vec![F, L, A, M, E]);
    }

    #[test]
    fn test_eliminate_count_two() {
        let (result, rounds) = eliminate(2);
        assert_eq!(result, E);
        let order: Vec<_> = rounds.iter().map(|r| r.eliminated).collect();
        assert_eq!(order, vec![L, M, S, A, F]);
    }

    #[test]
    fn test_round_numbers_are_sequential() {
        let (_, rounds) = eliminate(7);
        let numbers: Vec<_> = rounds.iter().map(|r| r.round).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
    }
}
