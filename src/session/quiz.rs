//! Multiple-choice option building for the vocabulary test

use rand::seq::{IteratorRandom, SliceRandom};
use rand::Rng;

/// Most distractors offered alongside the correct translation
pub const MAX_DISTRACTORS: usize = 3;

/// Build a shuffled, duplicate-free option list for one word.
///
/// `others` are the translations of every other word in the vocabulary.
/// Up to `MAX_DISTRACTORS` of them are sampled without replacement. The
/// correct translation always appears exactly once.
pub fn build_options<R: Rng + ?Sized>(correct: &str, others: &[&str], rng: &mut R) -> Vec<String> {
    let sample_size = MAX_DISTRACTORS.min(others.len());
    let distractors = others.iter().choose_multiple(rng, sample_size);

    let mut options = vec![correct.to_string()];
    for candidate in distractors {
        if !options.iter().any(|o| o == candidate) {
            options.push(candidate.to_string());
        }
    }

    options.shuffle(rng);
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_single_word_has_only_correct_option() {
        let mut rng = StdRng::seed_from_u64(7);
        let options = build_options("hello", &[], &mut rng);
        assert_eq!(options, vec!["hello".to_string()]);
    }

    #[test]
    fn test_correct_appears_exactly_once() {
        let others = ["thank you", "goodbye", "hello", "please", "yes"];
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let options = build_options("hello", &others, &mut rng);
            assert_eq!(options.iter().filter(|o| *o == "hello").count(), 1);
            assert!(options.len() <= MAX_DISTRACTORS + 1);
        }
    }

    #[test]
    fn test_options_are_unique() {
        let others = ["same", "same", "same"];
        let mut rng = StdRng::seed_from_u64(1);
        let options = build_options("other", &others, &mut rng);
        assert_eq!(options.len(), 2);
    }

    #[test]
    fn test_uses_all_others_when_few() {
        let others = ["thank you", "goodbye"];
        let mut rng = StdRng::seed_from_u64(3);
        let mut options = build_options("hello", &others, &mut rng);
        options.sort();
        assert_eq!(options, vec!["goodbye", "hello", "thank you"]);
    }
}
