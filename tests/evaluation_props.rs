use proptest::prelude::*;
use rustc_hash::FxHashMap;
use wordle_board::core::{LetterClassification, Word, evaluate};

// Small alphabets force plenty of repeated letters
fn word(alphabet: &'static str, len: usize) -> impl Strategy<Value = Word> {
    proptest::string::string_regex(&format!("[{alphabet}]{{{len}}}"))
        .unwrap()
        .prop_map(|s| Word::new(s).unwrap())
}

fn pair(len: usize) -> impl Strategy<Value = (Word, Word)> {
    (word("a-e", len), word("a-e", len))
}

/// Evaluation that claims the last unclaimed occurrence instead of the first
fn evaluate_claiming_last(secret: &Word, guess: &Word) -> Vec<LetterClassification> {
    let mut remaining: Vec<Option<u8>> = secret.letters().iter().copied().map(Some).collect();
    let mut result = vec![LetterClassification::Absent; guess.len()];
    for (i, (&g, &s)) in guess.letters().iter().zip(secret.letters()).enumerate() {
        if g == s {
            result[i] = LetterClassification::Correct;
            remaining[i] = None;
        }
    }
    for (i, &g) in guess.letters().iter().enumerate() {
        if result[i] == LetterClassification::Correct {
            continue;
        }
        if let Some(pos) = remaining.iter().rposition(|&slot| slot == Some(g)) {
            remaining[pos] = None;
            result[i] = LetterClassification::Present;
        }
    }
    result
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn word_against_itself_is_all_correct(w in word("a-z", 5)) {
        let feedback = evaluate(&w, &w).unwrap();
        prop_assert!(feedback.is_win());
        prop_assert_eq!(feedback.count_correct(), 5);
    }

    #[test]
    fn disjoint_letters_are_all_absent(secret in word("a-e", 5), guess in word("f-j", 5)) {
        let feedback = evaluate(&secret, &guess).unwrap();
        prop_assert!(feedback.classes().iter().all(|&c| c == LetterClassification::Absent));
    }

    #[test]
    fn marks_never_exceed_secret_letter_count((secret, guess) in pair(5)) {
        let feedback = evaluate(&secret, &guess).unwrap();
        let secret_counts = secret.letter_counts();

        let mut marked: FxHashMap<u8, usize> = FxHashMap::default();
        for (&letter, &class) in guess.letters().iter().zip(feedback.classes()) {
            if class != LetterClassification::Absent {
                *marked.entry(letter).or_insert(0) += 1;
            }
        }
        for (letter, count) in marked {
            prop_assert!(count <= secret_counts.get(&letter).copied().unwrap_or(0));
        }
    }

    #[test]
    fn marks_use_every_available_occurrence((secret, guess) in pair(5)) {
        // For each letter: marked == min(count in secret, count in guess)
        let feedback = evaluate(&secret, &guess).unwrap();
        let secret_counts = secret.letter_counts();
        let guess_counts = guess.letter_counts();
        for (&letter, &in_guess) in &guess_counts {
            let marked = guess
                .letters()
                .iter()
                .zip(feedback.classes())
                .filter(|&(&l, &c)| l == letter && c != LetterClassification::Absent)
                .count();
            let in_secret = secret_counts.get(&letter).copied().unwrap_or(0);
            prop_assert_eq!(marked, in_guess.min(in_secret));
        }
    }

    #[test]
    fn correct_exactly_where_letters_match((secret, guess) in pair(5)) {
        let feedback = evaluate(&secret, &guess).unwrap();
        for i in 0..5 {
            let same = secret.char_at(i) == guess.char_at(i);
            prop_assert_eq!(feedback.get(i) == Some(LetterClassification::Correct), same);
        }
    }

    #[test]
    fn claim_order_does_not_change_result((secret, guess) in pair(6)) {
        let feedback = evaluate(&secret, &guess).unwrap();
        let reference = evaluate_claiming_last(&secret, &guess);
        prop_assert_eq!(feedback.classes(), reference.as_slice());
    }

    #[test]
    fn win_only_for_identical_words((secret, guess) in pair(4)) {
        let feedback = evaluate(&secret, &guess).unwrap();
        prop_assert_eq!(feedback.is_win(), secret == guess);
    }

    #[test]
    fn result_aligned_with_guess((secret, guess) in (1usize..9).prop_flat_map(pair)) {
        let feedback = evaluate(&secret, &guess).unwrap();
        prop_assert_eq!(feedback.len(), guess.len());
    }

    #[test]
    fn length_mismatch_always_fails(secret in word("a-z", 5), guess in word("a-z", 6)) {
        let err = evaluate(&secret, &guess).unwrap_err();
        prop_assert_eq!(err.secret, 5);
        prop_assert_eq!(err.guess, 6);
    }
}
