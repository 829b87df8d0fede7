use serde::Serialize;

use crate::wordgame::WORD_LENGTH;

/// Outcome of one guessed letter. The derived ordering is the keyboard
/// precedence: Absent < Present < Correct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterScore {
    /// The letter does not appear in the target (or every copy is used up).
    Absent,
    /// In the target, but at a different position.
    Present,
    /// Right letter, right position.
    Correct,
}

/// Score a guess against the target, letter by letter.
///
/// Two passes: exact positions claim their target letters first, then the
/// remaining guess letters may claim leftover target occurrences as
/// Present. A letter is credited at most as many times as the target
/// contains it, so "LLLLL" against "HELLO" marks exactly two Ls.
///
/// Both strings must be WORD_LENGTH ASCII uppercase letters.
pub fn classify(guess: &str, target: &str) -> [LetterScore; WORD_LENGTH] {
    debug_assert_eq!(guess.len(), WORD_LENGTH);
    debug_assert_eq!(target.len(), WORD_LENGTH);
    debug_assert!(guess.bytes().all(|b| b.is_ascii_uppercase()));
    debug_assert!(target.bytes().all(|b| b.is_ascii_uppercase()));

    let guess = guess.as_bytes();
    let target = target.as_bytes();
    let mut scores = [LetterScore::Absent; WORD_LENGTH];

    // Pass 1: exact matches. Target letters not claimed here go into a
    // per-letter pool for the second pass.
    let mut pool = [0u8; 26];
    for i in 0..WORD_LENGTH {
        if guess[i] == target[i] {
            scores[i] = LetterScore::Correct;
        } else {
            pool[(target[i] - b'A') as usize] += 1;
        }
    }

    // Pass 2: misplaced letters drain the pool.
    for i in 0..WORD_LENGTH {
        if scores[i] == LetterScore::Correct {
            continue;
        }
        let slot = (guess[i] - b'A') as usize;
        if pool[slot] > 0 {
            pool[slot] -= 1;
            scores[i] = LetterScore::Present;
        }
    }

    scores
}

/// Best known score per letter across a round, shown on the on-screen
/// keyboard. Merging only ever upgrades, so a letter scored Correct in one
/// row never drops back to Present or Absent in a later row.
#[derive(Debug, Clone, Default)]
pub struct KeyScores {
    scores: [Option<LetterScore>; 26],
}

impl KeyScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a letter's score, keeping the stronger of old and new.
    pub fn merge(&mut self, letter: char, score: LetterScore) {
        if !letter.is_ascii_uppercase() {
            return;
        }
        let slot = (letter as u8 - b'A') as usize;
        self.scores[slot] = Some(match self.scores[slot] {
            Some(old) => old.max(score),
            None => score,
        });
    }

    pub fn get(&self, letter: char) -> Option<LetterScore> {
        if !letter.is_ascii_uppercase() {
            return None;
        }
        self.scores[(letter as u8 - b'A') as usize]
    }

    pub fn clear(&mut self) {
        self.scores = [None; 26];
    }

    /// Iterate the letters that have a recorded score, in alphabet order.
    pub fn iter(&self) -> impl Iterator<Item = (char, LetterScore)> + '_ {
        self.scores
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.map(|score| ((b'A' + i as u8) as char, score)))
    }
}
