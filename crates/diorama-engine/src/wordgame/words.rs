use crate::systems::effects::Rng;
use crate::wordgame::WORD_LENGTH;

/// The pool of target words for the guessing game. Every word must be
/// exactly WORD_LENGTH ASCII uppercase letters; the list is validated once
/// at construction so the scorer never sees a malformed target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Build a validated list. Yields None when the list is empty or any
    /// word has the wrong length or a non-uppercase character.
    pub fn new<I, S>(words: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        if words.is_empty() {
            return None;
        }
        for word in &words {
            if word.len() != WORD_LENGTH || !word.bytes().all(|b| b.is_ascii_uppercase()) {
                return None;
            }
        }
        Some(Self { words })
    }

    /// Pick a target word uniformly at random.
    pub fn pick(&self, rng: &mut Rng) -> &str {
        &self.words[rng.next_int(self.words.len() as u32) as usize]
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
