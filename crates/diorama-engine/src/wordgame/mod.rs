//! Word-guess minigame: a 6x5 grid of letter tiles, a secret target word
//! per round, and keyboard-driven guessing with per-letter scoring.

mod score;
mod words;

// Re-export public types
pub use score::{classify, KeyScores, LetterScore};
pub use words::WordList;

use serde::Serialize;

use crate::systems::effects::Rng;

/// Letters per word.
pub const WORD_LENGTH: usize = 5;
/// Guess rows per round.
pub const MAX_GUESSES: usize = 6;

/// Where a round stands. Won and Lost are terminal until the next start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GamePhase {
    /// No round started yet.
    Idle,
    /// Accepting input.
    InProgress,
    Won,
    Lost,
}

/// One cell of the guess grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileState {
    Empty,
    /// Letter typed into the current row, not yet submitted.
    Filled(char),
    /// Letter from a submitted row, with its score.
    Scored(char, LetterScore),
}

/// A key press routed to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessKey {
    Letter(char),
    Enter,
    Back,
}

impl GuessKey {
    /// Map a DOM key code: Backspace, Enter, and the letters A-Z.
    /// Anything else is not a game key.
    pub fn from_key_code(code: u32) -> Option<Self> {
        match code {
            8 => Some(Self::Back),
            13 => Some(Self::Enter),
            65..=90 => Some(Self::Letter((b'A' + (code - 65) as u8) as char)),
            _ => None,
        }
    }
}

/// What a key press did, so the scene can react (reveal animation, events).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Nothing changed: wrong phase, full row, empty row, short guess.
    Ignored,
    /// The current row's letters changed.
    Edited,
    /// A full row was submitted and scored.
    RowScored(usize),
}

/// The whole round state. All mutation goes through `handle_key`, so the
/// grid, keyboard, and phase can never disagree with each other.
pub struct WordGame {
    list: WordList,
    target: String,
    grid: [[TileState; WORD_LENGTH]; MAX_GUESSES],
    row: usize,
    current: String,
    phase: GamePhase,
    keys: KeyScores,
    message: Option<String>,
}

impl WordGame {
    /// A fresh game that has not started a round yet. Keys are ignored
    /// until the first `start`.
    pub fn new(list: WordList) -> Self {
        Self {
            list,
            target: String::new(),
            grid: [[TileState::Empty; WORD_LENGTH]; MAX_GUESSES],
            row: 0,
            current: String::new(),
            phase: GamePhase::Idle,
            keys: KeyScores::new(),
            message: None,
        }
    }

    /// Start a round, abandoning any round in progress: new random target,
    /// cleared grid, cleared keyboard. Safe to call from any phase.
    pub fn start(&mut self, rng: &mut Rng) {
        self.target = self.list.pick(rng).to_string();
        self.grid = [[TileState::Empty; WORD_LENGTH]; MAX_GUESSES];
        self.row = 0;
        self.current.clear();
        self.phase = GamePhase::InProgress;
        self.keys.clear();
        self.message = None;
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Win/loss banner text, set when the round ends.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// The row currently being typed into.
    pub fn row(&self) -> usize {
        self.row
    }

    /// The letters typed into the current row so far.
    pub fn current_guess(&self) -> &str {
        &self.current
    }

    pub fn tile(&self, row: usize, col: usize) -> TileState {
        self.grid[row][col]
    }

    /// Best known keyboard score for a letter.
    pub fn key_score(&self, letter: char) -> Option<LetterScore> {
        self.keys.get(letter)
    }

    /// The sole mutation entry point. Letters fill the current row up to
    /// WORD_LENGTH, Back removes the last letter, and Enter submits only a
    /// complete row. Once the round is over every key is ignored.
    pub fn handle_key(&mut self, key: GuessKey) -> KeyOutcome {
        if self.phase != GamePhase::InProgress {
            return KeyOutcome::Ignored;
        }
        match key {
            GuessKey::Back => {
                if self.current.pop().is_some() {
                    self.sync_current_row();
                    KeyOutcome::Edited
                } else {
                    KeyOutcome::Ignored
                }
            }
            GuessKey::Letter(c) => {
                let c = c.to_ascii_uppercase();
                if !c.is_ascii_uppercase() || self.current.len() >= WORD_LENGTH {
                    return KeyOutcome::Ignored;
                }
                self.current.push(c);
                self.sync_current_row();
                KeyOutcome::Edited
            }
            GuessKey::Enter => {
                if self.current.len() == WORD_LENGTH {
                    KeyOutcome::RowScored(self.submit())
                } else {
                    KeyOutcome::Ignored
                }
            }
        }
    }

    /// Mirror the in-progress guess into the current grid row.
    fn sync_current_row(&mut self) {
        let bytes = self.current.as_bytes();
        for col in 0..WORD_LENGTH {
            self.grid[self.row][col] = match bytes.get(col) {
                Some(&b) => TileState::Filled(b as char),
                None => TileState::Empty,
            };
        }
    }

    /// Score the completed current row and settle the round if it ended.
    /// Returns the scored row's index.
    fn submit(&mut self) -> usize {
        let scored_row = self.row;
        let scores = classify(&self.current, &self.target);
        for (col, c) in self.current.chars().enumerate() {
            self.grid[scored_row][col] = TileState::Scored(c, scores[col]);
            self.keys.merge(c, scores[col]);
        }

        if self.current == self.target {
            self.phase = GamePhase::Won;
            self.message = Some("\u{1F389} You won! \u{1F389}".to_string());
        } else if self.row == MAX_GUESSES - 1 {
            self.phase = GamePhase::Lost;
            self.message = Some(format!("Game Over! Word was: {}", self.target));
        } else {
            self.row += 1;
            self.current.clear();
        }
        scored_row
    }

    /// Serializable snapshot for the page. The target word never appears
    /// here; a lost round reveals it through the banner message only.
    pub fn view(&self) -> GameView {
        let rows = self
            .grid
            .iter()
            .map(|row| {
                row.iter()
                    .map(|tile| match *tile {
                        TileState::Empty => TileView {
                            letter: None,
                            state: "empty",
                        },
                        TileState::Filled(c) => TileView {
                            letter: Some(c),
                            state: "filled",
                        },
                        TileState::Scored(c, s) => TileView {
                            letter: Some(c),
                            state: score_name(s),
                        },
                    })
                    .collect()
            })
            .collect();

        let keys = self
            .keys
            .iter()
            .map(|(letter, score)| KeyView { letter, score })
            .collect();

        GameView {
            phase: self.phase,
            rows,
            keys,
            message: self.message.clone(),
        }
    }
}

fn score_name(score: LetterScore) -> &'static str {
    match score {
        LetterScore::Absent => "absent",
        LetterScore::Present => "present",
        LetterScore::Correct => "correct",
    }
}

/// JSON shape of the whole game, rendered by the page as tiles and keys.
#[derive(Debug, Serialize)]
pub struct GameView {
    pub phase: GamePhase,
    pub rows: Vec<Vec<TileView>>,
    pub keys: Vec<KeyView>,
    pub message: Option<String>,
}

/// One grid cell: its letter and the CSS state the page applies.
#[derive(Debug, Serialize)]
pub struct TileView {
    pub letter: Option<char>,
    pub state: &'static str,
}

/// One on-screen keyboard key with a known score.
#[derive(Debug, Serialize)]
pub struct KeyView {
    pub letter: char,
    pub score: LetterScore,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_game(words: &[&str]) -> (WordGame, Rng) {
        let mut game = WordGame::new(WordList::new(words.to_vec()).unwrap());
        let mut rng = Rng::new(42);
        game.start(&mut rng);
        (game, rng)
    }

    fn type_word(game: &mut WordGame, word: &str) -> KeyOutcome {
        for c in word.chars() {
            game.handle_key(GuessKey::Letter(c));
        }
        game.handle_key(GuessKey::Enter)
    }

    #[test]
    fn keys_are_ignored_before_the_first_round() {
        let mut game = WordGame::new(WordList::new(["HELLO"]).unwrap());
        assert_eq!(game.phase(), GamePhase::Idle);
        assert_eq!(game.handle_key(GuessKey::Letter('A')), KeyOutcome::Ignored);
        assert_eq!(game.current_guess(), "");
    }

    #[test]
    fn typing_fills_the_row_and_stops_at_five() {
        let (mut game, _) = seeded_game(&["HELLO"]);

        for c in "DREAM".chars() {
            assert_eq!(game.handle_key(GuessKey::Letter(c)), KeyOutcome::Edited);
        }
        assert_eq!(game.current_guess(), "DREAM");

        // a sixth letter bounces off the full row
        assert_eq!(game.handle_key(GuessKey::Letter('S')), KeyOutcome::Ignored);
        assert_eq!(game.current_guess(), "DREAM");
        assert_eq!(game.tile(0, 4), TileState::Filled('M'));
    }

    #[test]
    fn back_removes_letters_and_bottoms_out() {
        let (mut game, _) = seeded_game(&["HELLO"]);

        game.handle_key(GuessKey::Letter('A'));
        game.handle_key(GuessKey::Letter('B'));
        assert_eq!(game.handle_key(GuessKey::Back), KeyOutcome::Edited);
        assert_eq!(game.current_guess(), "A");
        assert_eq!(game.tile(0, 1), TileState::Empty);

        game.handle_key(GuessKey::Back);
        assert_eq!(game.handle_key(GuessKey::Back), KeyOutcome::Ignored);
    }

    #[test]
    fn enter_needs_a_complete_row() {
        let (mut game, _) = seeded_game(&["HELLO"]);

        game.handle_key(GuessKey::Letter('H'));
        game.handle_key(GuessKey::Letter('I'));
        assert_eq!(game.handle_key(GuessKey::Enter), KeyOutcome::Ignored);
        assert_eq!(game.row(), 0);
    }

    #[test]
    fn guessing_the_target_wins() {
        let (mut game, _) = seeded_game(&["HELLO"]);

        assert_eq!(type_word(&mut game, "HELLO"), KeyOutcome::RowScored(0));
        assert_eq!(game.phase(), GamePhase::Won);
        assert_eq!(game.message(), Some("\u{1F389} You won! \u{1F389}"));
        assert_eq!(
            game.tile(0, 0),
            TileState::Scored('H', LetterScore::Correct)
        );
    }

    #[test]
    fn six_misses_lose_and_reveal_the_target() {
        let (mut game, _) = seeded_game(&["HELLO"]);

        for row in 0..MAX_GUESSES {
            assert_eq!(game.phase(), GamePhase::InProgress);
            assert_eq!(type_word(&mut game, "DREAM"), KeyOutcome::RowScored(row));
        }

        assert_eq!(game.phase(), GamePhase::Lost);
        assert_eq!(game.message(), Some("Game Over! Word was: HELLO"));
    }

    #[test]
    fn finished_rounds_ignore_every_key() {
        let (mut game, _) = seeded_game(&["HELLO"]);
        type_word(&mut game, "HELLO");

        assert_eq!(game.handle_key(GuessKey::Letter('A')), KeyOutcome::Ignored);
        assert_eq!(game.handle_key(GuessKey::Back), KeyOutcome::Ignored);
        assert_eq!(game.handle_key(GuessKey::Enter), KeyOutcome::Ignored);
        assert_eq!(game.phase(), GamePhase::Won);
    }

    #[test]
    fn start_resets_everything_every_time() {
        let (mut game, mut rng) = seeded_game(&["HELLO"]);
        type_word(&mut game, "HELLO");
        assert_eq!(game.phase(), GamePhase::Won);

        for _ in 0..2 {
            game.start(&mut rng);
            assert_eq!(game.phase(), GamePhase::InProgress);
            assert_eq!(game.row(), 0);
            assert_eq!(game.current_guess(), "");
            assert_eq!(game.message(), None);
            assert_eq!(game.key_score('H'), None);
            for row in 0..MAX_GUESSES {
                for col in 0..WORD_LENGTH {
                    assert_eq!(game.tile(row, col), TileState::Empty);
                }
            }
        }
    }

    #[test]
    fn keyboard_tracks_upgrades_across_rows() {
        let (mut game, _) = seeded_game(&["HELLO"]);

        // L misplaced in row one, then correct in row two
        type_word(&mut game, "LUNAR");
        assert_eq!(game.key_score('L'), Some(LetterScore::Present));
        assert_eq!(game.key_score('U'), Some(LetterScore::Absent));

        type_word(&mut game, "HELLO");
        assert_eq!(game.key_score('L'), Some(LetterScore::Correct));
        assert_eq!(game.key_score('U'), Some(LetterScore::Absent));
    }

    #[test]
    fn rows_advance_and_report_their_index() {
        let (mut game, _) = seeded_game(&["HELLO"]);

        assert_eq!(type_word(&mut game, "DREAM"), KeyOutcome::RowScored(0));
        assert_eq!(game.row(), 1);
        assert_eq!(type_word(&mut game, "FLAME"), KeyOutcome::RowScored(1));
        assert_eq!(game.row(), 2);
    }

    #[test]
    fn lowercase_letters_are_uppercased() {
        let (mut game, _) = seeded_game(&["HELLO"]);
        game.handle_key(GuessKey::Letter('h'));
        assert_eq!(game.current_guess(), "H");
    }

    #[test]
    fn key_codes_map_to_game_keys() {
        assert_eq!(GuessKey::from_key_code(65), Some(GuessKey::Letter('A')));
        assert_eq!(GuessKey::from_key_code(90), Some(GuessKey::Letter('Z')));
        assert_eq!(GuessKey::from_key_code(13), Some(GuessKey::Enter));
        assert_eq!(GuessKey::from_key_code(8), Some(GuessKey::Back));
        assert_eq!(GuessKey::from_key_code(27), None);
        assert_eq!(GuessKey::from_key_code(32), None);
    }

    #[test]
    fn view_never_leaks_the_target_mid_round() {
        let (game, _) = seeded_game(&["HELLO"]);
        let json = serde_json::to_string(&game.view()).unwrap();
        assert!(!json.contains("HELLO"));
        assert!(json.contains("\"phase\":\"inprogress\""));
    }

    #[test]
    fn view_shows_scored_tiles() {
        let (mut game, _) = seeded_game(&["HELLO"]);
        type_word(&mut game, "LEMON");

        let view = game.view();
        assert_eq!(view.rows.len(), MAX_GUESSES);
        assert_eq!(view.rows[0][1].letter, Some('E'));
        assert_eq!(view.rows[0][1].state, "correct");
        assert_eq!(view.rows[0][0].state, "present");
        assert!(view.keys.iter().any(|k| k.letter == 'E'));
    }
}
