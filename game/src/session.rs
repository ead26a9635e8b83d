use std::str::FromStr;

use rand::{rngs::ThreadRng, thread_rng, Rng};
use thiserror::Error;
use types::{Difficulty, Mode, PlayerName, Score, ScoreSubmission, ValidationError};

use crate::professor::{Professor, Roster};

/// A rating guess further off than this ends an endless guess game.
pub const GUESS_TOLERANCE: f64 = 0.5;
pub const BEST_OF_QUESTIONS: u32 = 10;
pub const MIN_GUESS: f64 = 1.0;
pub const MAX_GUESS: f64 = 5.0;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum GameError {
    #[error("{0} does not take this kind of answer")]
    WrongMode(Mode),

    #[error("The game is over")]
    Finished,

    #[error("Guesses must be between 1 and 5, got {0}")]
    GuessOutOfRange(f64),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Choice {
    Higher,
    Lower,
}

impl FromStr for Choice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "h" | "higher" => Ok(Choice::Higher),
            "l" | "lower" => Ok(Choice::Lower),
            other => Err(format!("expected higher or lower, got {other:?}")),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RoundOutcome {
    pub points: i64,
    /// Rating of the professor the round was about.
    pub actual: f64,
    pub game_over: bool,
}

// Math.round semantics: halves go up, also for negative values
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Points for a rating guess: ten for an exact hit, one fewer per tenth of a
/// star off, never negative.
pub fn guess_points(guess: f64, actual: f64) -> i64 {
    round_half_up((1.0 - (guess - actual).abs()) * 10.0).max(0)
}

/// Whether `choice` correctly says how `left` compares to `right`. Equal
/// ratings make both answers wrong.
pub fn is_correct_choice(choice: Choice, left: f64, right: f64) -> bool {
    match choice {
        Choice::Higher => left > right,
        Choice::Lower => left < right,
    }
}

pub struct GameSession<R: Rng = ThreadRng> {
    roster: Roster,
    rng: R,
    mode: Mode,
    difficulty: Difficulty,
    score: i64,
    questions_answered: u32,
    over: bool,
    left: Professor,
    right: Professor,
}

impl GameSession<ThreadRng> {
    pub fn new(roster: Roster, mode: Mode, difficulty: Difficulty) -> Self {
        Self::with_rng(roster, mode, difficulty, thread_rng())
    }
}

impl<R: Rng> GameSession<R> {
    pub fn with_rng(roster: Roster, mode: Mode, difficulty: Difficulty, mut rng: R) -> Self {
        let left = roster.draw(&mut rng).clone();
        let right = roster.draw(&mut rng).clone();
        Self {
            roster,
            rng,
            mode,
            difficulty,
            score: 0,
            questions_answered: 0,
            over: false,
            left,
            right,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn questions_answered(&self) -> u32 {
        self.questions_answered
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    /// The professor being guessed, or the left side of a higher/lower pair.
    pub fn left(&self) -> &Professor {
        &self.left
    }

    pub fn right(&self) -> &Professor {
        &self.right
    }

    pub fn guess_rating(&mut self, guess: f64) -> Result<RoundOutcome, GameError> {
        if self.over {
            return Err(GameError::Finished);
        }
        if !(MIN_GUESS..=MAX_GUESS).contains(&guess) {
            return Err(GameError::GuessOutOfRange(guess));
        }

        let actual = self.left.rating;
        let outcome = match self.mode {
            Mode::Guess => {
                if (guess - actual).abs() > GUESS_TOLERANCE {
                    self.over = true;
                    RoundOutcome {
                        points: 0,
                        actual,
                        game_over: true,
                    }
                } else {
                    let points = guess_points(guess, actual);
                    self.score += points;
                    self.left = self.roster.draw(&mut self.rng).clone();
                    RoundOutcome {
                        points,
                        actual,
                        game_over: false,
                    }
                }
            }
            Mode::Guess10 => {
                let points = guess_points(guess, actual);
                self.score += points;
                self.questions_answered += 1;
                if self.questions_answered >= BEST_OF_QUESTIONS {
                    self.over = true;
                } else {
                    self.left = self.roster.draw(&mut self.rng).clone();
                }
                RoundOutcome {
                    points,
                    actual,
                    game_over: self.over,
                }
            }
            Mode::HigherLower => return Err(GameError::WrongMode(self.mode)),
        };

        log::debug!("Guessed {guess} for {actual}: {outcome:?}");
        Ok(outcome)
    }

    pub fn choose(&mut self, choice: Choice) -> Result<RoundOutcome, GameError> {
        if self.mode != Mode::HigherLower {
            return Err(GameError::WrongMode(self.mode));
        }
        if self.over {
            return Err(GameError::Finished);
        }

        let actual = self.left.rating;
        let outcome = if is_correct_choice(choice, actual, self.right.rating) {
            self.score += 1;
            self.left = self.roster.draw(&mut self.rng).clone();
            self.right = self.roster.draw(&mut self.rng).clone();
            RoundOutcome {
                points: 1,
                actual,
                game_over: false,
            }
        } else {
            self.over = true;
            RoundOutcome {
                points: 0,
                actual,
                game_over: true,
            }
        };

        log::debug!("Chose {choice:?} for {actual} vs {}: {outcome:?}", self.right.rating);
        Ok(outcome)
    }

    /// Starts a fresh game in the same mode and difficulty.
    pub fn restart(&mut self) {
        self.score = 0;
        self.questions_answered = 0;
        self.over = false;
        self.left = self.roster.draw(&mut self.rng).clone();
        self.right = self.roster.draw(&mut self.rng).clone();
    }

    pub fn final_submission(&self, player: &PlayerName) -> Result<ScoreSubmission, ValidationError> {
        Ok(ScoreSubmission {
            player_name: player.clone(),
            mode: self.mode,
            difficulty: self.difficulty,
            score: Score::new(self.score)?,
        })
    }
}
