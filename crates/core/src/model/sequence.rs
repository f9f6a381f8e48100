use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::child::ChildProfile;
use crate::model::ids::ScreenId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SequenceError {
    #[error("game sequence is empty")]
    Empty,

    #[error("sequence index {index} out of range for {len} games")]
    IndexOutOfRange { index: usize, len: usize },
}

//
// ─── SEQUENCE ──────────────────────────────────────────────────────────────────
//

/// One entry in a "Play All" queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEntry {
    screen: ScreenId,
    game_type: Option<String>,
}

impl GameEntry {
    #[must_use]
    pub fn new(screen: ScreenId) -> Self {
        Self {
            screen,
            game_type: None,
        }
    }

    #[must_use]
    pub fn with_game_type(mut self, game_type: impl Into<String>) -> Self {
        self.game_type = Some(game_type.into());
        self
    }

    #[must_use]
    pub fn screen(&self) -> &ScreenId {
        &self.screen
    }

    #[must_use]
    pub fn game_type(&self) -> Option<&str> {
        self.game_type.as_deref()
    }
}

/// Ordered queue of mini-games launched together, owned by the launching
/// menu and threaded through each game as opaque passthrough params.
///
/// The round engine never mutates it; only the completion navigator
/// reads and advances it, via `advanced()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSequenceContext {
    games: Vec<GameEntry>,
    current_index: usize,
}

impl GameSequenceContext {
    /// Build a context positioned at `current_index`.
    ///
    /// # Errors
    ///
    /// Returns `SequenceError::Empty` for an empty queue and
    /// `SequenceError::IndexOutOfRange` when the index does not name a game.
    pub fn new(games: Vec<GameEntry>, current_index: usize) -> Result<Self, SequenceError> {
        if games.is_empty() {
            return Err(SequenceError::Empty);
        }
        if current_index >= games.len() {
            return Err(SequenceError::IndexOutOfRange {
                index: current_index,
                len: games.len(),
            });
        }
        Ok(Self {
            games,
            current_index,
        })
    }

    #[must_use]
    pub fn games(&self) -> &[GameEntry] {
        &self.games
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn current(&self) -> &GameEntry {
        &self.games[self.current_index]
    }

    /// The entry after the current one, if the queue continues.
    #[must_use]
    pub fn next_entry(&self) -> Option<&GameEntry> {
        self.games.get(self.current_index + 1)
    }

    /// A copy of this context advanced by one game, or `None` when the
    /// current game is the last in the queue.
    #[must_use]
    pub fn advanced(&self) -> Option<Self> {
        if self.current_index + 1 < self.games.len() {
            Some(Self {
                games: self.games.clone(),
                current_index: self.current_index + 1,
            })
        } else {
            None
        }
    }
}

//
// ─── SESSION LAUNCH ────────────────────────────────────────────────────────────
//

/// Entry contract for one mini-game session: the child, the optional
/// "Play All" queue, and the category title threaded back to the menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionLaunch {
    pub child: ChildProfile,
    pub sequence: Option<GameSequenceContext>,
    pub category_title: Option<String>,
}

impl SessionLaunch {
    /// Launch outside any sequence (a single game tapped from the menu).
    #[must_use]
    pub fn solo(child: ChildProfile) -> Self {
        Self {
            child,
            sequence: None,
            category_title: None,
        }
    }

    #[must_use]
    pub fn with_sequence(mut self, sequence: GameSequenceContext) -> Self {
        self.sequence = Some(sequence);
        self
    }

    #[must_use]
    pub fn with_category_title(mut self, title: impl Into<String>) -> Self {
        self.category_title = Some(title.into());
        self
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(n: usize) -> Vec<GameEntry> {
        (0..n)
            .map(|i| GameEntry::new(ScreenId::new(format!("Game{i}"))))
            .collect()
    }

    #[test]
    fn empty_sequence_is_rejected() {
        assert_eq!(
            GameSequenceContext::new(Vec::new(), 0).unwrap_err(),
            SequenceError::Empty
        );
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let err = GameSequenceContext::new(entries(2), 2).unwrap_err();
        assert_eq!(err, SequenceError::IndexOutOfRange { index: 2, len: 2 });
    }

    #[test]
    fn advanced_steps_through_the_queue() {
        let ctx = GameSequenceContext::new(entries(3), 0).unwrap();
        let next = ctx.advanced().unwrap();
        assert_eq!(next.current_index(), 1);
        assert_eq!(next.games(), ctx.games());

        let last = next.advanced().unwrap();
        assert_eq!(last.current_index(), 2);
        assert!(last.advanced().is_none());
    }

    #[test]
    fn next_entry_matches_advanced_position() {
        let ctx = GameSequenceContext::new(entries(2), 0).unwrap();
        assert_eq!(
            ctx.next_entry().unwrap().screen().as_str(),
            ctx.advanced().unwrap().current().screen().as_str()
        );
    }
}
