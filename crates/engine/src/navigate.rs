//! Completion hand-off: next game in the chain, or back to the menu.

use std::sync::Arc;

use serde::Serialize;

use kidplay_core::model::{ChildProfile, GameEntry, ScreenId, SessionLaunch};

/// Summary shown on the menu after the last game of a chain finishes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionSummary {
    pub score: u32,
    pub max_score: u32,
    pub message: String,
}

/// Passthrough params handed to the hosting shell on every
/// replace-navigation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavParams {
    pub child: ChildProfile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_sequence: Option<Vec<GameEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_game_index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<CompletionSummary>,
}

/// Hosting shell's navigation surface. `replace` swaps the current screen
/// so back-navigation cannot re-enter a finished session.
pub trait Navigator: Send + Sync {
    fn replace(&self, screen: &ScreenId, params: NavParams);
}

/// Decides the control-flow destination once a session finalizes: the next
/// game of a chained sequence, or the originating menu with a summary.
///
/// Holds the launch context captured at session entry; the sequence threads
/// through unchanged except for the advancing index.
pub struct CompletionNavigator {
    navigator: Arc<dyn Navigator>,
    launch: SessionLaunch,
    menu_screen: ScreenId,
    on_reset: Option<Box<dyn Fn() + Send + Sync>>,
    completed: bool,
}

impl CompletionNavigator {
    #[must_use]
    pub fn new(navigator: Arc<dyn Navigator>, launch: SessionLaunch, menu_screen: ScreenId) -> Self {
        Self {
            navigator,
            launch,
            menu_screen,
            on_reset: None,
            completed: false,
        }
    }

    /// Hook "play again" up to a session restart without leaving the
    /// chain position.
    #[must_use]
    pub fn with_reset(mut self, reset: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_reset = Some(Box::new(reset));
        self
    }

    /// Invoke the reset hook, if the host registered one.
    pub fn replay(&self) {
        if let Some(reset) = &self.on_reset {
            reset();
        }
    }

    /// Hand control to the next destination. Called exactly once, strictly
    /// after the finalization attempt; a second call is a logged no-op.
    pub fn complete(&mut self, summary: CompletionSummary) {
        if self.completed {
            log::warn!("completion navigation requested twice; ignoring");
            return;
        }
        self.completed = true;

        if let Some(next) = self.launch.sequence.as_ref().and_then(|s| s.advanced()) {
            let screen = next.current().screen().clone();
            self.navigator.replace(
                &screen,
                NavParams {
                    child: self.launch.child.clone(),
                    game_sequence: Some(next.games().to_vec()),
                    current_game_index: Some(next.current_index()),
                    category_title: self.launch.category_title.clone(),
                    summary: None,
                },
            );
            return;
        }

        self.navigator.replace(
            &self.menu_screen,
            NavParams {
                child: self.launch.child.clone(),
                game_sequence: None,
                current_game_index: None,
                category_title: self.launch.category_title.clone(),
                summary: Some(summary),
            },
        );
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
