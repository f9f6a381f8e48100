#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod input;
pub mod narrator;
pub mod navigate;
pub mod session;
pub mod sink;

pub use kidplay_core::Clock;

pub use config::{FeedbackTiming, GameConfig, NarrationSettings};
pub use error::{EngineError, NarrationError, SinkError};
pub use input::{AttemptSubmitted, DragDropAdapter, DragRelease, Point, Rect, TapSelector};
pub use narrator::{FeedbackNarrator, NarrationEngine};
pub use navigate::{CompletionNavigator, CompletionSummary, NavParams, Navigator};
pub use session::{
    FixedRounds, GameLoopService, MatchTable, RoundEngine, RoundGenerator, SessionFinalizer,
    SessionProgress, Submission, SubmitReport,
};
pub use sink::{GameResultRecord, HttpResultSink, InMemoryResultSink, ResultSink};
