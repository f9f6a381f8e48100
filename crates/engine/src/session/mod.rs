mod engine;
mod finalize;
mod generate;
mod progress;
mod workflow;

// Public API of the session subsystem.
pub use engine::{PendingTransition, Resolution, RoundEngine, Submission};
pub use finalize::SessionFinalizer;
pub use generate::{FixedRounds, MatchTable, RoundGenerator, sample_options};
pub use progress::SessionProgress;
pub use workflow::{GameLoopService, SubmitReport};
