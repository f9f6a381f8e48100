mod attempt;
mod candidate;
mod child;
mod ids;
mod metrics;
mod round;
mod sequence;

pub use attempt::{Attempt, AttemptOutcome};
pub use candidate::Candidate;
pub use child::ChildProfile;
pub use ids::{CandidateId, ChildId, ParseIdError, ScreenId, ZoneId};
pub use metrics::{RateSmoothing, ScorePolicy, SessionMetrics};
pub use round::{AnswerRule, Round, RoundError, RoundSpec};
pub use sequence::{GameEntry, GameSequenceContext, SequenceError, SessionLaunch};
