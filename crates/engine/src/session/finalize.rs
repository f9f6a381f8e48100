//! Session finalization: build the result record and submit it best-effort.

use std::sync::Arc;

use kidplay_core::Clock;
use kidplay_core::model::{ChildProfile, RateSmoothing, SessionMetrics};

use crate::sink::{GameResultRecord, ResultSink};

/// Computes the aggregate result once the engine reaches its terminal
/// round and submits it to the result sink.
///
/// Submission is best-effort: a single request, failures caught and
/// logged, never surfaced to the child-facing flow.
#[derive(Clone)]
pub struct SessionFinalizer {
    sink: Arc<dyn ResultSink>,
    clock: Clock,
}

impl SessionFinalizer {
    #[must_use]
    pub fn new(sink: Arc<dyn ResultSink>, clock: Clock) -> Self {
        Self { sink, clock }
    }

    /// Build the result record for a completed session.
    ///
    /// Returns `None` when the child has no backend identity, in which
    /// case the submission step is skipped entirely.
    #[must_use]
    pub fn build_record(
        &self,
        metrics: &SessionMetrics,
        child: &ChildProfile,
        game_type: &str,
        smoothing: RateSmoothing,
        details: Option<serde_json::Value>,
    ) -> Option<GameResultRecord> {
        let child_id = child.id()?;

        Some(GameResultRecord {
            child_id: child_id.value(),
            game_type: game_type.to_string(),
            level: child.level(),
            score: metrics.score(),
            max_score: metrics.max_score(),
            duration_seconds: metrics.duration_seconds(self.clock.now()),
            wrong_count: metrics.wrong_count(),
            success_rate: metrics.success_rate(smoothing),
            completed: true,
            details,
        })
    }

    /// Build and submit the result record, best-effort.
    ///
    /// The built record is returned either way so callers can observe
    /// what was (or would have been) reported.
    pub async fn finalize(
        &self,
        metrics: &SessionMetrics,
        child: &ChildProfile,
        game_type: &str,
        smoothing: RateSmoothing,
        details: Option<serde_json::Value>,
    ) -> Option<GameResultRecord> {
        let Some(record) = self.build_record(metrics, child, game_type, smoothing, details) else {
            log::debug!("no child identity; skipping result submission");
            return None;
        };

        if let Err(err) = self.sink.send_game_result(&record).await {
            log::warn!("result submission failed for {game_type}: {err}");
        }
        Some(record)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
