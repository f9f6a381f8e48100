//! Input adapters normalizing tap-selection and drag-and-drop release
//! events into a single attempt signal.

use kidplay_core::model::{CandidateId, ZoneId};

//
// ─── GEOMETRY ──────────────────────────────────────────────────────────────────
//

/// Screen coordinate of a drag release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounding box of a drop zone, as measured by the host layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[must_use]
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }
}

//
// ─── NORMALIZED SIGNAL ─────────────────────────────────────────────────────────
//

/// The single signal both input strategies reduce to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttemptSubmitted {
    pub candidate: CandidateId,
}

//
// ─── TAP SELECTION ─────────────────────────────────────────────────────────────
//

/// Discrete-selection strategy: every candidate is a single-shot control.
///
/// A successful press latches the selector off so rapid double taps cannot
/// submit twice; the host re-enables it exactly when the engine leaves its
/// feedback phase.
#[derive(Debug, Clone)]
pub struct TapSelector {
    enabled: bool,
}

impl Default for TapSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl TapSelector {
    #[must_use]
    pub fn new() -> Self {
        Self { enabled: true }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Register a tap on a candidate control.
    ///
    /// Returns `None` while disabled; otherwise emits the signal and
    /// latches the selector off until re-enabled.
    pub fn press(&mut self, candidate: CandidateId) -> Option<AttemptSubmitted> {
        if !self.enabled {
            return None;
        }
        self.enabled = false;
        Some(AttemptSubmitted { candidate })
    }
}

//
// ─── DRAG AND DROP ─────────────────────────────────────────────────────────────
//

/// Outcome of releasing a dragged token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragRelease {
    /// The token landed in a zone; submit it as the answer.
    Submitted { candidate: CandidateId, zone: ZoneId },
    /// No zone contains the release point: no attempt is registered and
    /// the token animates back to its origin.
    ReturnedToOrigin,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct DropZone {
    id: ZoneId,
    bounds: Rect,
}

/// Drag-and-drop strategy: a candidate is a draggable token whose release
/// coordinate is hit-tested against pre-measured zone bounding boxes.
///
/// Zones must register their measured layout before the first drag;
/// hit-testing against an unregistered zone always misses, so a host that
/// skips `register_zone` after layout sees every release return home.
#[derive(Debug, Clone, Default)]
pub struct DragDropAdapter {
    zones: Vec<DropZone>,
    disabled: bool,
}

impl DragDropAdapter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or re-record, after a layout pass) a zone's bounding box.
    pub fn register_zone(&mut self, id: ZoneId, bounds: Rect) {
        if let Some(zone) = self.zones.iter_mut().find(|z| z.id == id) {
            zone.bounds = bounds;
        } else {
            self.zones.push(DropZone { id, bounds });
        }
    }

    /// Drop all registered zones, e.g. when a round swaps its target zones.
    pub fn clear_zones(&mut self) {
        self.zones.clear();
    }

    #[must_use]
    pub fn zone_count(&self) -> usize {
        self.zones.len()
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Hit-test a released token against the registered zones.
    ///
    /// While disabled (feedback display) every release returns the token
    /// home without registering an attempt.
    pub fn release(&mut self, token: CandidateId, at: Point) -> DragRelease {
        if self.disabled {
            return DragRelease::ReturnedToOrigin;
        }
        match self.zones.iter().find(|z| z.bounds.contains(at)) {
            Some(zone) => {
                self.disabled = true;
                DragRelease::Submitted {
                    candidate: token,
                    zone: zone.id,
                }
            }
            None => DragRelease::ReturnedToOrigin,
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tap_is_single_shot_until_reenabled() {
        let mut taps = TapSelector::new();
        let first = taps.press(CandidateId::new(1));
        assert_eq!(
            first,
            Some(AttemptSubmitted {
                candidate: CandidateId::new(1)
            })
        );

        assert_eq!(taps.press(CandidateId::new(2)), None);
        taps.set_enabled(true);
        assert!(taps.press(CandidateId::new(2)).is_some());
    }

    #[test]
    fn release_inside_zone_submits_the_token() {
        let mut drag = DragDropAdapter::new();
        drag.register_zone(ZoneId::new(1), Rect::new(0.0, 0.0, 100.0, 100.0));

        let release = drag.release(CandidateId::new(7), Point::new(50.0, 50.0));
        assert_eq!(
            release,
            DragRelease::Submitted {
                candidate: CandidateId::new(7),
                zone: ZoneId::new(1),
            }
        );
    }

    #[test]
    fn release_outside_every_zone_returns_home() {
        let mut drag = DragDropAdapter::new();
        drag.register_zone(ZoneId::new(1), Rect::new(0.0, 0.0, 100.0, 100.0));

        let release = drag.release(CandidateId::new(7), Point::new(200.0, 50.0));
        assert_eq!(release, DragRelease::ReturnedToOrigin);
    }

    #[test]
    fn unregistered_zones_never_hit() {
        let mut drag = DragDropAdapter::new();
        let release = drag.release(CandidateId::new(7), Point::new(50.0, 50.0));
        assert_eq!(release, DragRelease::ReturnedToOrigin);
    }

    #[test]
    fn reregistering_a_zone_replaces_its_geometry() {
        let mut drag = DragDropAdapter::new();
        drag.register_zone(ZoneId::new(1), Rect::new(0.0, 0.0, 10.0, 10.0));
        drag.register_zone(ZoneId::new(1), Rect::new(100.0, 100.0, 10.0, 10.0));
        assert_eq!(drag.zone_count(), 1);

        assert_eq!(
            drag.release(CandidateId::new(7), Point::new(5.0, 5.0)),
            DragRelease::ReturnedToOrigin
        );
        assert!(matches!(
            drag.release(CandidateId::new(7), Point::new(105.0, 105.0)),
            DragRelease::Submitted { .. }
        ));
    }

    #[test]
    fn disabled_adapter_returns_every_release_home() {
        let mut drag = DragDropAdapter::new();
        drag.register_zone(ZoneId::new(1), Rect::new(0.0, 0.0, 100.0, 100.0));
        drag.set_enabled(false);

        assert_eq!(
            drag.release(CandidateId::new(7), Point::new(50.0, 50.0)),
            DragRelease::ReturnedToOrigin
        );
    }

    #[test]
    fn successful_drop_latches_until_reenabled() {
        let mut drag = DragDropAdapter::new();
        drag.register_zone(ZoneId::new(1), Rect::new(0.0, 0.0, 100.0, 100.0));

        assert!(matches!(
            drag.release(CandidateId::new(7), Point::new(50.0, 50.0)),
            DragRelease::Submitted { .. }
        ));
        assert_eq!(
            drag.release(CandidateId::new(8), Point::new(50.0, 50.0)),
            DragRelease::ReturnedToOrigin
        );

        drag.set_enabled(true);
        assert!(matches!(
            drag.release(CandidateId::new(8), Point::new(50.0, 50.0)),
            DragRelease::Submitted { .. }
        ));
    }

    #[test]
    fn rect_contains_is_inclusive_of_edges() {
        let rect = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert!(rect.contains(Point::new(10.0, 10.0)));
        assert!(rect.contains(Point::new(30.0, 30.0)));
        assert!(!rect.contains(Point::new(30.1, 30.0)));
    }
}
