/// Elevation map: per-stage lookup of which floors the next stage offers.
///
/// Rows are indexed by stage, so the key range is the contiguous
/// `0..=max_stage` by construction. Row 0 belongs to the starting stage
/// and is never consulted for an elevation choice (the start is not
/// reached via a transition).

/// (ground floor, second floor, third floor) reachability.
pub type FloorFlags = [bool; 3];

#[derive(Clone, Debug)]
pub struct ElevationMap {
    rows: Vec<FloorFlags>,
}

impl ElevationMap {
    pub fn new(rows: Vec<FloorFlags>) -> Self {
        assert!(!rows.is_empty(), "elevation map needs at least the starting stage");
        ElevationMap { rows }
    }

    pub fn max_stage(&self) -> usize {
        self.rows.len() - 1
    }

    /// Floor flags for a valid stage. Stages are produced internally and
    /// clamped before lookup, so an out-of-range index is a defect.
    pub fn reachable(&self, stage: usize) -> FloorFlags {
        self.rows[stage]
    }

    /// Clamp an arbitrary candidate into the map's key range. Guards the
    /// advance path against stepping past the final stage.
    pub fn clamp(&self, candidate: i64) -> usize {
        candidate.clamp(0, self.max_stage() as i64) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map() -> ElevationMap {
        ElevationMap::new(vec![
            [true, false, false],
            [true, true, false],
            [true, false, true],
        ])
    }

    #[test]
    fn clamp_is_identity_in_range() {
        let m = map();
        for s in 0..=m.max_stage() {
            assert_eq!(m.clamp(s as i64), s);
        }
    }

    #[test]
    fn clamp_pins_out_of_range() {
        let m = map();
        assert_eq!(m.clamp(3), 2);
        assert_eq!(m.clamp(100), 2);
        assert_eq!(m.clamp(-1), 0);
        assert_eq!(m.clamp(i64::MIN), 0);
    }

    #[test]
    fn reachable_returns_row() {
        let m = map();
        assert_eq!(m.reachable(1), [true, true, false]);
        assert_eq!(m.reachable(2), [true, false, true]);
    }
}
