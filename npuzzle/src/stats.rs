use std::ops::AddAssign;

/// Identifies one of two searches run by the solver.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Side {
    /// Search from the board given to the solver.
    Primary,
    /// Search from the twin of that board.
    Twin
}

/// Search statistic collector.
/// It collects data during A* search.
pub trait SearchStatsCollector {
    /// Called for each node removed from the frontier and expanded (or found to be the goal).
    #[inline(always)] fn expanded(&mut self, _side: Side) {}
    /// Called for each node inserted into the frontier.
    #[inline(always)] fn generated(&mut self, _side: Side) {}
}

/// Search statistic collector that ignore all events.
impl SearchStatsCollector for () {}

#[derive(Default, Copy, Clone, PartialEq, Eq, Debug)]
pub struct SearchAllStats {
    pub expanded: u64,
    pub generated: u64,
    /// Nodes expanded by the twin search.
    pub twin_expanded: u64
}

impl SearchAllStats {
    pub fn visits(&self) -> u64 { self.expanded + self.generated }
}

impl AddAssign for SearchAllStats {
    fn add_assign(&mut self, rhs: Self) {
        self.expanded += rhs.expanded;
        self.generated += rhs.generated;
        self.twin_expanded += rhs.twin_expanded;
    }
}

impl SearchStatsCollector for SearchAllStats {
    #[inline(always)] fn expanded(&mut self, side: Side) {
        self.expanded += 1;
        if side == Side::Twin { self.twin_expanded += 1; }
    }
    #[inline(always)] fn generated(&mut self, _side: Side) { self.generated += 1; }
}
