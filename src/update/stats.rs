/// Counters describing which branch every update took.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateStats {
    /// The margin was already satisfied.
    pub passive: u64,
    /// The weights were moved.
    pub aggressive: u64,
    /// The difference vector had a zero norm, nothing was moved.
    pub degenerate: u64,
    /// The step size hit the aggressiveness bound.
    pub clipped: u64,
    /// The score gap exceeded the margin requirement, nothing was moved.
    pub skipped: u64,
}

impl UpdateStats {
    /// The total amount of updates counted.
    pub fn total(&self) -> u64 {
        self.passive + self.aggressive + self.degenerate + self.skipped
    }
}
