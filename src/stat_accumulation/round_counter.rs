/// Number of rounds elapsed so far, used as the ADR denominator.
///
/// Starts at the configured initial value and only moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundCounter(u32);

impl RoundCounter {
    /// Creates a counter at `initial`, clamped to at least 1 so it can always divide.
    pub fn new(initial: u32) -> Self {
        RoundCounter(initial.max(1))
    }

    pub fn advance(&mut self) {
        self.0 = self.0.saturating_add(1);
    }

    pub fn get(self) -> u32 {
        self.0
    }
}
