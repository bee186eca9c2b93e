/// Fraction of an element that has to be on screen before it reveals
pub const REVEAL_THRESHOLD: f64 = 0.5;

/// One-way switch for scroll-in effects: once any observation reports the
/// element in view it stays revealed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    pub fn new(revealed: bool) -> Self {
        Self { revealed }
    }

    pub fn revealed(&self) -> bool {
        self.revealed
    }

    /// Feeds one batch of `is_intersecting` flags. Returns true only on the
    /// batch that first reveals the element.
    pub fn observe(&mut self, batch: impl IntoIterator<Item = bool>) -> bool {
        if self.revealed {
            return false;
        }
        self.revealed = batch.into_iter().any(|intersecting| intersecting);
        self.revealed
    }
}
