/// Which of the two confirmations is outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationStep {
    First,
    Second,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClearHistoryState {
    #[default]
    Idle,
    ConfirmationPending(ConfirmationStep),
    Cleared,
}

/// Double-confirmation guard in front of `delete_all()`.
///
/// `Idle -> Pending(First) -> Pending(Second) -> Cleared`; declining at either
/// step returns to `Idle`. Callers fire `delete_all()` only once `confirm()`
/// reports `Cleared`.
#[derive(Debug, Default)]
pub struct ClearHistoryGate {
    state: ClearHistoryState,
}

impl ClearHistoryGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ClearHistoryState {
        self.state
    }

    /// Start (or restart) the workflow.
    pub fn request(&mut self) -> ClearHistoryState {
        self.state = ClearHistoryState::ConfirmationPending(ConfirmationStep::First);
        self.state
    }

    pub fn confirm(&mut self) -> ClearHistoryState {
        use ClearHistoryState::*;
        self.state = match self.state {
            ConfirmationPending(ConfirmationStep::First) => {
                ConfirmationPending(ConfirmationStep::Second)
            }
            ConfirmationPending(ConfirmationStep::Second) => Cleared,
            // confirming without a pending request does nothing
            other => other,
        };
        self.state
    }

    pub fn decline(&mut self) -> ClearHistoryState {
        if matches!(self.state, ClearHistoryState::ConfirmationPending(_)) {
            self.state = ClearHistoryState::Idle;
        }
        self.state
    }

    pub fn is_cleared(&self) -> bool {
        self.state == ClearHistoryState::Cleared
    }
}
