//! Driver lifecycle state machine

/// Lifecycle of a [`Generator`](crate::Generator)
///
/// State transitions:
/// ```text
/// Registered → Initialized
///     │             │
///     └─────────────┴──→ Failed (on error)
/// ```
///
/// Passes may only be added while `Registered`, and files may only be
/// generated once `Initialized`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LifecycleState {
    /// Passes are being registered; nothing has been initialized yet
    #[default]
    Registered,
    /// Every pass has been initialized and files can be generated
    Initialized,
    /// A pass failed to initialize or generate
    Failed,
}

impl LifecycleState {
    /// Check if this state can transition to the target state
    pub fn can_transition_to(&self, target: LifecycleState) -> bool {
        use LifecycleState::*;
        matches!(
            (self, target),
            (Registered, Initialized) | (Registered, Failed) | (Initialized, Failed)
        )
    }

    /// Check if files can be generated in this state
    pub fn can_generate(&self) -> bool {
        matches!(self, LifecycleState::Initialized)
    }

    /// Check if passes can still be registered in this state
    pub fn can_register(&self) -> bool {
        matches!(self, LifecycleState::Registered)
    }

    pub(crate) fn as_u8(self) -> u8 {
        match self {
            LifecycleState::Registered => 0,
            LifecycleState::Initialized => 1,
            LifecycleState::Failed => 2,
        }
    }

    pub(crate) fn from_u8(value: u8) -> Self {
        match value {
            0 => LifecycleState::Registered,
            1 => LifecycleState::Initialized,
            _ => LifecycleState::Failed,
        }
    }
}

impl std::fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LifecycleState::Registered => write!(f, "Registered"),
            LifecycleState::Initialized => write!(f, "Initialized"),
            LifecycleState::Failed => write!(f, "Failed"),
        }
    }
}
