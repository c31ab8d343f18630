//! Generation pass trait and the context shared with passes

use crate::{
    CodeWriter, FileDescriptor, GeneratorConfig, GeneratorError, GeneratorResult, LifecycleState,
};
use std::sync::atomic::{AtomicU8, Ordering};

/// Context shared by the driver with every registered pass
pub struct GeneratorContext {
    /// Driver and pass configuration
    pub config: GeneratorConfig,
    /// Current lifecycle state
    state: AtomicU8,
}

impl GeneratorContext {
    /// Create a new context in the `Registered` state
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            state: AtomicU8::new(LifecycleState::Registered.as_u8()),
        }
    }

    /// Get current lifecycle state
    pub fn state(&self) -> LifecycleState {
        LifecycleState::from_u8(self.state.load(Ordering::SeqCst))
    }

    /// Set lifecycle state directly (bypassing transition validation)
    pub fn set_state(&self, state: LifecycleState) {
        self.state.store(state.as_u8(), Ordering::SeqCst);
    }

    /// Attempt to transition to a new state
    pub fn transition_to(&self, target: LifecycleState) -> GeneratorResult<()> {
        let current = self.state();
        if current.can_transition_to(target) {
            self.set_state(target);
            Ok(())
        } else {
            Err(GeneratorError::InvalidState {
                expected: format!("state that can transition to {}", target),
                actual: current.to_string(),
            })
        }
    }
}

/// A code-generation pass
///
/// The driver calls [`init`](GeneratorPlugin::init) once, then
/// [`generate`](GeneratorPlugin::generate) once per schema file, appending
/// to a buffer the driver owns.
///
/// # Example
///
/// ```
/// use protogen_core::prelude::*;
///
/// struct MessageCount;
///
/// impl GeneratorPlugin for MessageCount {
///     fn name(&self) -> &'static str {
///         "count"
///     }
///
///     fn init(&mut self, _ctx: &GeneratorContext) -> GeneratorResult<()> {
///         Ok(())
///     }
///
///     fn generate(&mut self, file: &FileDescriptor, out: &mut CodeWriter) -> GeneratorResult<()> {
///         out.line(format!("// {} messages", file.messages().len()));
///         Ok(())
///     }
/// }
/// ```
pub trait GeneratorPlugin {
    /// Name used to select this pass in configuration
    fn name(&self) -> &'static str;

    /// Bind the pass to the driver's context. Called once, before any
    /// [`generate`](GeneratorPlugin::generate).
    fn init(&mut self, ctx: &GeneratorContext) -> GeneratorResult<()>;

    /// Emit this pass's output for one schema file
    fn generate(&mut self, file: &FileDescriptor, out: &mut CodeWriter) -> GeneratorResult<()>;

    /// One-line description for listings
    fn description(&self) -> &'static str {
        ""
    }
}
