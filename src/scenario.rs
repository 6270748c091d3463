use crate::container::StateContainer;
use crate::error::Result;
use tracing::warn;

/// The step a [`Scenario`] last ran
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Constructed,
    Given,
    When,
    Then,
}

/// A Given/When/Then test context that owns its state
///
/// Each test builds its own `Scenario`; the container inside it is dropped
/// with the scenario.
///
/// # Examples
///
/// ```
/// use gwt_state::{Scenario, StateError};
///
/// #[derive(Debug)]
/// struct Cart { items: Vec<&'static str> }
///
/// let mut scenario = Scenario::new();
/// scenario
///     .given(|state| {
///         state.use_value(Cart { items: vec![] });
///     })
///     .when(|state| {
///         state.set::<Cart>().named("full").to(Cart { items: vec!["apple"] });
///     });
///
/// let count = scenario.then(|state| Ok(state.get_named::<Cart>("full")?.items.len()))?;
/// assert_eq!(count, 1);
/// # Ok::<(), StateError>(())
/// ```
#[derive(Debug, Default)]
pub struct Scenario {
    state: StateContainer,
    phase: Phase,
}

impl Scenario {
    /// Creates a scenario with an empty container
    pub fn new() -> Self {
        Self::default()
    }

    /// Arranges state before the action under test
    pub fn given<F>(&mut self, f: F) -> &mut Self
    where
        F: FnOnce(&mut StateContainer),
    {
        if matches!(self.phase, Phase::When | Phase::Then) {
            warn!(phase = ?self.phase, "given step ran after the scenario was acted on");
        }
        self.phase = Phase::Given;
        f(&mut self.state);
        self
    }

    /// Runs the action under test
    pub fn when<F>(&mut self, f: F) -> &mut Self
    where
        F: FnOnce(&mut StateContainer),
    {
        if self.phase == Phase::Then {
            warn!("when step ran after a then step");
        }
        self.phase = Phase::When;
        f(&mut self.state);
        self
    }

    /// Inspects the resulting state
    ///
    /// Lookup failures inside `f` propagate with `?` and end the step.
    pub fn then<F, R>(&mut self, f: F) -> Result<R>
    where
        F: FnOnce(&StateContainer) -> Result<R>,
    {
        self.phase = Phase::Then;
        f(&self.state)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn state(&self) -> &StateContainer {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut StateContainer {
        &mut self.state
    }
}
