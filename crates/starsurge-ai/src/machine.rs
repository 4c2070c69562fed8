//! Trigger-driven behavior state machine.
//!
//! Holds the closed set of behavior states keyed by [`StateId`] and
//! exactly one current state. Transitions are driven either by a state's
//! own update directive or by trigger events consulted against that
//! state's static transition table.

use starsurge_core::enums::{AiTrigger, StateId};
use starsurge_core::events::GameEvent;

use crate::context::AiCtx;

/// What a state's per-tick update asks the machine to do next.
pub enum Directive {
    /// Direct self-transition.
    ChangeTo(StateId),
    /// Raise a trigger against the current state's transition table.
    Raise(AiTrigger),
}

/// Contract every behavior state implements.
///
/// `exit` of the outgoing state always runs before `enter` of the
/// incoming one; the transition table is fixed for the state's lifetime.
/// `Send + Sync` so controllers can live in the ECS world as components.
pub trait Behavior: Send + Sync {
    fn enter(&mut self, ctx: &mut AiCtx);
    fn update(&mut self, ctx: &mut AiCtx) -> Option<Directive>;
    fn exit(&mut self, ctx: &mut AiCtx);
    /// Static table lookup: the next state for `trigger`, if mapped.
    fn transition_for(&self, trigger: AiTrigger) -> Option<StateId>;
}

/// The per-agent state machine.
pub struct StateMachine {
    states: Vec<(StateId, Box<dyn Behavior>)>,
    current: Option<StateId>,
}

impl StateMachine {
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            current: None,
        }
    }

    /// Register a state. No-op if the id is already registered.
    pub fn add_state(&mut self, id: StateId, state: Box<dyn Behavior>) {
        if self.has_state(id) {
            return;
        }
        self.states.push((id, state));
    }

    /// The current state id, if initialized.
    pub fn current(&self) -> Option<StateId> {
        self.current
    }

    /// Set the first state and run its `enter` exactly once.
    ///
    /// Calling this on an already-initialized machine is a caller
    /// contract violation: it asserts in debug builds and is otherwise
    /// ignored. An unknown id is silently ignored.
    pub fn set_initial_state(&mut self, id: StateId, ctx: &mut AiCtx) {
        debug_assert!(
            self.current.is_none(),
            "set_initial_state on an initialized machine"
        );
        if self.current.is_some() {
            return;
        }
        if let Some(state) = self.state_mut(id) {
            state.enter(ctx);
            self.current = Some(id);
        }
    }

    /// Switch states: exit the outgoing state, enter the incoming one,
    /// and emit exactly one state-changed notification. No-op when no
    /// state is current or `next` is unknown.
    pub fn change_state(&mut self, next: StateId, ctx: &mut AiCtx) {
        let Some(previous) = self.current else {
            return;
        };
        if !self.has_state(next) {
            return;
        }

        if let Some(state) = self.state_mut(previous) {
            state.exit(ctx);
        }
        if let Some(state) = self.state_mut(next) {
            state.enter(ctx);
        }
        self.current = Some(next);

        ctx.events.push(GameEvent::StateChanged {
            unit: ctx.ship.unit,
            previous,
            next,
        });
    }

    /// Advance the current state by one tick and apply its directive.
    pub fn update(&mut self, ctx: &mut AiCtx) {
        let Some(current) = self.current else {
            return;
        };
        let directive = match self.state_mut(current) {
            Some(state) => state.update(ctx),
            None => None,
        };

        match directive {
            Some(Directive::ChangeTo(next)) => self.change_state(next, ctx),
            Some(Directive::Raise(trigger)) => self.trigger(trigger, ctx),
            None => {}
        }
    }

    /// Deliver a trigger to the current state. Triggers with no entry in
    /// the state's transition table are silently ignored.
    pub fn trigger(&mut self, trigger: AiTrigger, ctx: &mut AiCtx) {
        let Some(current) = self.current else {
            return;
        };
        let next = self
            .state_mut(current)
            .and_then(|state| state.transition_for(trigger));
        if let Some(next) = next {
            self.change_state(next, ctx);
        }
    }

    fn has_state(&self, id: StateId) -> bool {
        self.states.iter().any(|(existing, _)| *existing == id)
    }

    fn state_mut(&mut self, id: StateId) -> Option<&mut Box<dyn Behavior>> {
        self.states
            .iter_mut()
            .find(|(existing, _)| *existing == id)
            .map(|(_, state)| state)
    }
}

impl Default for StateMachine {
    fn default() -> Self {
        Self::new()
    }
}
