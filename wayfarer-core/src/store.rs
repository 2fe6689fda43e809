//! Effect-aware state store with reducer pattern
//!
//! The reducer is a pure function over `(&mut S, A)`. Instead of performing
//! side effects itself it returns a [`Dispatched<E>`] describing whether the
//! state changed and which effects the runtime should execute.

use std::marker::PhantomData;

use crate::action::Action;

/// Result of dispatching an action.
///
/// Carries the re-render indicator plus any declarative effects the
/// reducer wants executed after this dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatched<E> {
    /// Whether the state was modified and the UI should re-render.
    pub changed: bool,
    /// Effects to run after dispatch, in order.
    pub effects: Vec<E>,
}

impl<E> Default for Dispatched<E> {
    fn default() -> Self {
        Self::unchanged()
    }
}

impl<E> Dispatched<E> {
    /// No state change, no effects.
    #[inline]
    pub fn unchanged() -> Self {
        Self {
            changed: false,
            effects: vec![],
        }
    }

    /// State changed, no effects.
    #[inline]
    pub fn changed() -> Self {
        Self {
            changed: true,
            effects: vec![],
        }
    }

    /// State changed, one effect.
    #[inline]
    pub fn changed_with(effect: E) -> Self {
        Self {
            changed: true,
            effects: vec![effect],
        }
    }

    /// State changed, several effects.
    #[inline]
    pub fn changed_with_many(effects: Vec<E>) -> Self {
        Self {
            changed: true,
            effects,
        }
    }

    /// One effect without a state change.
    #[inline]
    pub fn effect(effect: E) -> Self {
        Self {
            changed: false,
            effects: vec![effect],
        }
    }

    /// Append an effect to this result.
    #[inline]
    pub fn with(mut self, effect: E) -> Self {
        self.effects.push(effect);
        self
    }

    /// True if there are effects to process.
    #[inline]
    pub fn has_effects(&self) -> bool {
        !self.effects.is_empty()
    }
}

/// A reducer that mutates state and declares effects.
pub type Reducer<S, A, E> = fn(&mut S, A) -> Dispatched<E>;

/// Centralized state container.
///
/// Holds the application state and funnels every mutation through the
/// reducer, Redux-style. Views only ever see `&S`.
pub struct Store<S, A: Action, E> {
    state: S,
    reducer: Reducer<S, A, E>,
    _marker: PhantomData<(A, E)>,
}

impl<S, A: Action, E> Store<S, A, E> {
    /// Create a store with initial state and reducer.
    pub fn new(state: S, reducer: Reducer<S, A, E>) -> Self {
        Self {
            state,
            reducer,
            _marker: PhantomData,
        }
    }

    /// Current state.
    #[inline]
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Mutable state access.
    ///
    /// Prefer dispatching actions; this exists for initialization.
    #[inline]
    pub fn state_mut(&mut self) -> &mut S {
        &mut self.state
    }

    /// Run the reducer for one action.
    #[inline]
    pub fn dispatch(&mut self, action: A) -> Dispatched<E> {
        (self.reducer)(&mut self.state, action)
    }
}

/// Middleware hooks around each dispatch.
///
/// Used for cross-cutting concerns such as action logging.
pub trait Middleware<A: Action> {
    /// Called before the reducer sees the action.
    fn before(&mut self, action: &A);

    /// Called after the reducer ran, with the change indicator.
    fn after(&mut self, action: &A, state_changed: bool);
}

/// Middleware that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopMiddleware;

impl<A: Action> Middleware<A> for NoopMiddleware {
    fn before(&mut self, _action: &A) {}
    fn after(&mut self, _action: &A, _state_changed: bool) {}
}

/// Middleware that logs every action through `tracing`.
#[derive(Debug, Clone, Default)]
pub struct LoggingMiddleware {
    /// Also log before dispatch, not only the outcome.
    pub verbose: bool,
}

impl LoggingMiddleware {
    /// Log outcomes only.
    pub fn new() -> Self {
        Self { verbose: false }
    }

    /// Log both sides of each dispatch.
    pub fn verbose() -> Self {
        Self { verbose: true }
    }
}

impl<A: Action> Middleware<A> for LoggingMiddleware {
    fn before(&mut self, action: &A) {
        if self.verbose {
            tracing::debug!(action = %action.name(), "dispatching");
        }
    }

    fn after(&mut self, action: &A, state_changed: bool) {
        tracing::debug!(action = %action.name(), state_changed, "dispatched");
    }
}

/// A [`Store`] wrapped with middleware.
pub struct StoreWithMiddleware<S, A: Action, E, M: Middleware<A>> {
    store: Store<S, A, E>,
    middleware: M,
}

impl<S, A: Action, E, M: Middleware<A>> StoreWithMiddleware<S, A, E, M> {
    /// Create a store with middleware.
    pub fn new(state: S, reducer: Reducer<S, A, E>, middleware: M) -> Self {
        Self {
            store: Store::new(state, reducer),
            middleware,
        }
    }

    /// Current state.
    #[inline]
    pub fn state(&self) -> &S {
        self.store.state()
    }

    /// Mutable state access.
    #[inline]
    pub fn state_mut(&mut self) -> &mut S {
        self.store.state_mut()
    }

    /// Dispatch through middleware and reducer.
    pub fn dispatch(&mut self, action: A) -> Dispatched<E> {
        self.middleware.before(&action);
        let result = self.store.dispatch(action.clone());
        self.middleware.after(&action, result.changed);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CartState {
        seats: u32,
        total: u64,
    }

    const SEAT_PRICE: u64 = 20_000;

    #[derive(Clone, Debug)]
    enum CartAction {
        AddSeat,
        RemoveSeat,
        Checkout,
        Noop,
    }

    impl Action for CartAction {
        fn name(&self) -> &'static str {
            match self {
                CartAction::AddSeat => "AddSeat",
                CartAction::RemoveSeat => "RemoveSeat",
                CartAction::Checkout => "Checkout",
                CartAction::Noop => "Noop",
            }
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    enum CartEffect {
        Submit(u64),
    }

    fn reducer(state: &mut CartState, action: CartAction) -> Dispatched<CartEffect> {
        match action {
            CartAction::AddSeat => {
                state.seats += 1;
                state.total = u64::from(state.seats) * SEAT_PRICE;
                Dispatched::changed()
            }
            CartAction::RemoveSeat => {
                state.seats = state.seats.saturating_sub(1);
                state.total = u64::from(state.seats) * SEAT_PRICE;
                Dispatched::changed()
            }
            CartAction::Checkout => Dispatched::effect(CartEffect::Submit(state.total)),
            CartAction::Noop => Dispatched::unchanged(),
        }
    }

    #[test]
    fn dispatch_mutates_state() {
        let mut store = Store::new(CartState::default(), reducer);

        assert!(store.dispatch(CartAction::AddSeat).changed);
        assert!(store.dispatch(CartAction::AddSeat).changed);
        assert_eq!(store.state().seats, 2);
        assert_eq!(store.state().total, 40_000);

        store.dispatch(CartAction::RemoveSeat);
        assert_eq!(store.state().total, 20_000);
    }

    #[test]
    fn dispatch_reports_effects() {
        let mut store = Store::new(CartState::default(), reducer);
        store.dispatch(CartAction::AddSeat);

        let result = store.dispatch(CartAction::Checkout);
        assert!(!result.changed);
        assert_eq!(result.effects, vec![CartEffect::Submit(20_000)]);
    }

    #[test]
    fn noop_does_not_rerender() {
        let mut store = Store::new(CartState::default(), reducer);
        let result = store.dispatch(CartAction::Noop);
        assert!(!result.changed);
        assert!(!result.has_effects());
    }

    #[test]
    fn dispatched_builders() {
        let r: Dispatched<CartEffect> = Dispatched::unchanged();
        assert!(!r.changed && r.effects.is_empty());

        let r: Dispatched<CartEffect> = Dispatched::changed();
        assert!(r.changed && r.effects.is_empty());

        let r = Dispatched::changed_with(CartEffect::Submit(1));
        assert!(r.changed);
        assert_eq!(r.effects.len(), 1);

        let r = Dispatched::changed_with_many(vec![
            CartEffect::Submit(1),
            CartEffect::Submit(2),
        ]);
        assert!(r.changed);
        assert_eq!(r.effects.len(), 2);

        let r = Dispatched::unchanged().with(CartEffect::Submit(2));
        assert!(r.has_effects());
    }

    #[derive(Default)]
    struct CountingMiddleware {
        seen: usize,
    }

    impl<A: Action> Middleware<A> for CountingMiddleware {
        fn before(&mut self, _action: &A) {}
        fn after(&mut self, _action: &A, _state_changed: bool) {
            self.seen += 1;
        }
    }

    #[test]
    fn middleware_sees_every_dispatch() {
        let mut store = StoreWithMiddleware::new(
            CartState::default(),
            reducer,
            CountingMiddleware::default(),
        );

        store.dispatch(CartAction::AddSeat);
        store.dispatch(CartAction::Noop);

        assert_eq!(store.middleware.seen, 2);
        assert_eq!(store.state().seats, 1);
    }
}
