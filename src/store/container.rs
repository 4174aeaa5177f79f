//! The state container.
//!
//! A [`Store`] owns one state value and a reducer. Dispatching an action
//! runs the reducer, replaces the state, then notifies observers in the
//! order they subscribed. Stores are plain values: construct one where the
//! application is composed and pass it to whatever needs it.

use std::convert::Infallible;
use std::fmt;

use super::action::Action;
use super::error::StoreError;
use super::reducer::{Reducer, TryReducer};
use super::subscription::{Observers, Subscription};

pub struct Store<R: TryReducer> {
    reducer: R,
    state: R::State,
    observers: Observers<R::State>,
}

impl<R: TryReducer> Store<R> {
    /// Create a store starting from `State::default()`.
    ///
    /// The bootstrap action is run through the reducer, so a fallible
    /// reducer can reject construction.
    pub fn try_new(reducer: R) -> Result<Self, StoreError<R::Error>> {
        Self::try_with_state(reducer, R::State::default())
    }

    /// Create a store starting from `initial`.
    pub fn try_with_state(reducer: R, initial: R::State) -> Result<Self, StoreError<R::Error>> {
        Self::bootstrap(reducer, initial).map_err(StoreError::Reducer)
    }

    pub fn builder() -> StoreBuilder<R> {
        StoreBuilder::new()
    }

    /// Current state. Never changes between dispatches.
    pub fn state(&self) -> &R::State {
        &self.state
    }

    /// Run the reducer for `action` and commit the result.
    ///
    /// On reducer failure the previous state is kept and no observer runs.
    pub fn try_dispatch(&mut self, action: R::Action) -> Result<(), StoreError<R::Error>> {
        self.commit(action).map_err(StoreError::Reducer)
    }

    /// Register an observer, called after every committed transition.
    pub fn subscribe<F>(&mut self, observer: F) -> Subscription
    where
        F: FnMut(&R::State) + 'static,
    {
        let subscription = self.observers.insert(Box::new(observer));
        tracing::trace!(
            ?subscription,
            observers = self.observers.len(),
            "Observer subscribed"
        );
        subscription
    }

    /// Remove exactly one registration.
    ///
    /// Returns false if `subscription` was already removed.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let removed = self.observers.remove(subscription);
        tracing::trace!(?subscription, removed, "Observer unsubscribed");
        removed
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Drop the reducer and observers, keeping the final state.
    pub fn into_state(self) -> R::State {
        self.state
    }

    fn bootstrap(reducer: R, initial: R::State) -> Result<Self, R::Error> {
        let state = reducer.try_reduce(&initial, R::Action::init())?;
        Ok(Self {
            reducer,
            state,
            observers: Observers::new(),
        })
    }

    fn commit(&mut self, action: R::Action) -> Result<(), R::Error> {
        let kind = action.kind();
        tracing::debug!(
            action = kind,
            observers = self.observers.len(),
            "Dispatching action"
        );

        let next = match self.reducer.try_reduce(&self.state, action) {
            Ok(next) => next,
            Err(err) => {
                tracing::warn!(action = kind, error = %err, "Reducer failed, keeping previous state");
                return Err(err);
            }
        };

        // Replace even when equal: observers run on every dispatch.
        self.state = next;
        self.observers.notify(&self.state);
        Ok(())
    }
}

impl<R: Reducer> Store<R> {
    /// Create a store starting from `State::default()`.
    pub fn new(reducer: R) -> Self {
        Self::with_state(reducer, <R as Reducer>::State::default())
    }

    /// Create a store starting from `initial`.
    pub fn with_state(reducer: R, initial: <R as Reducer>::State) -> Self {
        match Self::bootstrap(reducer, initial) {
            Ok(store) => store,
            Err(never) => match never {},
        }
    }

    /// Run the reducer for `action`, commit the result and notify observers.
    ///
    /// Reducers must not dispatch; the `&mut self` receiver rules that out.
    pub fn dispatch(&mut self, action: <R as Reducer>::Action) {
        let result: Result<(), Infallible> = self.commit(action);
        match result {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }
}

impl<R: TryReducer> fmt::Debug for Store<R>
where
    R::State: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

/// Step-by-step construction of a [`Store`].
///
/// Unlike [`Store::new`], the reducer is optional until [`build`] runs, which
/// fails with [`StoreError::MissingReducer`] if none was given.
///
/// [`build`]: StoreBuilder::build
pub struct StoreBuilder<R: TryReducer> {
    reducer: Option<R>,
    initial: Option<R::State>,
}

impl<R: TryReducer> StoreBuilder<R> {
    pub fn new() -> Self {
        Self {
            reducer: None,
            initial: None,
        }
    }

    pub fn reducer(mut self, reducer: R) -> Self {
        self.reducer = Some(reducer);
        self
    }

    pub fn initial_state(mut self, state: R::State) -> Self {
        self.initial = Some(state);
        self
    }

    pub fn build(self) -> Result<Store<R>, StoreError<R::Error>> {
        let reducer = self.reducer.ok_or(StoreError::MissingReducer)?;
        Store::try_with_state(reducer, self.initial.unwrap_or_default())
    }
}

impl<R: TryReducer> Default for StoreBuilder<R> {
    fn default() -> Self {
        Self::new()
    }
}
