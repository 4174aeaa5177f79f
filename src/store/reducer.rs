//! Reducer traits for the store.

use std::convert::Infallible;
use std::error::Error;
use std::marker::PhantomData;

use super::action::Action;
use super::state::State;

/// Reducer transforms state based on actions.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (&State, Action) -> State. Actions it does
/// not recognize return the state unchanged.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: State;

    /// The action type this reducer handles.
    type Action: Action;

    /// Process an action and return the new state.
    ///
    /// This should be a pure function with no side effects.
    fn reduce(&self, state: &Self::State, action: Self::Action) -> Self::State;
}

/// A reducer that may reject an action.
///
/// When `try_reduce` fails the store keeps its previous state. Every
/// [`Reducer`] is a `TryReducer` whose error is [`Infallible`].
pub trait TryReducer {
    type State: State;
    type Action: Action;
    type Error: Error + 'static;

    fn try_reduce(
        &self,
        state: &Self::State,
        action: Self::Action,
    ) -> Result<Self::State, Self::Error>;
}

impl<R: Reducer> TryReducer for R {
    type State = R::State;
    type Action = R::Action;
    type Error = Infallible;

    fn try_reduce(
        &self,
        state: &Self::State,
        action: Self::Action,
    ) -> Result<Self::State, Self::Error> {
        Ok(self.reduce(state, action))
    }
}

/// Reducer backed by a plain function or closure.
///
/// Built with [`reducer_fn`].
pub struct FnReducer<F, S, A> {
    f: F,
    _marker: PhantomData<fn(&S, A) -> S>,
}

/// Wrap a function `(&State, Action) -> State` as a [`Reducer`].
pub fn reducer_fn<S, A, F>(f: F) -> FnReducer<F, S, A>
where
    F: Fn(&S, A) -> S,
{
    FnReducer {
        f,
        _marker: PhantomData,
    }
}

impl<S, A, F> Reducer for FnReducer<F, S, A>
where
    S: State,
    A: Action,
    F: Fn(&S, A) -> S,
{
    type State = S;
    type Action = A;

    fn reduce(&self, state: &S, action: A) -> S {
        (self.f)(state, action)
    }
}
