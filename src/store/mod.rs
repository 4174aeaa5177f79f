//! Unidirectional state container primitives.
//!
//! This module provides the store, the reducer traits, and the base
//! traits for state and actions.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Reducer ──→ State ──→ Observers
//!    ↑                                 │
//!    └─────────────────────────────────┘
//! ```
//!
//! - **State**: Immutable value, replaced on every dispatch
//! - **Action**: Tagged description of an intended transition
//! - **Reducer**: Pure function that computes the next state
//! - **Store**: Holds the state, runs the reducer, notifies observers

mod action;
mod container;
mod error;
mod reducer;
mod state;
mod subscription;

pub use action::Action;
pub use container::{Store, StoreBuilder};
pub use error::StoreError;
pub use reducer::{reducer_fn, FnReducer, Reducer, TryReducer};
pub use state::State;
pub use subscription::{Observer, Subscription};
