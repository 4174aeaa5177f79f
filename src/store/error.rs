use thiserror::Error;

/// Errors surfaced by [`Store`](super::Store) construction and dispatch.
#[derive(Debug, Error)]
pub enum StoreError<E> {
    /// The builder was finished without a reducer.
    #[error("Store requires a reducer")]
    MissingReducer,

    /// The reducer rejected an action. The previous state is kept.
    #[error("Reducer failed: {0}")]
    Reducer(#[source] E),
}
