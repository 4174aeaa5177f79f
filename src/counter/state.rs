use crate::store::State;

/// Counter state: a plain signed integer.
pub type Count = i64;

impl State for i64 {}
