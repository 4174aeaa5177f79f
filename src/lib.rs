//! A minimal unidirectional state container.
//!
//! [`store::Store`] holds one state value, runs a reducer for every
//! dispatched action, and notifies observers after each change. The
//! [`counter`] and [`todo`] modules are two small applications built on it;
//! [`cli`] wires them to the command line.

pub mod cli;
pub mod config;
pub mod counter;
pub mod input;
pub mod logging;
pub mod render;
pub mod store;
pub mod todo;
