mod common;

use std::fmt;
use std::rc::Rc;

use common::call_log;
use unistore::counter::{CounterAction, CounterReducer};
use unistore::store::{reducer_fn, Action, Reducer, Store, StoreBuilder, StoreError, TryReducer};
use unistore::todo::{TodoAction, TodoReducer};

#[test]
fn unrecognized_action_is_identity_for_counter() {
    for state in [-5i64, 0, 1, 1_000] {
        assert_eq!(CounterReducer.reduce(&state, CounterAction::Unrecognized), state);
    }
}

#[test]
fn unrecognized_action_is_identity_for_todos() {
    let state = common::todo_list(&[(2, "b"), (1, "a")]);
    assert_eq!(TodoReducer.reduce(&state, TodoAction::Unrecognized), state);
}

#[test]
fn observers_fire_in_subscription_order() {
    let log = call_log();
    let mut store = Store::new(CounterReducer);

    let a = Rc::clone(&log);
    let _first = store.subscribe(move |_: &i64| a.borrow_mut().push("A"));
    let b = Rc::clone(&log);
    let _second = store.subscribe(move |_: &i64| b.borrow_mut().push("B"));

    store.dispatch(CounterAction::Add);

    assert_eq!(*log.borrow(), vec!["A", "B"]);
}

#[test]
fn observers_see_replaced_state() {
    let seen = Rc::new(std::cell::RefCell::new(Vec::new()));
    let mut store = Store::new(CounterReducer);
    let sink = Rc::clone(&seen);
    let _subscription = store.subscribe(move |count: &i64| sink.borrow_mut().push(*count));

    store.dispatch(CounterAction::Add);
    store.dispatch(CounterAction::Minus);

    assert_eq!(*seen.borrow(), vec![1, 0]);
}

#[test]
fn double_subscribe_single_unsubscribe_leaves_one() {
    let log = call_log();
    let observer = {
        let log = Rc::clone(&log);
        move |_: &i64| log.borrow_mut().push("tick")
    };

    let mut store = Store::new(CounterReducer);
    let first = store.subscribe(observer.clone());
    let _second = store.subscribe(observer);
    assert_eq!(store.observer_count(), 2);

    assert!(store.unsubscribe(first));
    store.dispatch(CounterAction::Add);

    assert_eq!(store.observer_count(), 1);
    assert_eq!(*log.borrow(), vec!["tick"]);
}

#[test]
fn unsubscribe_is_not_repeatable() {
    let mut store = Store::new(CounterReducer);
    let subscription = store.subscribe(|_: &i64| {});
    assert!(store.unsubscribe(subscription));
    assert!(!store.unsubscribe(subscription));
}

#[test]
fn unsubscribed_observer_is_not_called() {
    let log = call_log();
    let mut store = Store::new(CounterReducer);
    let sink = Rc::clone(&log);
    let subscription = store.subscribe(move |_: &i64| sink.borrow_mut().push("called"));

    store.unsubscribe(subscription);
    store.dispatch(CounterAction::Add);

    assert!(log.borrow().is_empty());
}

#[test]
fn plain_function_works_as_reducer() {
    fn count_modifier(count: &i64, action: CounterAction) -> i64 {
        match action {
            CounterAction::Add => count + 10,
            _ => *count,
        }
    }

    let mut store = Store::new(reducer_fn(count_modifier));
    store.dispatch(CounterAction::Add);
    assert_eq!(*store.state(), 10);
}

#[test]
fn builder_without_reducer_fails_fast() {
    let result = StoreBuilder::<CounterReducer>::new().initial_state(3).build();
    assert!(matches!(result, Err(StoreError::MissingReducer)));
}

#[test]
fn builder_uses_supplied_initial_state() {
    let store = Store::builder()
        .reducer(CounterReducer)
        .initial_state(41)
        .build()
        .unwrap();
    assert_eq!(*store.state(), 41);
}

// -- Fallible reducers --------------------------------------------------------

#[derive(Debug, PartialEq, Eq)]
struct Overflow;

impl fmt::Display for Overflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("counter overflow")
    }
}

impl std::error::Error for Overflow {}

/// Counter capped at 2 that rejects further increments.
struct CappedCounter;

impl TryReducer for CappedCounter {
    type State = i64;
    type Action = CounterAction;
    type Error = Overflow;

    fn try_reduce(&self, state: &i64, action: CounterAction) -> Result<i64, Overflow> {
        match action {
            CounterAction::Add if *state >= 2 => Err(Overflow),
            CounterAction::Add => Ok(state + 1),
            CounterAction::Minus => Ok(state - 1),
            CounterAction::Unrecognized => Ok(*state),
        }
    }
}

/// Rejects everything, including the bootstrap action.
struct Broken;

impl TryReducer for Broken {
    type State = i64;
    type Action = CounterAction;
    type Error = Overflow;

    fn try_reduce(&self, _: &i64, _: CounterAction) -> Result<i64, Overflow> {
        Err(Overflow)
    }
}

#[test]
fn failed_transition_keeps_state_and_skips_observers() {
    let log = call_log();
    let mut store = Store::try_with_state(CappedCounter, 2).unwrap();
    let sink = Rc::clone(&log);
    let _subscription = store.subscribe(move |_: &i64| sink.borrow_mut().push("notified"));

    let err = store.try_dispatch(CounterAction::Add).unwrap_err();

    assert!(matches!(err, StoreError::Reducer(Overflow)));
    assert_eq!(*store.state(), 2);
    assert!(log.borrow().is_empty());
}

#[test]
fn fallible_store_recovers_after_failure() {
    let mut store = Store::try_new(CappedCounter).unwrap();
    store.try_dispatch(CounterAction::Add).unwrap();
    store.try_dispatch(CounterAction::Add).unwrap();
    assert!(store.try_dispatch(CounterAction::Add).is_err());
    store.try_dispatch(CounterAction::Minus).unwrap();
    assert_eq!(*store.state(), 1);
}

#[test]
fn bootstrap_failure_fails_construction() {
    let result = Store::try_new(Broken);
    assert!(matches!(result, Err(StoreError::Reducer(Overflow))));
}

#[test]
fn reducer_error_message_is_wrapped() {
    let err: StoreError<Overflow> = StoreError::Reducer(Overflow);
    assert_eq!(err.to_string(), "Reducer failed: counter overflow");
}

#[test]
fn init_action_is_unrecognized() {
    assert_eq!(CounterAction::init(), CounterAction::Unrecognized);
    assert_eq!(TodoAction::init(), TodoAction::Unrecognized);
}
