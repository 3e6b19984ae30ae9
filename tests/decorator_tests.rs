//! Integration tests for the synchronous decorators.

#![cfg(feature = "decorator")]

use fnkit::decorator::{KeyFn, memoize, memoize_with, once};
use fnkit::error::MemoizeError;
use rstest::rstest;
use std::cell::{Cell, RefCell};

// =============================================================================
// Once
// =============================================================================

#[rstest]
fn test_once_three_calls_one_invocation() {
    let calls = Cell::new(0);
    let add = once(|(left, right): (i32, i32)| {
        calls.set(calls.get() + 1);
        left + right
    });

    let results = [add.call((1, 2)), add.call((10, 20)), add.call((100, 200))];

    assert_eq!(results, [3, 3, 3]);
    assert_eq!(calls.get(), 1);
}

#[rstest]
fn test_once_sees_captured_receiver() {
    struct Counter {
        start: i32,
    }

    let counter = Counter { start: 40 };
    let increment = once(|by: i32| counter.start + by);
    assert_eq!(increment.call(2), 42);
    assert_eq!(increment.call(-40), 42);
}

#[rstest]
fn test_independent_wrappers_do_not_share_state() {
    let make = || once(|value: i32| value);
    let first = make();
    let second = make();
    assert_eq!(first.call(1), 1);
    assert_eq!(second.call(2), 2);
}

// =============================================================================
// Memoize
// =============================================================================

#[rstest]
fn test_memoize_identical_arguments_invoke_once() {
    let calls = Cell::new(0);
    let multiply = memoize(|(left, right): (i64, i64)| {
        calls.set(calls.get() + 1);
        left * right
    });

    assert_eq!(multiply.call((6, 7)), Ok(42));
    assert_eq!(multiply.call((6, 7)), Ok(42));
    assert_eq!(calls.get(), 1);

    assert_eq!(multiply.call((7, 6)), Ok(42));
    assert_eq!(calls.get(), 2);
}

#[rstest]
fn test_memoize_string_arguments() {
    let seen = RefCell::new(Vec::new());
    let shout = memoize(|text: String| {
        seen.borrow_mut().push(text.clone());
        text.to_uppercase()
    });

    assert_eq!(shout.call("hi".to_string()), Ok("HI".to_string()));
    assert_eq!(shout.call("hi".to_string()), Ok("HI".to_string()));
    assert_eq!(shout.call("yo".to_string()), Ok("YO".to_string()));
    assert_eq!(*seen.borrow(), vec!["hi", "yo"]);
}

#[rstest]
fn test_memoize_into_fn() {
    let calls = Cell::new(0);
    let square = memoize(|value: u32| {
        calls.set(calls.get() + 1);
        value * value
    })
    .into_fn();

    assert_eq!(square(9), Ok(81));
    assert_eq!(square(9), Ok(81));
    assert_eq!(calls.get(), 1);
}

#[rstest]
fn test_memoize_with_failing_key_reports_error() {
    let lengths = memoize_with(
        |text: &str| text.len(),
        KeyFn(|text: &&str| {
            if text.is_empty() {
                Err(MemoizeError::UnserializableArguments {
                    reason: "empty text".to_string(),
                })
            } else {
                Ok((*text).to_string())
            }
        }),
    );

    assert_eq!(lengths.call("four"), Ok(4));
    assert!(lengths.call("").is_err());
    assert_eq!(lengths.cache_len(), 1);
}

#[cfg(feature = "serde")]
mod json_keys {
    use super::*;
    use fnkit::decorator::JsonArguments;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Query {
        table: &'static str,
        limit: u32,
    }

    #[rstest]
    fn test_json_keys_for_structs() {
        let calls = Cell::new(0);
        let run = memoize_with(
            |query: Query| {
                calls.set(calls.get() + 1);
                format!("select * from {} limit {}", query.table, query.limit)
            },
            JsonArguments,
        );

        let first = run.call(Query {
            table: "users",
            limit: 5,
        });
        let second = run.call(Query {
            table: "users",
            limit: 5,
        });
        assert_eq!(first, second);
        assert_eq!(calls.get(), 1);
    }
}
