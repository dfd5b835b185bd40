use gatepost_intercept::{CallOutcome, ChainTrace, ChainingPolicy, Intercepted};
use gatepost_types::{Container, MethodReturn, NativeFn, Value};
use pretty_assertions::assert_eq;
use std::cell::RefCell;
use std::rc::Rc;

/// A fluent task list: mutators return their receiver, `size` returns a
/// plain value and therefore ends a chain.
fn tasks() -> Container {
    Container::object([
        ("open", Value::from(0i64)),
        ("done", Value::from(0i64)),
        (
            "add_task",
            Value::Function(NativeFn::new("add_task", |raw, _| {
                let open = raw.member("open").and_then(|v| v.as_i64()).unwrap_or(0);
                let _ = raw.set_member("open", Value::from(open + 1));
                MethodReturn::Receiver
            })),
        ),
        (
            "complete_task",
            Value::Function(NativeFn::new("complete_task", |raw, _| {
                let open = raw.member("open").and_then(|v| v.as_i64()).unwrap_or(0);
                let done = raw.member("done").and_then(|v| v.as_i64()).unwrap_or(0);
                let _ = raw.set_member("open", Value::from((open - 1).max(0)));
                let _ = raw.set_member("done", Value::from(done + 1));
                MethodReturn::Receiver
            })),
        ),
        (
            "size",
            Value::Function(NativeFn::new("size", |raw, _| {
                let open = raw.member("open").and_then(|v| v.as_i64()).unwrap_or(0);
                let done = raw.member("done").and_then(|v| v.as_i64()).unwrap_or(0);
                MethodReturn::Value(Value::from(open + done))
            })),
        ),
    ])
}

fn state(cell: &Intercepted<ChainingPolicy>) -> (i64, i64) {
    let open = cell.get("open").unwrap().and_then(|v| v.as_i64()).unwrap();
    let done = cell.get("done").unwrap().and_then(|v| v.as_i64()).unwrap();
    (open, done)
}

// ── Permissiveness ───────────────────────────────────────────────

#[test]
fn unknown_calls_are_noops_that_do_not_break_the_chain() {
    let mut with_typos = Intercepted::wrap(tasks(), ChainingPolicy::new());
    assert_eq!(with_typos.call("add_task", &[]).unwrap(), CallOutcome::Wrapper);
    assert_eq!(with_typos.call("ad_task", &[]).unwrap(), CallOutcome::Wrapper);
    assert_eq!(with_typos.call("finish_all", &[]).unwrap(), CallOutcome::Wrapper);
    assert_eq!(with_typos.call("complete_task", &[]).unwrap(), CallOutcome::Wrapper);

    let mut clean = Intercepted::wrap(tasks(), ChainingPolicy::new());
    clean.call("add_task", &[]).unwrap();
    clean.call("complete_task", &[]).unwrap();

    assert_eq!(state(&with_typos), state(&clean));
    assert_eq!(state(&with_typos), (0, 1));
}

#[test]
fn receiver_returns_stay_on_the_wrapper() {
    let mut cell = Intercepted::wrap(tasks(), ChainingPolicy::new());
    assert_eq!(cell.call("add_task", &[]).unwrap(), CallOutcome::Wrapper);
    // The chain continues on the same wrapper afterwards.
    assert_eq!(cell.call("add_task", &[]).unwrap(), CallOutcome::Wrapper);
    assert_eq!(state(&cell), (2, 0));
}

#[test]
fn value_returns_break_the_chain() {
    let mut cell = Intercepted::wrap(tasks(), ChainingPolicy::new());
    cell.call("add_task", &[]).unwrap();
    cell.call("add_task", &[]).unwrap();
    cell.call("complete_task", &[]).unwrap();

    assert_eq!(
        cell.call("size", &[]).unwrap(),
        CallOutcome::Value(Value::from(2i64))
    );
}

// ── Tracing the skips ────────────────────────────────────────────

#[test]
fn skipped_calls_are_reported_in_order() {
    let traces = Rc::new(RefCell::new(Vec::new()));
    let sink_traces = Rc::clone(&traces);
    let mut cell = Intercepted::wrap(
        tasks(),
        ChainingPolicy::with_sink(move |trace| {
            sink_traces.borrow_mut().push(trace);
        }),
    );

    cell.call("add_task", &[]).unwrap();
    cell.call("ad_task", &[]).unwrap();
    cell.call("finish_all", &[]).unwrap();

    assert_eq!(
        *traces.borrow(),
        vec![
            ChainTrace::Called {
                name: "add_task".to_string()
            },
            ChainTrace::Skipped {
                name: "ad_task".to_string()
            },
            ChainTrace::Skipped {
                name: "finish_all".to_string()
            },
        ]
    );
}

#[test]
fn non_callable_members_are_also_skipped() {
    // A data field is not a method; the permissive policy skips it too.
    let mut cell = Intercepted::wrap(tasks(), ChainingPolicy::new());
    assert_eq!(cell.call("open", &[]).unwrap(), CallOutcome::Wrapper);
    assert_eq!(state(&cell), (0, 0));
}
