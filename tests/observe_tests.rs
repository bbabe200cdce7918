// Host-side tests for observable state.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/observe.rs"]
mod observe;

use observe::Observable;
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn set_notifies_subscribers_in_order() {
    let value = Observable::new(0_i32);
    let seen = Rc::new(RefCell::new(Vec::new()));

    let seen_a = seen.clone();
    let _a = value.subscribe(move |v| seen_a.borrow_mut().push(("a", *v)));
    let seen_b = seen.clone();
    let _b = value.subscribe(move |v| seen_b.borrow_mut().push(("b", *v)));

    value.set(1);
    value.set(2);
    assert_eq!(*seen.borrow(), [("a", 1), ("b", 1), ("a", 2), ("b", 2)]);
    assert_eq!(value.get(), 2);
}

#[test]
fn equal_values_are_absorbed() {
    let value = Observable::new(5_i32);
    let count = Rc::new(RefCell::new(0));
    let count_sub = count.clone();
    let _sub = value.subscribe(move |_| *count_sub.borrow_mut() += 1);

    value.set(5);
    value.set(5);
    assert_eq!(*count.borrow(), 0);
    value.set(6);
    value.set(6);
    assert_eq!(*count.borrow(), 1);
}

#[test]
fn unsubscribe_detaches_the_handler() {
    let value = Observable::new(0_i32);
    let count = Rc::new(RefCell::new(0));
    let count_sub = count.clone();
    let sub = value.subscribe(move |_| *count_sub.borrow_mut() += 1);

    value.set(1);
    sub.unsubscribe();
    value.set(2);
    assert_eq!(*count.borrow(), 1);
}

#[test]
fn dropping_the_subscription_detaches_too() {
    let value = Observable::new(0_i32);
    let count = Rc::new(RefCell::new(0));
    {
        let count_sub = count.clone();
        let _sub = value.subscribe(move |_| *count_sub.borrow_mut() += 1);
        value.set(1);
    }
    value.set(2);
    assert_eq!(*count.borrow(), 1);
}

#[test]
fn subscribing_during_notification_is_safe() {
    let value: Observable<i32> = Observable::new(0);
    let late_calls = Rc::new(RefCell::new(0));

    let value_inner = value.clone();
    let late_calls_inner = late_calls.clone();
    let holder: Rc<RefCell<Vec<observe::Subscription>>> = Rc::new(RefCell::new(Vec::new()));
    let holder_inner = holder.clone();
    let _outer = value.subscribe(move |_| {
        let late_calls_new = late_calls_inner.clone();
        let sub = value_inner.subscribe(move |_| *late_calls_new.borrow_mut() += 1);
        holder_inner.borrow_mut().push(sub);
    });

    // The subscription created mid-notify must not fire for the change
    // that created it, only for later ones.
    value.set(1);
    assert_eq!(*late_calls.borrow(), 0);
    value.set(2);
    assert_eq!(*late_calls.borrow(), 1);
}

#[test]
fn observable_clones_share_state() {
    let value = Observable::new("idle".to_string());
    let twin = value.clone();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let seen_sub = seen.clone();
    let _sub = twin.subscribe(move |v| seen_sub.borrow_mut().push(v.clone()));

    value.set("busy".to_string());
    assert_eq!(twin.get(), "busy");
    assert_eq!(*seen.borrow(), ["busy".to_string()]);
}
