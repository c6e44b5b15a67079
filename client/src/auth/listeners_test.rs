use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;

fn counter(set: &ListenerSet) -> (Arc<AtomicUsize>, Subscription) {
    let hits = Arc::new(AtomicUsize::new(0));
    let hits_listener = Arc::clone(&hits);
    let sub = set.subscribe(move |_| {
        hits_listener.fetch_add(1, Ordering::SeqCst);
    });
    (hits, sub)
}

#[test]
fn emit_reaches_every_listener() {
    let set = ListenerSet::default();
    let (a, _sub_a) = counter(&set);
    let (b, _sub_b) = counter(&set);

    set.emit(&AuthChange::signed_out());

    assert_eq!(a.load(Ordering::SeqCst), 1);
    assert_eq!(b.load(Ordering::SeqCst), 1);
    assert_eq!(set.len(), 2);
}

#[test]
fn unsubscribe_stops_delivery_for_that_listener_only() {
    let set = ListenerSet::default();
    let (a, sub_a) = counter(&set);
    let (b, _sub_b) = counter(&set);

    sub_a.unsubscribe();
    set.emit(&AuthChange::signed_out());

    assert_eq!(a.load(Ordering::SeqCst), 0);
    assert_eq!(b.load(Ordering::SeqCst), 1);
    assert_eq!(set.len(), 1);
}

#[test]
fn unsubscribe_after_registry_dropped_is_noop() {
    let set = ListenerSet::default();
    let (_hits, sub) = counter(&set);
    drop(set);
    sub.unsubscribe();
}

#[test]
fn clones_share_listeners() {
    let set = ListenerSet::default();
    let (hits, _sub) = counter(&set);
    set.clone().emit(&AuthChange::signed_out());
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[test]
fn listener_may_subscribe_during_emit_without_deadlock() {
    let set = ListenerSet::default();
    let inner = set.clone();
    let _sub = set.subscribe(move |_| {
        let late = inner.subscribe(|_| {});
        late.unsubscribe();
    });
    set.emit(&AuthChange::signed_out());
    assert!(!set.is_empty());
}
