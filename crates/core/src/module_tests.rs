use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};

#[test]
fn context_forwards_to_shared_bus() {
    let bus = EventBus::new();
    let ctx = ModuleContext::new("overlay", bus.clone());
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);

    ctx.on(
        "ready",
        Listener::infallible(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        }),
    );
    bus.emit("ready", &EventData::Empty).unwrap();
    ctx.emit("ready", &EventData::Empty).unwrap();

    assert_eq!(ctx.name(), "overlay");
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[test]
fn two_modules_communicate_by_name_only() {
    let bus = EventBus::new();
    let producer = ModuleContext::new("producer", bus.clone());
    let consumer = ModuleContext::new("consumer", bus);
    let seen = Arc::new(AtomicUsize::new(0));
    let sink = Arc::clone(&seen);

    consumer.once(
        "ad:started",
        Listener::infallible(move |data| {
            if matches!(data, EventData::Ad { .. }) {
                sink.fetch_add(1, Ordering::SeqCst);
            }
        }),
    );
    let ad = EventData::Ad {
        ad: crate::media::Ad::new("ad-1"),
    };
    producer.emit("ad:started", &ad).unwrap();
    producer.emit("ad:started", &ad).unwrap();

    assert_eq!(seen.load(Ordering::SeqCst), 1);
}

#[test]
fn context_remove_listener() {
    let bus = EventBus::new();
    let ctx = ModuleContext::new("m", bus.clone());
    let listener = Listener::infallible(|_| {});

    ctx.on("pip:change", listener.clone());
    assert_eq!(bus.listener_count("pip:change"), 1);
    ctx.remove_listener("pip:change", &listener);
    assert_eq!(bus.listener_count("pip:change"), 0);
}
