//! Host callback failures must not corrupt slider state, and must be logged.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use dslider::dslider_core::Size;
use dslider::{
    DoubleSlider, InteractionState, LayoutElement, SliderCallbacks, SliderConfig, TouchEvent,
};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;

#[derive(Debug, Clone)]
struct CapturedEvent {
    level: tracing::Level,
    message: Option<String>,
    fields: HashMap<String, String>,
    parent_span_name: Option<String>,
}

struct EventCapture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

struct FieldVisitor(Vec<(String, String)>);

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.0.push((field.name().to_string(), format!("{value:?}")));
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.0.push((field.name().to_string(), value.to_string()));
    }

    fn record_f64(&mut self, field: &tracing::field::Field, value: f64) {
        self.0.push((field.name().to_string(), value.to_string()));
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.0.push((field.name().to_string(), value.to_string()));
    }
}

impl<S> tracing_subscriber::Layer<S> for EventCapture
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, ctx: tracing_subscriber::layer::Context<'_, S>) {
        let mut visitor = FieldVisitor(Vec::new());
        event.record(&mut visitor);
        let fields: HashMap<String, String> = visitor.0.into_iter().collect();
        self.events.lock().unwrap().push(CapturedEvent {
            level: *event.metadata().level(),
            message: fields.get("message").cloned(),
            parent_span_name: ctx.event_span(event).map(|span| span.name().to_string()),
            fields,
        });
    }
}

fn with_captured_tracing<F: FnOnce()>(f: F) -> Vec<CapturedEvent> {
    let events = Arc::new(Mutex::new(Vec::new()));
    let layer = EventCapture {
        events: Arc::clone(&events),
    };
    let subscriber = tracing_subscriber::registry().with(layer);
    tracing::subscriber::with_default(subscriber, f);
    events.lock().unwrap().clone()
}

fn measured(callbacks: SliderCallbacks) -> DoubleSlider {
    let mut s = DoubleSlider::new(SliderConfig::default(), callbacks).expect("valid config");
    s.report_layout(LayoutElement::Container, Size::new(300.0, 40.0));
    s.report_layout(LayoutElement::Track, Size::new(300.0, 4.0));
    s.report_layout(LayoutElement::LeftThumb, Size::new(20.0, 20.0));
    s.report_layout(LayoutElement::RightThumb, Size::new(20.0, 20.0));
    s
}

fn panic_warnings(events: &[CapturedEvent]) -> Vec<&CapturedEvent> {
    events
        .iter()
        .filter(|e| {
            e.level == tracing::Level::WARN
                && e.message
                    .as_deref()
                    .is_some_and(|m| m.contains("callback panicked"))
        })
        .collect()
}

#[test]
fn panicking_value_callback_does_not_roll_back_drag() {
    let completed = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&completed);
    let callbacks = SliderCallbacks::new()
        .on_value_changed(|_, _| panic!("host render failed"))
        .on_sliding_complete(move |l, r| sink.borrow_mut().push((l, r)));
    let mut s = measured(callbacks);

    let events = with_captured_tracing(|| {
        s.handle_touch(TouchEvent::Start { x: 20.0, y: 20.0 });
        s.handle_touch(TouchEvent::Move { dx: 70.0, dy: 0.0 });
        s.handle_touch(TouchEvent::Move { dx: 140.0, dy: 0.0 });
        s.handle_touch(TouchEvent::Release { dx: 140.0, dy: 0.0 });
    });

    assert_eq!(s.values(), (0.5, 1.0));
    assert_eq!(s.state(), InteractionState::Idle);
    assert_eq!(*completed.borrow(), vec![(0.5, 1.0)]);
    assert_eq!(s.callbacks().suppressed_panics(), 2);

    let warnings = panic_warnings(&events);
    assert_eq!(warnings.len(), 2);
    let first = warnings[0];
    assert_eq!(
        first.fields.get("callback").map(String::as_str),
        Some("on_value_changed")
    );
    assert_eq!(first.fields.get("left").map(String::as_str), Some("0.25"));
    assert_eq!(
        first.fields.get("panic").map(String::as_str),
        Some("host render failed")
    );
    assert_eq!(first.parent_span_name.as_deref(), Some("dslider.touch"));
}

#[test]
fn panicking_start_callback_still_arms_session() {
    let callbacks = SliderCallbacks::new().on_sliding_start(|_, _| panic!("boom"));
    let mut s = measured(callbacks);
    let events = with_captured_tracing(|| {
        s.handle_touch(TouchEvent::Start { x: 20.0, y: 20.0 });
    });
    assert!(s.state().owner().is_some());
    assert!(!s.allows_termination());
    assert_eq!(panic_warnings(&events).len(), 1);
}

#[test]
fn transitions_are_logged_at_debug() {
    let mut s = measured(SliderCallbacks::new());
    let events = with_captured_tracing(|| {
        s.handle_touch(TouchEvent::Start { x: 20.0, y: 20.0 });
        s.handle_touch(TouchEvent::Cancel);
    });
    let ids: Vec<&str> = events
        .iter()
        .filter(|e| e.level == tracing::Level::DEBUG)
        .filter_map(|e| e.fields.get("transition_id").map(String::as_str))
        .collect();
    assert_eq!(ids, vec!["1", "2"]);
}

#[test]
fn geometry_readiness_is_logged_once() {
    let events = with_captured_tracing(|| {
        let mut s = measured(SliderCallbacks::new());
        s.report_layout(LayoutElement::Container, Size::new(320.0, 40.0));
    });
    let ready: Vec<_> = events
        .iter()
        .filter(|e| e.level == tracing::Level::INFO)
        .filter(|e| e.message.as_deref() == Some("slider geometry ready"))
        .collect();
    assert_eq!(ready.len(), 1);
    assert_eq!(
        ready[0].fields.get("usable_length").map(String::as_str),
        Some("280")
    );
}

#[test]
fn rejected_config_is_logged() {
    let mut s = measured(SliderCallbacks::new());
    let events = with_captured_tracing(|| {
        let bad = SliderConfig::default().with_range(f64::NAN, 1.0);
        assert!(s.set_config(bad).is_err());
    });
    assert!(
        events
            .iter()
            .any(|e| e.level == tracing::Level::WARN && e.fields.contains_key("error"))
    );
    assert_eq!(s.config(), &SliderConfig::default());
}
