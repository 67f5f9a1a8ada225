#![forbid(unsafe_code)]
#![cfg(feature = "tracing")]

//! Tracing instrumentation tests.
//!
//!   cargo test -p dragdock --features tracing --test tracing_tests

use std::sync::{Arc, Mutex};

use dragdock::testing::{RecordingElement, RecordingHost};
use dragdock::{DragConfig, DragController};
use dragdock_core::event::{PointerEvent, PointerPosition};
use dragdock_core::geometry::{DisplaySize, ElementSize, Point, Rect};
use tracing::Subscriber;
use tracing::span::{Attributes, Id};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Layer;

/// Records the name of every span created.
struct SpanNames(Arc<Mutex<Vec<String>>>);

impl<S> Layer<S> for SpanNames
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(&self, attrs: &Attributes<'_>, _id: &Id, _ctx: Context<'_, S>) {
        if let Ok(mut names) = self.0.lock() {
            names.push(attrs.metadata().name().to_string());
        }
    }
}

#[test]
fn every_pointer_event_opens_a_span() {
    let names = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::registry().with(SpanNames(names.clone()));

    tracing::subscriber::with_default(subscriber, || {
        let mut controller: DragController<RecordingElement, RecordingHost> =
            DragController::with_config(DragConfig::new(
                Rect::new(0, 0, 400, 800),
                Point::new(150, 100),
            ))
            .expect("valid config");
        controller
            .attach(
                RecordingElement::new(ElementSize::new(100, 50)),
                RecordingHost::new(DisplaySize::new(400, 800)),
            )
            .expect("attach");

        let local = PointerPosition::new(10.0, 10.0);
        let global = PointerPosition::new(160.0, 110.0);
        controller
            .handle_pointer(PointerEvent::down(local, global))
            .expect("down");
        controller
            .handle_pointer(PointerEvent::moved(local, global))
            .expect("move");
        controller
            .handle_pointer(PointerEvent::up(local, global))
            .expect("up");
    });

    let names = names.lock().expect("span names");
    let pointer_spans = names.iter().filter(|n| *n == "drag_pointer").count();
    assert_eq!(pointer_spans, 3, "spans: {names:?}");
}
