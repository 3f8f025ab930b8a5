use std::cell::RefCell;
use std::rc::Rc;

use dashchart::api::{ChartEngine, ChartEngineConfig, ResizeDispatcher};
use dashchart::core::{RawSample, RawSeriesMap, SeriesDescriptor};
use dashchart::render::{NullRenderer, reconcile_keyed};

fn engine_fixture() -> ChartEngine<NullRenderer> {
    let config = ChartEngineConfig::new(
        vec![SeriesDescriptor::new("s1", "Sensor 1")],
        Vec::new(),
    )
    .with_size(1200.0, 600.0);

    let mut raw = RawSeriesMap::new();
    raw.insert(
        "s1".to_owned(),
        vec![
            RawSample::new("2024-01-01T00:00", Some(1.0)),
            RawSample::new("2024-01-01T01:00", Some(2.0)),
        ],
    );

    let mut engine = ChartEngine::new(NullRenderer::default(), config).expect("engine");
    engine.set_data(raw);
    engine.render().expect("render");
    engine
}

#[test]
fn reconcile_plans_describe_series_churn() {
    let existing = vec!["s1".to_owned(), "s2".to_owned(), "e1".to_owned()];
    let desired = vec!["s2".to_owned(), "e1".to_owned(), "e2".to_owned()];

    let plan = reconcile_keyed(&existing, &desired);
    assert_eq!(plan.to_remove, vec!["s1".to_owned()]);
    assert_eq!(plan.to_add, vec!["e2".to_owned()]);
    assert_eq!(plan.to_update, vec!["s2".to_owned(), "e1".to_owned()]);
}

#[test]
fn repeated_reconciliation_converges_to_updates_only() {
    let desired = vec!["s1", "e1"];
    let first = reconcile_keyed(&[], &desired);
    assert_eq!(first.to_add, desired);

    let settled = reconcile_keyed(&desired, &desired);
    assert!(settled.to_add.is_empty());
    assert!(settled.to_remove.is_empty());
    assert_eq!(settled.to_update, desired);
}

#[test]
fn dispatcher_relays_resize_to_every_subscribed_chart() {
    let first = Rc::new(RefCell::new(engine_fixture()));
    let second = Rc::new(RefCell::new(engine_fixture()));

    let mut dispatcher = ResizeDispatcher::new();
    {
        let engine = Rc::clone(&first);
        dispatcher.subscribe(move |width, height| {
            engine.borrow_mut().handle_resize(width, height).expect("resize");
        });
    }
    {
        let engine = Rc::clone(&second);
        dispatcher.subscribe(move |width, height| {
            engine.borrow_mut().handle_resize(width, height).expect("resize");
        });
    }
    assert_eq!(dispatcher.subscriber_count(), 2);

    dispatcher.dispatch(800.0, 400.0);

    assert_eq!(first.borrow().layout().unwrap().viewport.width, 800.0);
    assert_eq!(second.borrow().layout().unwrap().viewport.width, 800.0);
}

#[test]
fn unsubscribed_charts_stop_receiving_resizes() {
    let engine = Rc::new(RefCell::new(engine_fixture()));

    let mut dispatcher = ResizeDispatcher::new();
    let subscription = {
        let engine = Rc::clone(&engine);
        dispatcher.subscribe(move |width, height| {
            engine.borrow_mut().handle_resize(width, height).expect("resize");
        })
    };

    dispatcher.dispatch(900.0, 500.0);
    assert_eq!(engine.borrow().layout().unwrap().viewport.width, 900.0);

    assert!(dispatcher.unsubscribe(subscription));
    assert!(!dispatcher.unsubscribe(subscription), "second teardown is a no-op");
    assert_eq!(dispatcher.subscriber_count(), 0);

    dispatcher.dispatch(700.0, 500.0);
    assert_eq!(
        engine.borrow().layout().unwrap().viewport.width,
        900.0,
        "detached chart keeps its last layout"
    );
}
