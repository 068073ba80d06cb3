//! Tests for shared element transitions driven through a container.

mod common;

use std::time::Duration;

use horizon_lookahead::geometry::{Offset, Rect, Size};
use horizon_lookahead::layout::{Linear, SizedBox, Translate, element};
use horizon_lookahead::transition::TransitionContainer;
use horizon_lookahead::{AnimationRuntime, LookaheadError, RuntimeConfig};
use horizon_lookahead::config::TransitionConfig;

use common::{bounds, column, frame, frames, offset, show, tagged, two_columns};

#[tokio::test(start_paused = true)]
async fn test_first_layout_seeds_without_animating() {
    let mut container = TransitionContainer::new().expect("Failed to create container");
    let (a, edges) = tagged(&mut container, "a");
    show(&mut container, column(&[a]));

    // Before the axis tasks run the placement pass falls back to the lookahead
    container.layout(bounds());
    assert_eq!(container.placement("a").map(|p| p.rect), Some(Rect::from_xywh(0, 0, 200, 80)));

    frames(&mut container, 3).await;
    let registry = container.scope().registry().lock();
    assert_eq!(registry.offset(a), Some(Offset::ZERO));
    assert_eq!(registry.size(a), Some(Size::new(200, 80)));
    assert!(!registry.is_running(a));
    drop(registry);

    assert!(!container.is_running_transition());
    assert_eq!(edges.started(), 0);
    assert_eq!(edges.finished(), 0);
    assert_eq!(edges.cancelled(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_converges_to_new_target() {
    let mut container = TransitionContainer::new().expect("Failed to create container");
    let (a, _) = tagged(&mut container, "a");
    let (b, edges) = tagged(&mut container, "b");
    show(&mut container, column(&[a, b]));
    frames(&mut container, 2).await;

    show(&mut container, two_columns(&[a, b]));
    frame(&mut container).await;
    assert!(container.is_running_transition());
    assert_eq!(edges.started(), 1);

    tokio::time::sleep(Duration::from_millis(600)).await;
    assert!(!container.is_running_transition());
    assert_eq!(offset(&container, b), Some(Offset::new(200, 0)));

    container.layout(bounds());
    assert_eq!(
        container.scope().element_bounds(b),
        Some(Rect::from_xywh(200, 0, 200, 80))
    );
    assert_eq!(edges.finished(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_retarget_continues_from_current_value() {
    let mut container = TransitionContainer::new().expect("Failed to create container");
    let (a, _) = tagged(&mut container, "a");
    let (b, edges) = tagged(&mut container, "b");
    show(&mut container, column(&[a, b]));
    frames(&mut container, 2).await;

    show(&mut container, two_columns(&[a, b]));
    frames(&mut container, 8).await;
    let before = offset(&container, b).expect("b is seeded");
    assert_ne!(before, Offset::new(0, 80));
    assert_ne!(before, Offset::new(200, 0));

    show(&mut container, column(&[a, b]));
    container.layout(bounds());
    tokio::task::yield_now().await;

    assert_eq!(offset(&container, b), Some(before));
    assert_eq!(edges.cancelled(), 1);
    assert!(container.is_running_transition());

    // The next frame draws b where it was, not at either endpoint
    container.layout(bounds());
    assert_eq!(container.placement("b").map(|p| p.rect.origin), Some(before));

    tokio::time::sleep(Duration::from_millis(600)).await;
    assert_eq!(offset(&container, b), Some(Offset::new(0, 80)));
    assert_eq!(edges.finished(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_offset_and_size_form_one_transition() {
    let mut container = TransitionContainer::new().expect("Failed to create container");
    let (a, edges) = tagged(&mut container, "a");
    show(&mut container, column(&[a]));
    frames(&mut container, 2).await;

    // Moves and grows at once
    show(
        &mut container,
        Box::new(
            Linear::column()
                .with_child(SizedBox::fixed(400, 40))
                .with_child(SizedBox::fixed(400, 200).with_child(element(a))),
        ),
    );
    frame(&mut container).await;
    assert_eq!(edges.started(), 1);

    tokio::time::sleep(Duration::from_millis(600)).await;
    container.layout(bounds());
    assert_eq!(container.scope().element_bounds(a), Some(Rect::from_xywh(0, 40, 400, 200)));
    assert_eq!(edges.started(), 1);
    assert_eq!(edges.finished(), 1);
    assert_eq!(edges.cancelled(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_size_only_change_reports_edges() {
    let mut container = TransitionContainer::new().expect("Failed to create container");
    let (a, edges) = tagged(&mut container, "a");
    show(&mut container, column(&[a]));
    frames(&mut container, 2).await;

    show(
        &mut container,
        Box::new(Linear::column().with_child(SizedBox::fixed(300, 150).with_child(element(a)))),
    );
    frames(&mut container, 3).await;
    let size = container.scope().registry().lock().size(a).expect("a is seeded");
    assert!(size.width > 200 && size.width < 300, "size {size:?}");
    assert_eq!(offset(&container, a), Some(Offset::ZERO));

    tokio::time::sleep(Duration::from_millis(600)).await;
    assert_eq!(edges.started(), 1);
    assert_eq!(edges.finished(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_detach_removes_registry_entry() {
    let mut container = TransitionContainer::new().expect("Failed to create container");
    let (a, _) = tagged(&mut container, "a");
    let (b, _) = tagged(&mut container, "b");
    show(&mut container, column(&[a, b]));
    frames(&mut container, 2).await;
    show(&mut container, two_columns(&[a, b]));
    frame(&mut container).await;

    assert!(container.scope_mut().detach(b));
    assert!(!container.scope().registry().lock().contains(b));
    assert!(!container.scope().contains(b));
    assert!(!container.scope_mut().detach(b));
    assert!(!container.is_running_transition());

    // A stale slot in the tree lays out as empty
    frames(&mut container, 2).await;
    assert!(container.placement("b").is_none());
    assert!(container.placement("a").is_some());

    // A fresh element never inherits the old state
    let (c, edges) = tagged(&mut container, "c");
    assert_ne!(b, c);
    assert_eq!(offset(&container, c), None);
    show(&mut container, column(&[a, c]));
    frames(&mut container, 2).await;
    assert_eq!(offset(&container, c), Some(Offset::new(0, 80)));
    assert_eq!(edges.started(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_dropping_container_detaches_everything() {
    let mut container = TransitionContainer::new().expect("Failed to create container");
    let (a, _) = tagged(&mut container, "a");
    show(&mut container, column(&[a]));
    frames(&mut container, 2).await;

    let registry = container.scope().registry().clone();
    assert_eq!(registry.lock().len(), 1);
    drop(container);
    assert!(registry.lock().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_invalid_config_is_rejected() {
    let mut container = TransitionContainer::new().expect("Failed to create container");
    let config = container.scope().element_config().with_duration_ms(-1);
    let err = container
        .scope_mut()
        .shared_element(horizon_lookahead::layout::Block::fill("a"), config)
        .unwrap_err();
    assert!(matches!(err, LookaheadError::InvalidDuration { ms: -1 }));
    assert!(container.scope().is_empty());
    assert!(container.scope().registry().lock().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_signals_of_unknown_element() {
    let mut container = TransitionContainer::new().expect("Failed to create container");
    let (a, _) = tagged(&mut container, "a");
    assert!(container.scope().signals(a).is_ok());
    container.scope_mut().detach(a);
    assert!(matches!(
        container.scope().signals(a),
        Err(LookaheadError::UnknownElement(_))
    ));
}

#[tokio::test(start_paused = true)]
async fn test_scope_defaults_apply_to_new_elements() {
    let config = TransitionConfig {
        duration_ms: 100,
        ..TransitionConfig::default()
    };
    let mut container = TransitionContainer::new()
        .expect("Failed to create container")
        .with_config(config);
    let (a, _) = tagged(&mut container, "a");
    let (b, edges) = tagged(&mut container, "b");
    show(&mut container, column(&[a, b]));
    frames(&mut container, 2).await;

    show(&mut container, two_columns(&[a, b]));
    frame(&mut container).await;
    tokio::time::sleep(Duration::from_millis(120)).await;
    assert_eq!(offset(&container, b), Some(Offset::new(200, 0)));
    assert_eq!(edges.finished(), 1);
}

#[test]
fn test_container_needs_runtime() {
    let err = TransitionContainer::new().err().expect("no runtime is running");
    assert!(matches!(err, LookaheadError::RuntimeUnavailable(_)));
}

#[test]
fn test_driven_by_animation_runtime() {
    let runtime = AnimationRuntime::new(RuntimeConfig::current_thread()).expect("Failed to create runtime");
    let mut container = TransitionContainer::with_handle(runtime.handle().clone()).with_config(TransitionConfig {
        duration_ms: 48,
        ..TransitionConfig::default()
    });
    let (a, _) = tagged(&mut container, "a");
    let (b, edges) = tagged(&mut container, "b");

    show(&mut container, column(&[a, b]));
    container.layout(bounds());
    runtime.advance(common::FRAME);

    show(&mut container, two_columns(&[a, b]));
    for _ in 0..10 {
        container.layout(bounds());
        runtime.advance(common::FRAME);
    }
    container.layout(bounds());
    assert_eq!(container.placement("b").map(|p| p.rect.origin), Some(Offset::new(200, 0)));
    assert_eq!(edges.finished(), 1);
}

#[test]
fn test_joint_edges_on_multi_threaded_runtime() {
    let runtime = AnimationRuntime::new(RuntimeConfig::multi_threaded().with_worker_threads(2))
        .expect("Failed to create runtime");
    let mut container = TransitionContainer::with_handle(runtime.handle().clone()).with_config(TransitionConfig {
        duration_ms: 400,
        frame_interval_ms: 8,
        ..TransitionConfig::default()
    });
    let (b, edges) = tagged(&mut container, "b");
    let shifted = |dx: i32, width: u32| {
        let item = SizedBox::fixed(width, 80).with_child(element(b));
        Box::new(Linear::column().with_child(Translate::new(Offset::new(dx, 0), item)))
    };

    show(&mut container, shifted(0, 100));
    container.layout(bounds());
    runtime.advance(Duration::from_millis(40));

    // Both axes start together; the offset is redirected on every frame and
    // the size once, all while the other axis is still in flight
    for step in 0..20 {
        show(&mut container, shifted(100 + 5 * step, if step < 10 { 200 } else { 220 }));
        container.layout(bounds());
        runtime.advance(Duration::from_millis(10));
    }
    runtime.advance(Duration::from_millis(800));

    container.layout(bounds());
    assert_eq!(container.placement("b").map(|p| p.rect), Some(Rect::from_xywh(195, 0, 220, 80)));
    assert!(!container.is_running_transition());
    assert_eq!(edges.started(), 1);
    assert_eq!(edges.cancelled(), 0);
    assert_eq!(edges.finished(), 1);
}
