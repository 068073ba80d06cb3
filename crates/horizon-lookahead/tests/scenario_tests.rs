//! End-to-end layout change scenarios.

mod common;

use std::time::Duration;

use horizon_lookahead::geometry::Offset;
use horizon_lookahead::transition::TransitionContainer;

use common::{column, frame, frames, offset, show, tagged, two_columns};

#[tokio::test(start_paused = true)]
async fn test_column_to_two_columns() {
    let mut container = TransitionContainer::new().expect("Failed to create container");
    let (a, a_edges) = tagged(&mut container, "a");
    let (b, b_edges) = tagged(&mut container, "b");
    show(&mut container, column(&[a, b]));
    frames(&mut container, 2).await;
    assert_eq!(offset(&container, a), Some(Offset::ZERO));
    assert_eq!(offset(&container, b), Some(Offset::new(0, 80)));

    show(&mut container, two_columns(&[a, b]));
    let mut path = vec![Offset::new(0, 80)];
    for _ in 0..40 {
        frame(&mut container).await;
        assert!(!container.scope().registry().lock().is_running(a));
        path.push(container.placement("b").expect("b is drawn").rect.origin);
    }
    container.layout(common::bounds());
    path.push(container.placement("b").expect("b is drawn").rect.origin);

    assert_eq!(path.last(), Some(&Offset::new(200, 0)));
    for step in path.windows(2) {
        let (from, to) = (step[0], step[1]);
        assert!(to.x >= from.x && to.y <= from.y, "moved backwards: {from:?} -> {to:?}");
        assert!(to.x - from.x <= 50 && from.y - to.y <= 20, "jumped: {from:?} -> {to:?}");
    }

    assert_eq!(container.placement("a").map(|p| p.rect.origin), Some(Offset::ZERO));
    assert_eq!((a_edges.started(), a_edges.finished(), a_edges.cancelled()), (0, 0, 0));
    assert_eq!(b_edges.started(), 1);
    assert_eq!(b_edges.finished(), 1);
    assert_eq!(b_edges.cancelled(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_rapid_toggling_settles_on_last_layout() {
    let mut container = TransitionContainer::new().expect("Failed to create container");
    let (a, _) = tagged(&mut container, "a");
    let (b, edges) = tagged(&mut container, "b");
    show(&mut container, column(&[a, b]));
    frames(&mut container, 2).await;

    // Column -> two columns -> column, well within half the duration
    show(&mut container, two_columns(&[a, b]));
    frames(&mut container, 6).await;
    show(&mut container, column(&[a, b]));
    frames(&mut container, 6).await;

    tokio::time::sleep(Duration::from_millis(600)).await;
    frame(&mut container).await;

    assert_eq!(offset(&container, b), Some(Offset::new(0, 80)));
    assert_eq!(container.placement("b").map(|p| p.rect.origin), Some(Offset::new(0, 80)));
    assert!(!container.is_running_transition());
    assert!(edges.cancelled() >= 1);
    assert_eq!(edges.finished(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_toggling_every_frame() {
    let mut container = TransitionContainer::new().expect("Failed to create container");
    let (a, _) = tagged(&mut container, "a");
    let (b, edges) = tagged(&mut container, "b");
    show(&mut container, column(&[a, b]));
    frames(&mut container, 2).await;

    for round in 0..10 {
        if round % 2 == 0 {
            show(&mut container, two_columns(&[a, b]));
        } else {
            show(&mut container, column(&[a, b]));
        }
        frame(&mut container).await;
    }

    tokio::time::sleep(Duration::from_millis(600)).await;
    assert_eq!(offset(&container, b), Some(Offset::new(0, 80)));
    assert_eq!(edges.cancelled(), 9);
    assert_eq!(edges.started(), 10);
    assert_eq!(edges.finished(), 1);
}
