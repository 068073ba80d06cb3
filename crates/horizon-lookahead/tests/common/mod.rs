//! Shared helpers for transition integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use horizon_lookahead::config::SharedElementConfig;
use horizon_lookahead::geometry::{Constraints, Offset};
use horizon_lookahead::layout::{Block, Linear, LayoutNode, SizedBox, element};
use horizon_lookahead::transition::{ChildId, TransitionContainer};

/// Interval between frames driven by the tests.
pub const FRAME: Duration = Duration::from_millis(16);

/// A 400 pixel wide viewport.
pub fn bounds() -> Constraints {
    Constraints::new(400, 400, 0, 800)
}

/// Lay out one frame and let the axis tasks run until the next.
pub async fn frame(container: &mut TransitionContainer) {
    container.layout(bounds());
    tokio::time::sleep(FRAME).await;
}

/// Drive `count` frames.
pub async fn frames(container: &mut TransitionContainer, count: usize) {
    for _ in 0..count {
        frame(container).await;
    }
}

/// A 200x80 box holding the shared element `id`.
pub fn item(id: ChildId) -> SizedBox {
    SizedBox::fixed(200, 80).with_child(element(id))
}

/// All items stacked in one column.
pub fn column(ids: &[ChildId]) -> Box<dyn LayoutNode> {
    let column = ids.iter().fold(Linear::column(), |column, &id| column.with_child(item(id)));
    Box::new(column)
}

/// Even items in the left column, odd items in the right.
pub fn two_columns(ids: &[ChildId]) -> Box<dyn LayoutNode> {
    let (mut left, mut right) = (Linear::column(), Linear::column());
    for (index, &id) in ids.iter().enumerate() {
        if index % 2 == 0 {
            left = left.with_child(item(id));
        } else {
            right = right.with_child(item(id));
        }
    }
    Box::new(
        Linear::row()
            .with_weighted_child(left, 1.0)
            .with_weighted_child(right, 1.0),
    )
}

/// Replace the container's tree.
pub fn show(container: &mut TransitionContainer, tree: Box<dyn LayoutNode>) {
    container.set_children(vec![tree]);
}

/// Counts the lifecycle edges of one element.
#[derive(Debug, Clone, Default)]
pub struct Edges {
    started: Arc<AtomicUsize>,
    finished: Arc<AtomicUsize>,
    cancelled: Arc<AtomicUsize>,
}

impl Edges {
    /// Hook the counters into `config`.
    pub fn attach(&self, config: SharedElementConfig) -> SharedElementConfig {
        let (started, finished, cancelled) = (
            self.started.clone(),
            self.finished.clone(),
            self.cancelled.clone(),
        );
        config
            .on_animate_start(move || {
                started.fetch_add(1, Ordering::SeqCst);
            })
            .on_animate_finish(move || {
                finished.fetch_add(1, Ordering::SeqCst);
            })
            .on_animate_cancel(move || {
                cancelled.fetch_add(1, Ordering::SeqCst);
            })
    }

    pub fn started(&self) -> usize {
        self.started.load(Ordering::SeqCst)
    }

    pub fn finished(&self) -> usize {
        self.finished.load(Ordering::SeqCst)
    }

    pub fn cancelled(&self) -> usize {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Create a filled shared element labelled `label`, counting its edges.
pub fn tagged(container: &mut TransitionContainer, label: &str) -> (ChildId, Edges) {
    let edges = Edges::default();
    let config = edges.attach(container.scope().element_config());
    let id = container
        .scope_mut()
        .shared_element(Block::fill(label), config)
        .expect("Failed to create shared element");
    (id, edges)
}

/// The animated offset of `id`.
pub fn offset(container: &TransitionContainer, id: ChildId) -> Option<Offset> {
    container.scope().registry().lock().offset(id)
}
