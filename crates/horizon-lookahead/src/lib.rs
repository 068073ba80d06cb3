//! Horizon Lookahead - shared element transitions driven by lookahead layout.
//!
//! A [`TransitionContainer`](transition::TransitionContainer) lays out its
//! children twice per frame. The lookahead pass computes where everything
//! will end up; the placement pass draws every shared element at its
//! current animated geometry while background tasks move it toward that
//! target. Restructure the tree (a column becomes two columns, an item moves
//! into a detail view) and the tagged children glide to their new places.
//!
//! This crate re-exports the core crate, so errors, signals and the
//! animation runtime are available from here as well.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//!
//! use horizon_lookahead::geometry::{Constraints, Offset, Size};
//! use horizon_lookahead::layout::{Block, Linear, SizedBox, element};
//! use horizon_lookahead::transition::TransitionContainer;
//! use horizon_lookahead::{AnimationRuntime, RuntimeConfig};
//!
//! fn main() -> horizon_lookahead::Result<()> {
//!     let runtime = AnimationRuntime::new(RuntimeConfig::current_thread())?;
//!     let mut container = TransitionContainer::with_handle(runtime.handle().clone());
//!
//!     let config = container.scope().element_config();
//!     let a = container.scope_mut().shared_element(Block::fill("a"), config)?;
//!     let config = container.scope().element_config();
//!     let b = container.scope_mut().shared_element(Block::fill("b"), config)?;
//!     let bounds = Constraints::new(400, 400, 0, 800);
//!
//!     // A above B
//!     let item = |id| SizedBox::fixed(200, 80).with_child(element(id));
//!     container.push_child(Linear::column().with_child(item(a)).with_child(item(b)));
//!     container.layout(bounds);
//!     runtime.advance(Duration::from_millis(16));
//!
//!     // A beside B; B starts gliding from (0, 80) to (200, 0)
//!     container.clear_children();
//!     container.push_child(
//!         Linear::row()
//!             .with_weighted_child(Linear::column().with_child(item(a)), 1.0)
//!             .with_weighted_child(Linear::column().with_child(item(b)), 1.0),
//!     );
//!     for _ in 0..40 {
//!         container.layout(bounds);
//!         runtime.advance(Duration::from_millis(16));
//!     }
//!     container.layout(bounds);
//!     assert_eq!(container.placement("b").map(|p| p.rect.origin), Some(Offset::new(200, 0)));
//!     Ok(())
//! }
//! ```

pub use horizon_lookahead_core::*;

pub mod animation;
pub mod config;
pub mod geometry;
pub mod layout;
pub mod transition;
