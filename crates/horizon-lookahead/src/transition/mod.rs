//! Shared element transitions.
//!
//! A [`TransitionContainer`] runs a lookahead pass and a placement pass over
//! its children each frame. Children wrapped with
//! [`TransitionScope::shared_element`] learn their eventual size and
//! position from the lookahead pass and animate toward it, one tokio task
//! per axis, while the placement pass draws them at their current animated
//! geometry.
//!
//! ```text
//! lookahead pass ──targets──▶ axis tasks ──animated values──▶ registry
//!                                                               │
//! placement pass ◀──────────────────────────────────────────────┘
//! ```

mod container;
mod driver;
mod registry;
mod scope;
mod shared_element;
mod signals;

pub use container::{LookaheadResult, TransitionContainer};
pub use registry::{Axis, ChildId, SharedRegistry, TransitionRegistry, TransitionSlot};
pub use scope::TransitionScope;
pub use shared_element::SharedElement;
pub use signals::TransitionSignals;
