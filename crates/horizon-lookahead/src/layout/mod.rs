//! Layout nodes for building trees that a transition container lays out.
//!
//! Every node implements [`LayoutNode`]: it is measured against
//! [`Constraints`](crate::geometry::Constraints) and then placed at an offset
//! in container coordinates. The container runs this twice per frame, once
//! for the lookahead pass and once for the placement pass, with a
//! [`LayoutContext`] telling nodes which pass is running.
//!
//! # Built-in Nodes
//!
//! - [`Linear`] - Rows and columns, with optional weights
//! - [`SizedBox`] - Fixed or filling size
//! - [`Padding`] - Insets around a child
//! - [`Translate`] - Shifts a child without affecting layout
//! - [`Center`] - Centers a child in the available space
//! - [`Overlay`] - Stacks children at one position
//! - [`Block`] - Labelled leaf recorded as a [`Placement`]
//! - [`ElementSlot`] - Where a shared element sits in the tree, see [`element`]

mod leaf;
mod linear;
mod modifiers;
mod node;

pub use leaf::Block;
pub use linear::{Alignment, Linear, Orientation};
pub use modifiers::{Center, Dimension, Insets, Overlay, Padding, SizedBox, Translate};
pub use node::{ElementSlot, LayoutContext, LayoutNode, LayoutPass, Placement, element};
