//! The tagged-child registry.
//!
//! One registry per transition scope maps each shared element's [`ChildId`]
//! to its offset and size animatables. Both are absent until the element has
//! been laid out once; the first observed target seeds them without
//! animating.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

use crate::animation::{Animatable, Animate};
use crate::geometry::{Offset, Size};

use horizon_lookahead_core::logging::targets;

new_key_type! {
    /// Stable identity of a shared element within its scope.
    ///
    /// Keys are versioned: once an element is detached its id never matches
    /// a later element, even if the slot is reused.
    pub struct ChildId;
}

/// One of the two independently animated axes of a shared element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Position in container coordinates.
    Offset,
    /// Measured size.
    Size,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Offset => f.write_str("offset"),
            Axis::Size => f.write_str("size"),
        }
    }
}

/// The animatables of one shared element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransitionSlot {
    offset: Option<Animatable<Offset>>,
    size: Option<Animatable<Size>>,
}

impl TransitionSlot {
    /// The offset animatable, once seeded.
    #[inline]
    pub fn offset(&self) -> Option<&Animatable<Offset>> {
        self.offset.as_ref()
    }

    /// The size animatable, once seeded.
    #[inline]
    pub fn size(&self) -> Option<&Animatable<Size>> {
        self.size.as_ref()
    }

    /// Whether either axis is animating.
    pub fn is_running(&self) -> bool {
        self.offset.is_some_and(|a| a.is_running()) || self.size.is_some_and(|a| a.is_running())
    }
}

/// A value type animated on one axis of a [`TransitionSlot`].
pub(crate) trait AxisValue: Animate + fmt::Debug + Send + Sync + 'static {
    const AXIS: Axis;

    fn this(slot: &mut TransitionSlot) -> &mut Option<Animatable<Self>>;

    fn other_running(slot: &TransitionSlot) -> bool;
}

impl AxisValue for Offset {
    const AXIS: Axis = Axis::Offset;

    fn this(slot: &mut TransitionSlot) -> &mut Option<Animatable<Self>> {
        &mut slot.offset
    }

    fn other_running(slot: &TransitionSlot) -> bool {
        slot.size.is_some_and(|a| a.is_running())
    }
}

impl AxisValue for Size {
    const AXIS: Axis = Axis::Size;

    fn this(slot: &mut TransitionSlot) -> &mut Option<Animatable<Self>> {
        &mut slot.size
    }

    fn other_running(slot: &TransitionSlot) -> bool {
        slot.offset.is_some_and(|a| a.is_running())
    }
}

/// What [`TransitionRegistry::begin`] did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Begin<T> {
    /// The element is gone.
    Detached,
    /// First target for this axis: the animatable was created at it.
    Seeded,
    /// An interpolation should run from `from`.
    Started { from: T, other_running: bool },
}

/// Maps shared element identities to their animatables.
#[derive(Debug, Default)]
pub struct TransitionRegistry {
    slots: SlotMap<ChildId, TransitionSlot>,
}

/// A registry shared between a scope and its elements' axis tasks.
pub type SharedRegistry = Arc<Mutex<TransitionRegistry>>;

impl TransitionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry ready to share.
    pub fn shared() -> SharedRegistry {
        Arc::new(Mutex::new(Self::new()))
    }

    /// Reserve an identity with no animatables yet.
    pub(crate) fn attach(&mut self) -> ChildId {
        let id = self.slots.insert(TransitionSlot::default());
        tracing::trace!(target: targets::REGISTRY, ?id, "attached element");
        id
    }

    /// Remove an identity and its animatables.
    pub(crate) fn detach(&mut self, id: ChildId) -> bool {
        let removed = self.slots.remove(id).is_some();
        if removed {
            tracing::trace!(target: targets::REGISTRY, ?id, "detached element");
        }
        removed
    }

    /// Whether `id` is attached.
    #[inline]
    pub fn contains(&self, id: ChildId) -> bool {
        self.slots.contains_key(id)
    }

    /// Number of attached elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no element is attached.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The animatables of `id`.
    pub fn slot(&self, id: ChildId) -> Option<&TransitionSlot> {
        self.slots.get(id)
    }

    /// Current animated offset of `id`, once seeded.
    pub fn offset(&self, id: ChildId) -> Option<Offset> {
        self.slots.get(id)?.offset.map(|a| a.value())
    }

    /// Current animated size of `id`, once seeded.
    pub fn size(&self, id: ChildId) -> Option<Size> {
        self.slots.get(id)?.size.map(|a| a.value())
    }

    /// Whether either axis of `id` is animating.
    pub fn is_running(&self, id: ChildId) -> bool {
        self.slots.get(id).is_some_and(TransitionSlot::is_running)
    }

    /// Whether any attached element is animating.
    pub fn is_running_transition(&self) -> bool {
        self.slots.values().any(TransitionSlot::is_running)
    }

    /// Handle a new target on one axis of `id`.
    pub(crate) fn begin<T: AxisValue>(&mut self, id: ChildId, target: T) -> Begin<T> {
        let Some(slot) = self.slots.get_mut(id) else {
            return Begin::Detached;
        };
        let other_running = T::other_running(slot);
        let this = T::this(slot);
        if let Some(animatable) = this.as_mut() {
            return Begin::Started {
                from: animatable.begin(target),
                other_running,
            };
        }
        *this = Some(Animatable::new(target));
        tracing::trace!(target: targets::REGISTRY, ?id, axis = %T::AXIS, value = ?target, "seeded");
        Begin::Seeded
    }

    /// Write an intermediate value. Returns `false` if `id` is gone.
    pub(crate) fn advance<T: AxisValue>(&mut self, id: ChildId, value: T) -> bool {
        match self.slots.get_mut(id).and_then(|slot| T::this(slot).as_mut()) {
            Some(animatable) => {
                animatable.set_value(value);
                true
            }
            None => false,
        }
    }

    /// Finish one axis of `id` at its target.
    ///
    /// Returns whether the other axis is still running, or `None` if `id` is
    /// gone.
    pub(crate) fn settle<T: AxisValue>(&mut self, id: ChildId) -> Option<bool> {
        let slot = self.slots.get_mut(id)?;
        T::this(slot).as_mut()?.settle();
        Some(T::other_running(slot))
    }

    /// Point a running axis of `id` at a new target without stopping it.
    ///
    /// Returns the value to continue from and whether the other axis is
    /// running, or `None` if `id` is gone. The axis never reads as idle in
    /// between, so the other axis cannot settle into a joint finish.
    pub(crate) fn retarget<T: AxisValue>(&mut self, id: ChildId, target: T) -> Option<(T, bool)> {
        let slot = self.slots.get_mut(id)?;
        let other_running = T::other_running(slot);
        let from = T::this(slot).as_mut()?.begin(target);
        Some((from, other_running))
    }
}

static_assertions::assert_impl_all!(TransitionRegistry: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attach_has_no_animatables() {
        let mut registry = TransitionRegistry::new();
        let id = registry.attach();
        assert!(registry.contains(id));
        assert_eq!(registry.offset(id), None);
        assert_eq!(registry.size(id), None);
        assert!(!registry.is_running_transition());
    }

    #[test]
    fn test_first_target_seeds() {
        let mut registry = TransitionRegistry::new();
        let id = registry.attach();
        assert_eq!(registry.begin(id, Offset::new(0, 80)), Begin::Seeded);
        assert_eq!(registry.offset(id), Some(Offset::new(0, 80)));
        assert!(!registry.is_running(id));
    }

    #[test]
    fn test_begin_reports_other_axis() {
        let mut registry = TransitionRegistry::new();
        let id = registry.attach();
        registry.begin(id, Offset::ZERO);
        registry.begin(id, Size::new(10, 10));

        assert_eq!(
            registry.begin(id, Offset::new(5, 0)),
            Begin::Started {
                from: Offset::ZERO,
                other_running: false
            }
        );
        assert_eq!(
            registry.begin(id, Size::new(20, 20)),
            Begin::Started {
                from: Size::new(10, 10),
                other_running: true
            }
        );
        assert!(registry.is_running_transition());

        assert_eq!(registry.settle::<Offset>(id), Some(true));
        assert_eq!(registry.settle::<Size>(id), Some(false));
        assert_eq!(registry.offset(id), Some(Offset::new(5, 0)));
        assert_eq!(registry.size(id), Some(Size::new(20, 20)));
        assert!(!registry.is_running_transition());
    }

    #[test]
    fn test_absent_other_axis_is_not_running() {
        let mut registry = TransitionRegistry::new();
        let id = registry.attach();
        registry.begin(id, Offset::ZERO);
        assert!(matches!(
            registry.begin(id, Offset::new(1, 1)),
            Begin::Started {
                other_running: false,
                ..
            }
        ));
        assert_eq!(registry.retarget(id, Offset::new(2, 2)), Some((Offset::ZERO, false)));
    }

    #[test]
    fn test_retarget_continues_from_current_value() {
        let mut registry = TransitionRegistry::new();
        let id = registry.attach();
        registry.begin(id, Offset::ZERO);
        registry.begin(id, Offset::new(100, 0));
        assert!(registry.advance(id, Offset::new(40, 0)));

        assert_eq!(registry.retarget(id, Offset::new(0, 50)), Some((Offset::new(40, 0), false)));
        assert_eq!(registry.offset(id), Some(Offset::new(40, 0)));
        assert!(registry.is_running(id));
    }

    #[test]
    fn test_settle_during_retarget_sees_axis_running() {
        let mut registry = TransitionRegistry::new();
        let id = registry.attach();
        registry.begin(id, Offset::ZERO);
        registry.begin(id, Size::new(10, 10));
        registry.begin(id, Offset::new(100, 0));
        registry.begin(id, Size::new(20, 20));

        assert_eq!(registry.retarget(id, Offset::new(0, 100)), Some((Offset::ZERO, true)));
        // The size axis finishing right after must not count as a joint finish
        assert_eq!(registry.settle::<Size>(id), Some(true));
        assert!(registry.is_running(id));
        assert_eq!(registry.settle::<Offset>(id), Some(false));
        assert!(!registry.is_running_transition());
    }

    #[test]
    fn test_detach_removes_and_never_aliases() {
        let mut registry = TransitionRegistry::new();
        let old = registry.attach();
        registry.begin(old, Offset::new(3, 3));
        assert!(registry.detach(old));
        assert!(!registry.detach(old));

        let new = registry.attach();
        assert_ne!(old, new);
        assert!(!registry.contains(old));
        assert_eq!(registry.offset(new), None);
        assert_eq!(registry.begin(old, Offset::ZERO), Begin::Detached);
        assert!(!registry.advance(old, Offset::ZERO));
        assert_eq!(registry.settle::<Offset>(old), None);
    }

    #[test]
    fn test_axis_display() {
        assert_eq!(Axis::Offset.to_string(), "offset");
        assert_eq!(Axis::Size.to_string(), "size");
    }
}
