//! The scope that owns a container's shared elements.

use std::sync::Arc;

use slotmap::SecondaryMap;
use tokio::runtime::Handle;

use horizon_lookahead_core::logging::targets;
use horizon_lookahead_core::runtime::current_handle;
use horizon_lookahead_core::{LookaheadError, Result};

use crate::config::{SharedElementConfig, TransitionConfig};
use crate::geometry::Rect;
use crate::layout::LayoutNode;

use super::registry::{ChildId, SharedRegistry, TransitionRegistry};
use super::shared_element::SharedElement;
use super::signals::TransitionSignals;

/// Owns the registry and the shared elements of one transition container.
///
/// Elements are kept here rather than in the layout tree, so the tree can be
/// rebuilt freely while each element, its animatables and its axis tasks
/// persist.
pub struct TransitionScope {
    registry: SharedRegistry,
    elements: SecondaryMap<ChildId, SharedElement>,
    handle: Handle,
    defaults: TransitionConfig,
}

impl TransitionScope {
    /// Create a scope whose axis tasks run on the current tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns [`LookaheadError::RuntimeUnavailable`] outside a runtime.
    pub fn new() -> Result<Self> {
        Ok(Self::with_handle(current_handle()?))
    }

    /// Create a scope whose axis tasks run on `handle`.
    pub fn with_handle(handle: Handle) -> Self {
        Self {
            registry: TransitionRegistry::shared(),
            elements: SecondaryMap::new(),
            handle,
            defaults: TransitionConfig::default(),
        }
    }

    /// Replace the defaults used by [`element_config`](Self::element_config).
    pub fn set_defaults(&mut self, defaults: TransitionConfig) {
        self.defaults = defaults;
    }

    /// The scope's defaults.
    #[inline]
    pub fn defaults(&self) -> &TransitionConfig {
        &self.defaults
    }

    /// A fresh element configuration starting from the scope's defaults.
    pub fn element_config(&self) -> SharedElementConfig {
        SharedElementConfig::from(&self.defaults)
    }

    /// Wrap `child` in a shared element and return its identity.
    ///
    /// The element animates nothing until it has been laid out twice with
    /// different results.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `config` holds a negative duration
    /// or a non-positive frame interval.
    pub fn shared_element(
        &mut self,
        child: impl LayoutNode + 'static,
        config: SharedElementConfig,
    ) -> Result<ChildId> {
        let (timing, signals) = config.into_parts()?;
        let id = self.registry.lock().attach();
        let element = SharedElement::spawn(
            &self.handle,
            id,
            Box::new(child),
            self.registry.clone(),
            timing,
            signals,
        );
        self.elements.insert(id, element);
        tracing::debug!(target: targets::TRANSITION, ?id, ?timing, "shared element attached");
        Ok(id)
    }

    /// Detach and drop the element `id`. Returns `false` if it was not
    /// attached.
    pub fn detach(&mut self, id: ChildId) -> bool {
        self.elements.remove(id).is_some()
    }

    /// Whether `id` is attached.
    #[inline]
    pub fn contains(&self, id: ChildId) -> bool {
        self.elements.contains_key(id)
    }

    /// Number of attached elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether no element is attached.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The element `id`.
    pub fn element(&self, id: ChildId) -> Option<&SharedElement> {
        self.elements.get(id)
    }

    /// Where the element `id` was last drawn.
    pub fn element_bounds(&self, id: ChildId) -> Option<Rect> {
        self.elements.get(id).map(SharedElement::bounds)
    }

    /// The lifecycle signals of element `id`.
    ///
    /// # Errors
    ///
    /// Returns [`LookaheadError::UnknownElement`] if `id` is not attached.
    pub fn signals(&self, id: ChildId) -> Result<Arc<TransitionSignals>> {
        self.elements
            .get(id)
            .map(|element| element.signals().clone())
            .ok_or_else(|| LookaheadError::UnknownElement(format!("{id:?}")))
    }

    /// Whether any element's offset or size is animating.
    pub fn is_running_transition(&self) -> bool {
        self.registry.lock().is_running_transition()
    }

    /// The registry shared with the axis tasks.
    #[inline]
    pub fn registry(&self) -> &SharedRegistry {
        &self.registry
    }

    /// The runtime the axis tasks run on.
    #[inline]
    pub fn handle(&self) -> &Handle {
        &self.handle
    }

    pub(crate) fn elements_mut(&mut self) -> &mut SecondaryMap<ChildId, SharedElement> {
        &mut self.elements
    }
}
