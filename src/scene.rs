//! Page geometry as seen by the effects.
//!
//! The engine never talks to a real document tree. Hosts expose whatever they
//! render through the [`Scene`] trait: per-element bounds in viewport
//! coordinates, parent links, and capability flags. [`SceneGraph`] is a
//! retained implementation of that trait for hosts that don't have their own
//! element store, and for tests.

use bitflags::bitflags;

use crate::geometry::Rect;

bitflags! {
    /// Capabilities a scene element advertises to the effects.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct ElementFlags: u8 {
        /// The target cursor may lock onto this element
        const TARGETABLE = 0b001;
        /// The element participates in magnetic hover
        const MAGNETIC   = 0b010;
        /// Excluded from hit-testing (together with its subtree)
        const HIDDEN     = 0b100;
    }
}

/// Unique identifier for an element in a scene
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ElementId(u64);

/// Host-provided view of the page the effects decorate.
pub trait Scene {
    /// Bounding rectangle in viewport coordinates, if the element exists
    fn bounds(&self, element: ElementId) -> Option<Rect>;
    /// Parent element, `None` at the root
    fn parent(&self, element: ElementId) -> Option<ElementId>;
    /// Capability flags; unknown elements report no capabilities
    fn flags(&self, element: ElementId) -> ElementFlags;
    /// Topmost element at a viewport position (innermost wins on overlap)
    fn element_at(&self, x: f32, y: f32) -> Option<ElementId>;
}

struct ElementRecord {
    parent: Option<ElementId>,
    bounds: Rect,
    flags: ElementFlags,
    depth: u32,
}

/// Retained element store implementing [`Scene`].
///
/// Insertion order doubles as stacking order: when overlapping elements sit
/// at the same depth, the later-inserted one wins hit-testing.
#[derive(Default)]
pub struct SceneGraph {
    elements: Vec<Option<ElementRecord>>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(
        &mut self,
        parent: Option<ElementId>,
        bounds: Rect,
        flags: ElementFlags,
    ) -> ElementId {
        let depth = parent
            .and_then(|p| self.record(p))
            .map_or(0, |record| record.depth + 1);
        self.elements.push(Some(ElementRecord {
            parent,
            bounds,
            flags,
            depth,
        }));
        ElementId(self.elements.len() as u64)
    }

    /// Drop an element. Children keep their slots; their parent lookups
    /// simply stop resolving.
    pub fn remove(&mut self, element: ElementId) {
        if let Some(slot) = self.slot(element) {
            self.elements[slot] = None;
        }
    }

    pub fn set_bounds(&mut self, element: ElementId, bounds: Rect) {
        if let Some(record) = self.record_mut(element) {
            record.bounds = bounds;
        }
    }

    pub fn set_flags(&mut self, element: ElementId, flags: ElementFlags) {
        if let Some(record) = self.record_mut(element) {
            record.flags = flags;
        }
    }

    /// Scroll the page content by (dx, dy): every element shifts the
    /// opposite way in viewport coordinates.
    pub fn scroll_by(&mut self, dx: f32, dy: f32) {
        for record in self.elements.iter_mut().flatten() {
            record.bounds = record.bounds.offset(-dx, -dy);
        }
    }

    fn slot(&self, element: ElementId) -> Option<usize> {
        let index = element.0.checked_sub(1)? as usize;
        if index < self.elements.len() {
            Some(index)
        } else {
            None
        }
    }

    fn record(&self, element: ElementId) -> Option<&ElementRecord> {
        self.slot(element).and_then(|i| self.elements[i].as_ref())
    }

    fn record_mut(&mut self, element: ElementId) -> Option<&mut ElementRecord> {
        let slot = self.slot(element)?;
        self.elements[slot].as_mut()
    }

    fn is_visible(&self, element: ElementId) -> bool {
        let mut current = Some(element);
        while let Some(el) = current {
            let Some(record) = self.record(el) else {
                return false;
            };
            if record.flags.contains(ElementFlags::HIDDEN) {
                return false;
            }
            current = record.parent;
        }
        true
    }
}

impl Scene for SceneGraph {
    fn bounds(&self, element: ElementId) -> Option<Rect> {
        self.record(element).map(|record| record.bounds)
    }

    fn parent(&self, element: ElementId) -> Option<ElementId> {
        self.record(element).and_then(|record| record.parent)
    }

    fn flags(&self, element: ElementId) -> ElementFlags {
        self.record(element)
            .map_or(ElementFlags::empty(), |record| record.flags)
    }

    fn element_at(&self, x: f32, y: f32) -> Option<ElementId> {
        let mut best: Option<(u32, ElementId)> = None;
        for (index, record) in self.elements.iter().enumerate() {
            let Some(record) = record else { continue };
            let id = ElementId(index as u64 + 1);
            if !record.bounds.contains(x, y) || !self.is_visible(id) {
                continue;
            }
            // Deeper wins; at equal depth the later-inserted element wins.
            if best.map_or(true, |(depth, _)| record.depth >= depth) {
                best = Some((record.depth, id));
            }
        }
        best.map(|(_, id)| id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_lookup() {
        let mut scene = SceneGraph::new();
        let root = scene.insert(None, Rect::new(0.0, 0.0, 800.0, 600.0), ElementFlags::empty());
        let child = scene.insert(
            Some(root),
            Rect::new(10.0, 10.0, 100.0, 50.0),
            ElementFlags::TARGETABLE,
        );

        assert_eq!(scene.bounds(child), Some(Rect::new(10.0, 10.0, 100.0, 50.0)));
        assert_eq!(scene.parent(child), Some(root));
        assert_eq!(scene.parent(root), None);
        assert!(scene.flags(child).contains(ElementFlags::TARGETABLE));
        assert!(!scene.flags(root).contains(ElementFlags::TARGETABLE));
    }

    #[test]
    fn test_element_at_prefers_innermost() {
        let mut scene = SceneGraph::new();
        let outer = scene.insert(None, Rect::new(0.0, 0.0, 200.0, 200.0), ElementFlags::empty());
        let inner = scene.insert(
            Some(outer),
            Rect::new(50.0, 50.0, 100.0, 100.0),
            ElementFlags::empty(),
        );

        assert_eq!(scene.element_at(100.0, 100.0), Some(inner));
        assert_eq!(scene.element_at(10.0, 10.0), Some(outer));
        assert_eq!(scene.element_at(500.0, 500.0), None);
    }

    #[test]
    fn test_element_at_prefers_later_sibling() {
        let mut scene = SceneGraph::new();
        let _under = scene.insert(None, Rect::new(0.0, 0.0, 100.0, 100.0), ElementFlags::empty());
        let over = scene.insert(None, Rect::new(0.0, 0.0, 100.0, 100.0), ElementFlags::empty());

        assert_eq!(scene.element_at(50.0, 50.0), Some(over));
    }

    #[test]
    fn test_hidden_excludes_subtree() {
        let mut scene = SceneGraph::new();
        let outer = scene.insert(None, Rect::new(0.0, 0.0, 200.0, 200.0), ElementFlags::HIDDEN);
        let inner = scene.insert(
            Some(outer),
            Rect::new(50.0, 50.0, 100.0, 100.0),
            ElementFlags::empty(),
        );

        assert_eq!(scene.element_at(100.0, 100.0), None);
        assert_eq!(scene.element_at(10.0, 10.0), None);

        scene.set_flags(outer, ElementFlags::empty());
        assert_eq!(scene.element_at(100.0, 100.0), Some(inner));
    }

    #[test]
    fn test_remove_clears_element() {
        let mut scene = SceneGraph::new();
        let el = scene.insert(None, Rect::new(0.0, 0.0, 50.0, 50.0), ElementFlags::TARGETABLE);
        scene.remove(el);

        assert_eq!(scene.bounds(el), None);
        assert_eq!(scene.element_at(25.0, 25.0), None);
        assert_eq!(scene.flags(el), ElementFlags::empty());
    }

    #[test]
    fn test_scroll_shifts_bounds() {
        let mut scene = SceneGraph::new();
        let el = scene.insert(None, Rect::new(100.0, 100.0, 50.0, 50.0), ElementFlags::empty());

        scene.scroll_by(0.0, 40.0);
        assert_eq!(scene.bounds(el), Some(Rect::new(100.0, 60.0, 50.0, 50.0)));

        scene.scroll_by(-20.0, 0.0);
        assert_eq!(scene.bounds(el), Some(Rect::new(120.0, 60.0, 50.0, 50.0)));
    }
}
