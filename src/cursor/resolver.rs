//! Maps a raw hover element to the targetable element the cursor locks onto.

use crate::scene::{ElementFlags, ElementId, Scene};

/// Walk from `element` up the ancestor chain (inclusive) and return the
/// first targetable element. Nested targetable regions therefore resolve to
/// the innermost one, by depth rather than by area.
pub fn resolve_target<S>(scene: &S, element: ElementId) -> Option<ElementId>
where
    S: Scene + ?Sized,
{
    let mut current = Some(element);
    while let Some(el) = current {
        if scene.flags(el).contains(ElementFlags::TARGETABLE) {
            return Some(el);
        }
        current = scene.parent(el);
    }
    None
}
