//! Ownership of the elements the face has put on its surface.

use dial_engine::scene::{DrawSurface, Handle};

/// Owning slot for one dynamic primitive.
///
/// Holds at most one handle. Replacing the content always removes the old
/// element from the surface before the new one is drawn.
#[derive(Debug, Default)]
pub(crate) struct Slot(Option<Handle>);

impl Slot {
    #[inline]
    pub(crate) fn get(&self) -> Option<&Handle> {
        self.0.as_ref()
    }

    #[inline]
    pub(crate) fn is_live(&self) -> bool {
        self.0.is_some()
    }

    /// Removes the current element, if any.
    pub(crate) fn release<S: DrawSurface + ?Sized>(&mut self, surface: &mut S) {
        if let Some(handle) = self.0.take() {
            surface.remove(handle);
        }
    }

    /// Releases the current element, then stores the one `draw` creates.
    pub(crate) fn replace<S, F>(&mut self, surface: &mut S, draw: F) -> &Handle
    where
        S: DrawSurface + ?Sized,
        F: FnOnce(&mut S) -> Handle,
    {
        self.release(surface);
        self.0.insert(draw(surface))
    }
}

/// Elements redrawn on every tick.
#[derive(Debug, Default)]
pub(crate) struct DynamicPrimitives {
    pub(crate) hour_hand: Slot,
    pub(crate) minute_hand: Slot,
    pub(crate) second_hand: Slot,
    pub(crate) second_cap: Slot,
    pub(crate) digital_text: Slot,
}

impl DynamicPrimitives {
    fn slots_mut(&mut self) -> [&mut Slot; 5] {
        [
            &mut self.hour_hand,
            &mut self.minute_hand,
            &mut self.second_hand,
            &mut self.second_cap,
            &mut self.digital_text,
        ]
    }

    pub(crate) fn live_count(&self) -> usize {
        [
            &self.hour_hand,
            &self.minute_hand,
            &self.second_hand,
            &self.second_cap,
            &self.digital_text,
        ]
        .into_iter()
        .filter(|slot| slot.is_live())
        .count()
    }

    pub(crate) fn release_all<S: DrawSurface + ?Sized>(&mut self, surface: &mut S) {
        for slot in self.slots_mut() {
            slot.release(surface);
        }
    }
}

/// Elements drawn once at construction and afterwards only shown or hidden.
#[derive(Debug)]
pub(crate) struct StaticPrimitives {
    pub(crate) ticks: Vec<Handle>,
    pub(crate) labels: Vec<Handle>,
    pub(crate) bezel: Handle,
}

impl StaticPrimitives {
    pub(crate) fn set_labels_visible<S: DrawSurface + ?Sized>(&self, surface: &mut S, visible: bool) {
        for label in &self.labels {
            surface.set_visible(label, visible);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.ticks.len() + self.labels.len() + 1
    }

    pub(crate) fn release<S: DrawSurface + ?Sized>(self, surface: &mut S) {
        for handle in self.ticks.into_iter().chain(self.labels) {
            surface.remove(handle);
        }
        surface.remove(self.bezel);
    }
}

#[cfg(test)]
mod tests {
    use dial_engine::coords::Vec2;
    use dial_engine::paint::{Color, Stroke};
    use dial_engine::scene::{Scene, ZIndex};

    use super::*;

    fn draw(scene: &mut Scene) -> Handle {
        scene.draw_line(ZIndex(0), Vec2::zero(), Vec2::new(1.0, 0.0), Stroke::new(1.0, Color::BLACK))
    }

    #[test]
    fn replace_releases_previous_element() {
        let mut scene = Scene::new();
        let mut slot = Slot::default();

        let first = slot.replace(&mut scene, draw).id();
        let second = slot.replace(&mut scene, draw).id();

        assert_ne!(first, second);
        assert_eq!(scene.len(), 1);
        assert!(scene.contains(&Handle::from_raw(second)));
        assert!(!scene.contains(&Handle::from_raw(first)));
    }

    #[test]
    fn release_empties_slot_once() {
        let mut scene = Scene::new();
        let mut slot = Slot::default();
        slot.replace(&mut scene, draw);

        slot.release(&mut scene);
        slot.release(&mut scene);
        assert!(!slot.is_live());
        assert_eq!(scene.stats().removed, 1);
    }

    #[test]
    fn release_all_clears_every_slot() {
        let mut scene = Scene::new();
        let mut dynamics = DynamicPrimitives::default();
        dynamics.hour_hand.replace(&mut scene, draw);
        dynamics.digital_text.replace(&mut scene, draw);
        assert_eq!(dynamics.live_count(), 2);

        dynamics.release_all(&mut scene);
        assert_eq!(dynamics.live_count(), 0);
        assert!(scene.is_empty());
    }
}
