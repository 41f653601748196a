use std::collections::HashMap;

use crate::coords::Vec2;
use crate::paint::Stroke;

use super::shapes::{CircleCmd, CircleStyle, LineCmd, TextCmd, TextStyle};
use super::{DrawCmd, DrawSurface, Handle, SortKey, ZIndex};

/// A single live element: paint-order key + command + visibility.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
    pub visible: bool,
}

/// Lifetime counters of a [`Scene`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct SceneStats {
    /// Elements ever drawn.
    pub created: u64,
    /// Elements removed through their handle.
    pub removed: u64,
    /// Elements currently on the surface.
    pub live: usize,
}

/// In-memory retained implementation of [`DrawSurface`].
///
/// Performance characteristics:
/// - draw / remove / visibility changes are O(1)
/// - paint-order iteration reuses an internal id buffer; it is only re-sorted
///   after the set of live elements changed
#[derive(Debug, Default)]
pub struct Scene {
    items: HashMap<u64, SceneItem>,
    next_id: u64,
    removed: u64,

    sorted_ids: Vec<u64>,
    sorted_dirty: bool,
}

impl Scene {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live elements (visible or hidden).
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn contains(&self, handle: &Handle) -> bool {
        self.items.contains_key(&handle.id())
    }

    #[inline]
    pub fn get(&self, handle: &Handle) -> Option<&SceneItem> {
        self.items.get(&handle.id())
    }

    pub fn stats(&self) -> SceneStats {
        SceneStats {
            created: self.next_id,
            removed: self.removed,
            live: self.items.len(),
        }
    }

    /// Iterates live elements (including hidden ones) in paint order (back-to-front).
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &SceneItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_ids();
        }

        self.sorted_ids.iter().filter_map(|id| self.items.get(id))
    }

    /// Iterates only the visible elements in paint order.
    pub fn visible_in_paint_order(&mut self) -> impl Iterator<Item = &SceneItem> {
        self.iter_in_paint_order().filter(|item| item.visible)
    }

    fn insert(&mut self, z: ZIndex, cmd: DrawCmd) -> Handle {
        let id = self.next_id;
        self.next_id += 1;

        log::trace!("scene: draw {} #{id} at z={}", cmd.kind(), z.0);
        self.items.insert(
            id,
            SceneItem {
                key: SortKey::new(z, id),
                cmd,
                visible: true,
            },
        );
        self.sorted_dirty = true;

        Handle::from_raw(id)
    }

    fn rebuild_sorted_ids(&mut self) {
        self.sorted_ids.clear();
        self.sorted_ids.extend(self.items.keys().copied());

        let items = &self.items;
        self.sorted_ids.sort_by_key(|id| items[id].key);

        self.sorted_dirty = false;
    }
}

impl DrawSurface for Scene {
    fn draw_line(&mut self, z: ZIndex, from: Vec2, to: Vec2, stroke: Stroke) -> Handle {
        self.insert(z, DrawCmd::Line(LineCmd::new(from, to, stroke)))
    }

    fn draw_circle(&mut self, z: ZIndex, center: Vec2, radius: f32, style: CircleStyle) -> Handle {
        self.insert(z, DrawCmd::Circle(CircleCmd::new(center, radius, style)))
    }

    fn draw_text(&mut self, z: ZIndex, content: &str, center: Vec2, style: &TextStyle) -> Handle {
        self.insert(
            z,
            DrawCmd::Text(TextCmd {
                text: content.to_owned(),
                center,
                style: style.clone(),
            }),
        )
    }

    fn update_text(&mut self, handle: &Handle, content: &str) {
        match self.items.get_mut(&handle.id()).map(|item| &mut item.cmd) {
            Some(DrawCmd::Text(text)) => {
                text.text.clear();
                text.text.push_str(content);
            }
            Some(other) => {
                log::warn!("scene: update_text on {} #{}, ignored", other.kind(), handle.id());
            }
            None => log::warn!("scene: update_text on unknown element #{}", handle.id()),
        }
    }

    fn set_visible(&mut self, handle: &Handle, visible: bool) {
        match self.items.get_mut(&handle.id()) {
            Some(item) => item.visible = visible,
            None => log::warn!("scene: set_visible on unknown element #{}", handle.id()),
        }
    }

    fn remove(&mut self, handle: Handle) {
        if self.items.remove(&handle.id()).is_some() {
            self.removed += 1;
            self.sorted_dirty = true;
            log::trace!("scene: removed #{}", handle.id());
        } else {
            log::warn!("scene: remove of unknown element #{}", handle.id());
        }
    }
}
