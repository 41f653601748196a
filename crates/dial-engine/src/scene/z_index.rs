use core::cmp::Ordering;

/// Z-ordering layer for scene elements.
///
/// Higher values appear on top of lower values.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct ZIndex(pub i32);

impl ZIndex {
    #[inline]
    pub const fn new(v: i32) -> Self {
        Self(v)
    }
}

impl Ord for ZIndex {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl PartialOrd for ZIndex {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Stable paint-order key for scene elements.
///
/// Ordering rules:
/// 1) `z`: ascending (back-to-front)
/// 2) `order`: ascending (creation order for equal z)
///
/// A replaced element gets a fresh `order`, so a hand redrawn every tick stays
/// above everything created earlier on the same layer.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct SortKey {
    /// Layer. Lower values are painted first (further back).
    pub z: ZIndex,
    /// Creation index, ensuring stable ordering within a layer.
    pub order: u64,
}

impl SortKey {
    #[inline]
    pub const fn new(z: ZIndex, order: u64) -> Self {
        Self { z, order }
    }
}
