/// Ownership token for one element drawn on a [`DrawSurface`](super::DrawSurface).
///
/// Handles are deliberately neither `Copy` nor `Clone`: whoever holds the handle
/// owns the element, and [`DrawSurface::remove`](super::DrawSurface::remove) consumes
/// it. Once an element is removed there is no token left to reference it.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Handle {
    id: u64,
}

impl Handle {
    /// Wraps a surface-assigned identifier.
    ///
    /// Only surface implementations should mint handles; ids must be unique for
    /// the lifetime of the surface.
    #[inline]
    pub const fn from_raw(id: u64) -> Self {
        Self { id }
    }

    #[inline]
    pub const fn id(&self) -> u64 {
        self.id
    }
}
