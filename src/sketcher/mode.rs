/// Layout options a fragment is created with.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayoutMode {
    /// Prefer flipping the side of a bond that has no marked atoms, keeping the marked core in
    /// place.
    pub consider_marked_atoms: bool,
}
impl LayoutMode {
    pub const fn new() -> Self {
        Self {
            consider_marked_atoms: false,
        }
    }
    pub const fn considering_marked_atoms(self, consider: bool) -> Self {
        Self {
            consider_marked_atoms: consider,
        }
    }
}
