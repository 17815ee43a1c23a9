#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bond {
    pub start: usize,
    pub end: usize,
    pub bond_order: u8,
}
impl Bond {
    pub const fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            bond_order: 1,
        }
    }
    /// Get the `n`th atom of the bond, 0 for the start and anything else for the end.
    pub const fn atom(&self, n: usize) -> usize {
        if n == 0 {
            self.start
        } else {
            self.end
        }
    }
}
