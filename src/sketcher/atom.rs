#[derive(Debug, Default, Clone, PartialEq)]
pub struct Atom {
    pub atom_number: u8,
    /// Set for atoms carrying substructure query features, which get drawn with extra labels.
    pub query_features: bool,
    /// Core atoms that should stay in place when a side of a bond gets flipped.
    pub marked: bool,
    pub(crate) neighbors: Vec<usize>,
    pub(crate) bonds: Vec<usize>,
}
impl Atom {
    pub fn new(atom_number: u8) -> Self {
        Self {
            atom_number,
            ..Self::default()
        }
    }
    pub fn neighbors(&self) -> &[usize] {
        &self.neighbors
    }
    pub fn bonds(&self) -> &[usize] {
        &self.bonds
    }
}
