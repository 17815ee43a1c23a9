use super::*;

/// Incrementally assemble a [`Molecule`], keeping connectivity in sync.
#[derive(Debug, Default)]
pub struct Builder {
    mol: Molecule,
}
impl Builder {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn add_atom(&mut self, atom_number: u8) -> usize {
        self.mol.atoms.push(Atom::new(atom_number));
        self.mol.atoms.len() - 1
    }
    /// Add an atom flagged as part of the core that flips should keep in place.
    pub fn add_marked_atom(&mut self, atom_number: u8) -> usize {
        let idx = self.add_atom(atom_number);
        self.mol.atoms[idx].marked = true;
        idx
    }
    /// Add an atom carrying query features.
    pub fn add_query_atom(&mut self, atom_number: u8) -> usize {
        let idx = self.add_atom(atom_number);
        self.mol.atoms[idx].query_features = true;
        idx
    }
    pub fn add_bond(&mut self, start: usize, end: usize, order: u8) -> usize {
        let idx = self.mol.bonds.len();
        self.mol.bonds.push(Bond {
            bond_order: order,
            ..Bond::new(start, end)
        });
        let s = &mut self.mol.atoms[start];
        s.neighbors.push(end);
        s.bonds.push(idx);
        let e = &mut self.mol.atoms[end];
        e.neighbors.push(start);
        e.bonds.push(idx);
        idx
    }
    pub fn finish(self) -> Molecule {
        self.mol
    }
}
