use super::*;
use std::fmt::Debug;

/// Read-only view of a molecule's connectivity and the atom flags the layout code cares about.
///
/// Atoms and bonds are addressed by dense indices starting at 0.
pub trait MoleculeGraph: Debug {
    fn atom_count(&self) -> usize;
    fn bond_count(&self) -> usize;
    fn neighbor_count(&self, atom: usize) -> usize;
    /// The `n`th neighbor of `atom`.
    fn neighbor(&self, atom: usize, n: usize) -> usize;
    /// The bond connecting `atom` to its `n`th neighbor.
    fn neighbor_bond(&self, atom: usize, n: usize) -> usize;
    /// Atom `n` (0 or 1) of `bond`.
    fn bond_atom(&self, bond: usize, n: usize) -> usize;
    fn atomic_number(&self, atom: usize) -> u8;
    fn has_query_features(&self, atom: usize) -> bool;
    fn is_marked(&self, atom: usize) -> bool;
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Molecule {
    pub atoms: Vec<Atom>,
    pub bonds: Vec<Bond>,
}
impl Molecule {
    /// Rebuild every atom's neighbor and bond lists from the bond table.
    pub fn update_connectivity(&mut self) {
        for a in &mut self.atoms {
            a.bonds.clear();
            a.neighbors.clear();
        }
        for (n, b) in self.bonds.iter().enumerate() {
            let start = &mut self.atoms[b.start];
            start.bonds.push(n);
            start.neighbors.push(b.end);
            let end = &mut self.atoms[b.end];
            end.bonds.push(n);
            end.neighbors.push(b.start);
        }
    }
}
impl MoleculeGraph for Molecule {
    fn atom_count(&self) -> usize {
        self.atoms.len()
    }
    fn bond_count(&self) -> usize {
        self.bonds.len()
    }
    fn neighbor_count(&self, atom: usize) -> usize {
        self.atoms[atom].neighbors.len()
    }
    fn neighbor(&self, atom: usize, n: usize) -> usize {
        self.atoms[atom].neighbors[n]
    }
    fn neighbor_bond(&self, atom: usize, n: usize) -> usize {
        self.atoms[atom].bonds[n]
    }
    fn bond_atom(&self, bond: usize, n: usize) -> usize {
        self.bonds[bond].atom(n)
    }
    fn atomic_number(&self, atom: usize) -> u8 {
        self.atoms[atom].atom_number
    }
    fn has_query_features(&self, atom: usize) -> bool {
        self.atoms[atom].query_features
    }
    fn is_marked(&self, atom: usize) -> bool {
        self.atoms[atom].marked
    }
}
