use crate::coordgen::{Bounds, FlipPlan};
use super::*;
use ahash::{AHashMap, AHashSet};
use std::cell::Cell;
use thiserror::Error;
use tracing::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FragmentError {
    #[error("atom {0} is not part of the molecule")]
    UnknownAtom(usize),
    #[error("atom {0} was added to the fragment twice")]
    DuplicateAtom(usize),
    #[error("the fragment's bonds have already been located")]
    AlreadyLocated,
    #[error("the fragment's bonds haven't been located yet")]
    NotLocated,
    #[error("bond {0} doesn't have both atoms in the fragment")]
    ForeignBond(usize),
    #[error("atom index {index} is out of range for a fragment of {len} atoms")]
    IndexOutOfRange { index: usize, len: usize },
}

/// A bond with both atoms in the fragment, along with the local indices of its atoms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LocatedBond {
    pub id: usize,
    pub first: usize,
    pub second: usize,
}

/// A set of atoms of a molecule being laid out together, with their own coordinates.
///
/// Atoms are referred to either by their index in the molecule ("atom") or by their position in
/// the fragment ("index"). Everything that takes a local index panics if it's out of range,
/// except [`Fragment::optimize_atom_coordinates`], which reports it.
#[derive(Debug)]
pub struct Fragment<'a> {
    mol: &'a dyn MoleculeGraph,
    mode: LayoutMode,
    atoms: Vec<usize>,
    coords: Vec<Point>,
    priority: Vec<i32>,
    bonds: Option<Vec<LocatedBond>>,
    atom_index: AHashMap<usize, usize>,
    pub(crate) flip_plans: AHashMap<usize, FlipPlan>,
    pub(crate) bounds: Cell<Option<Bounds>>,
    pub(crate) collision_penalty: f64,
}
impl<'a> Fragment<'a> {
    /// Create a fragment from the given atoms, with all coordinates at the origin.
    pub fn new<I: IntoIterator<Item = usize>>(
        mol: &'a dyn MoleculeGraph,
        atoms: I,
        mode: LayoutMode,
    ) -> Result<Self, FragmentError> {
        let atoms = atoms.into_iter().collect::<Vec<_>>();
        let mut seen = AHashSet::with_capacity(atoms.len());
        for &atom in &atoms {
            if atom >= mol.atom_count() {
                return Err(FragmentError::UnknownAtom(atom));
            }
            if !seen.insert(atom) {
                return Err(FragmentError::DuplicateAtom(atom));
            }
        }
        let len = atoms.len();
        Ok(Self {
            mol,
            mode,
            atoms,
            coords: vec![Point::default(); len],
            priority: vec![0; len],
            bonds: None,
            atom_index: AHashMap::new(),
            flip_plans: AHashMap::new(),
            bounds: Cell::new(None),
            collision_penalty: 0.0,
        })
    }
    /// Copy the atoms, coordinates, priorities and located bonds into a fragment with a
    /// different mode. Cached flip plans don't carry over.
    pub fn with_mode(&self, mode: LayoutMode) -> Self {
        Self {
            mol: self.mol,
            mode,
            atoms: self.atoms.clone(),
            coords: self.coords.clone(),
            priority: self.priority.clone(),
            bonds: self.bonds.clone(),
            atom_index: self.atom_index.clone(),
            flip_plans: AHashMap::new(),
            bounds: Cell::new(None),
            collision_penalty: 0.0,
        }
    }

    pub fn size(&self) -> usize {
        self.atoms.len()
    }
    pub fn molecule(&self) -> &'a dyn MoleculeGraph {
        self.mol
    }
    pub fn mode(&self) -> LayoutMode {
        self.mode
    }
    pub fn atoms(&self) -> &[usize] {
        &self.atoms
    }
    pub fn atom(&self, index: usize) -> usize {
        self.atoms[index]
    }
    pub fn is_member(&self, atom: usize) -> bool {
        self.atoms.contains(&atom)
    }
    /// Local index of `atom`, if it's part of this fragment.
    pub fn index_of(&self, atom: usize) -> Option<usize> {
        self.atoms.iter().position(|&a| a == atom)
    }
    pub fn positions(&self) -> &[Point] {
        &self.coords
    }
    pub fn position(&self, index: usize) -> Point {
        self.coords[index]
    }
    pub fn set_position(&mut self, index: usize, pos: Point) {
        self.coords[index] = pos;
        self.invalidate_bounds();
    }
    pub fn priority(&self, index: usize) -> i32 {
        self.priority[index]
    }
    pub fn set_priority(&mut self, index: usize, priority: i32) {
        self.priority[index] = priority;
    }
    /// Whether [`Fragment::locate_bonds`] has been run.
    pub fn is_located(&self) -> bool {
        self.bonds.is_some()
    }
    /// Ids of the bonds inside this fragment. Empty until the bonds are located.
    pub fn bonds(&self) -> impl Iterator<Item = usize> + '_ {
        self.bonds.iter().flatten().map(|b| b.id)
    }

    /// Find all bonds with both atoms in this fragment.
    ///
    /// Membership must be final at this point, this can only be done once.
    pub fn locate_bonds(&mut self) -> Result<(), FragmentError> {
        if self.bonds.is_some() {
            return Err(FragmentError::AlreadyLocated);
        }
        self.atom_index = self.atoms.iter().enumerate().map(|(n, &a)| (a, n)).collect();
        let mut bonds = Vec::new();
        for &atom in &self.atoms {
            for n in 0..self.mol.neighbor_count(atom) {
                let neighbor = self.mol.neighbor(atom, n);
                if neighbor <= atom || !self.atom_index.contains_key(&neighbor) {
                    continue;
                }
                let id = self.mol.neighbor_bond(atom, n);
                bonds.push(LocatedBond {
                    id,
                    first: self.atom_index[&self.mol.bond_atom(id, 0)],
                    second: self.atom_index[&self.mol.bond_atom(id, 1)],
                });
            }
        }
        debug!(atoms = self.atoms.len(), bonds = bonds.len(), "located fragment bonds");
        self.bonds = Some(bonds);
        Ok(())
    }
    pub(crate) fn located_bonds(&self) -> Result<&[LocatedBond], FragmentError> {
        self.bonds.as_deref().ok_or(FragmentError::NotLocated)
    }
    pub(crate) fn located_bond(&self, bond: usize) -> Result<LocatedBond, FragmentError> {
        self.located_bonds()?
            .iter()
            .find(|b| b.id == bond)
            .copied()
            .ok_or(FragmentError::ForeignBond(bond))
    }
    pub(crate) fn coords_mut(&mut self) -> &mut [Point] {
        self.invalidate_bounds();
        &mut self.coords
    }
    pub(crate) fn invalidate_bounds(&self) {
        self.bounds.set(None);
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        for c in &mut self.coords {
            *c += Point(dx, dy);
        }
        self.bounds.set(self.bounds.get().map(|b| b.translated(dx, dy)));
    }
    /// Rotate every atom around `(x, y)` by `angle` radians, clockwise.
    pub fn rotate(&mut self, x: f64, y: f64, angle: f64) {
        let pivot = Point(x, y);
        for c in self.coords_mut() {
            *c = math::rotate_around(*c, pivot, angle);
        }
    }
    /// Mirror every atom on the line through `(x, y)` with direction `mirror_angle`.
    pub fn flip(&mut self, x: f64, y: f64, mirror_angle: f64) {
        let pivot = Point(x, y);
        for c in self.coords_mut() {
            *c = math::reflect_across(*c, pivot, mirror_angle);
        }
    }
}
