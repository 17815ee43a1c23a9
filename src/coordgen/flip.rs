use super::*;
use ahash::AHashSet;
use std::collections::VecDeque;
use tracing::*;

/// How to flip one side of a bond, computed once per bond and fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlipPlan {
    /// Local index of the bond atom on the side that stays in place.
    pub kept: usize,
    /// Local index of the bond atom on the side that gets mirrored.
    pub flipped: usize,
    /// Local indices of the other atoms on the mirrored side.
    pub atoms: Vec<usize>,
}

impl Fragment<'_> {
    /// The cached plan for a bond, if it has been flipped before.
    pub fn flip_plan(&self, bond: usize) -> Option<&FlipPlan> {
        self.flip_plans.get(&bond)
    }
    /// Mirror the atoms on one side of a bond across the bond's axis.
    ///
    /// The smaller side is flipped, unless the fragment considers marked atoms and only one side
    /// has them, in which case the other side is. The partition is worked out on the first call
    /// for a bond and reused afterwards, so membership must not change in between.
    pub fn flip_one_side(&mut self, bond: usize) -> Result<(), FragmentError> {
        let located = self.located_bond(bond)?;
        if !self.flip_plans.contains_key(&bond) {
            let plan = self.plan_flip(located);
            debug!(
                bond,
                kept = plan.kept,
                flipped = plan.flipped,
                count = plan.atoms.len(),
                "computed flip plan"
            );
            self.flip_plans.insert(bond, plan);
        }
        let plan = &self.flip_plans[&bond];
        let coords = self.positions();
        let pivot = coords[plan.kept];
        let mirror_angle = math::angle(pivot, coords[plan.flipped]);
        let moved = plan
            .atoms
            .iter()
            .map(|&i| (i, math::reflect_across(coords[i], pivot, mirror_angle)))
            .collect::<Vec<_>>();
        let coords = self.coords_mut();
        for (i, p) in moved {
            coords[i] = p;
        }
        Ok(())
    }
    fn plan_flip(&self, bond: LocatedBond) -> FlipPlan {
        let mol = self.molecule();
        let atom1 = mol.bond_atom(bond.id, 0);
        let atom2 = mol.bond_atom(bond.id, 1);
        let mut on_side = AHashSet::new();
        let mut queue = VecDeque::new();
        on_side.insert(atom1);
        queue.push_back(atom1);
        while let Some(current) = queue.pop_front() {
            for n in 0..mol.neighbor_count(current) {
                let candidate = mol.neighbor(current, n);
                if candidate != atom2 && on_side.insert(candidate) {
                    queue.push_back(candidate);
                }
            }
        }
        let on_count = self.atoms().iter().filter(|a| on_side.contains(*a)).count();
        let mut flip_other_side = on_count > self.size() / 2;
        if self.mode().consider_marked_atoms {
            let mut core_on_side = false;
            let mut core_off_side = false;
            for atom in self.atoms() {
                if mol.is_marked(*atom) {
                    if on_side.contains(atom) {
                        core_on_side = true;
                    } else {
                        core_off_side = true;
                    }
                }
            }
            if core_on_side != core_off_side {
                flip_other_side = core_on_side;
            }
        }
        let (kept, flipped) = if flip_other_side {
            (bond.first, bond.second)
        } else {
            (bond.second, bond.first)
        };
        let atoms = self
            .atoms()
            .iter()
            .enumerate()
            .filter(|&(i, a)| {
                i != bond.first && i != bond.second && (flip_other_side ^ on_side.contains(a))
            })
            .map(|(i, _)| i)
            .collect();
        FlipPlan {
            kept,
            flipped,
            atoms,
        }
    }
}
