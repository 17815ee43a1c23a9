use super::*;
use crate::{COLLISION_LIMIT_ATOM_MOVEMENT, COLLISION_LIMIT_BOND_ROTATION, MAX_COLLISION_FORCES};
use smallvec::SmallVec;
use tracing::*;

impl Fragment<'_> {
    /// Find all pairs of atoms closer than the collision limit, as molecule atom ids.
    ///
    /// This also recomputes the collision penalty, which is summed over every pair, not just the
    /// colliding ones.
    pub fn collision_list(&mut self) -> Vec<(usize, usize)> {
        let coords = self.positions();
        let mut penalty = 0.0;
        let mut collisions = Vec::new();
        for i in 1..coords.len() {
            for j in 0..i {
                let dist = coords[i].distance(coords[j]);
                if dist < COLLISION_LIMIT_BOND_ROTATION {
                    collisions.push((self.atom(i), self.atom(j)));
                }
                let p = 1.0 - dist.min(1.0);
                penalty += p * p;
            }
        }
        trace!(collisions = collisions.len(), penalty, "scanned for collisions");
        self.collision_penalty = penalty;
        collisions
    }
    /// The penalty from the last [`Fragment::collision_list`] call, 0 if there wasn't one.
    pub fn collision_penalty(&self) -> f64 {
        self.collision_penalty
    }
    /// Push an atom away from bonds (and bond atoms) that it's too close to.
    ///
    /// Only the first few crowded bonds are taken into account.
    pub fn optimize_atom_coordinates(&mut self, index: usize) -> Result<(), FragmentError> {
        let len = self.size();
        if index >= len {
            return Err(FragmentError::IndexOutOfRange { index, len });
        }
        let coords = self.positions();
        let p = coords[index];
        let mut forces = SmallVec::<Polar, MAX_COLLISION_FORCES>::new();
        for bond in self.located_bonds()? {
            if forces.len() >= MAX_COLLISION_FORCES {
                break;
            }
            if bond.first == index || bond.second == index {
                continue;
            }
            let p1 = coords[bond.first];
            let p2 = coords[bond.second];
            let d1 = p1.distance(p);
            let d2 = p2.distance(p);
            let bond_length = p1.distance(p2);
            if d1 < bond_length && d2 < bond_length {
                if let Some(foot) = math::perpendicular_foot(p, p1, p2) {
                    let d = foot.distance(p);
                    if d < COLLISION_LIMIT_ATOM_MOVEMENT {
                        forces.push(push_away(foot, p, d));
                    }
                }
            } else if d1 < COLLISION_LIMIT_ATOM_MOVEMENT {
                forces.push(push_away(p1, p, d1));
            } else if d2 < COLLISION_LIMIT_ATOM_MOVEMENT {
                forces.push(push_away(p2, p, d2));
            }
        }
        if forces.is_empty() {
            return Ok(());
        }
        let force = Polar::mean(&forces);
        let moved = p + force.offset();
        trace!(index, forces = forces.len(), ?force, "relaxing atom");
        if moved.is_finite() {
            self.set_position(index, moved);
        }
        Ok(())
    }
}

fn push_away(from: Point, atom: Point, distance: f64) -> Polar {
    Polar::new(
        math::angle(from, atom),
        (COLLISION_LIMIT_ATOM_MOVEMENT - distance) / 2.0,
    )
}
