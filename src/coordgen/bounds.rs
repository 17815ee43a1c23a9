use super::*;
use crate::{BOND_LENGTH, HETERO_SURPLUS, QUERY_SURPLUS};

/// Extents of a fragment, already widened by each atom's surplus.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}
impl Bounds {
    /// Width including half a bond length of padding on either side.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x + BOND_LENGTH
    }
    /// Height including half a bond length of padding on either side.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y + BOND_LENGTH
    }
    pub(crate) fn translated(self, dx: f64, dy: f64) -> Self {
        Self {
            min_x: self.min_x + dx,
            max_x: self.max_x + dx,
            min_y: self.min_y + dy,
            max_y: self.max_y + dy,
        }
    }
}

impl Fragment<'_> {
    /// Extra room an atom needs around it: labels for heteroatoms, more for query features.
    pub fn surplus(&self, index: usize) -> f64 {
        let mol = self.molecule();
        let atom = self.atom(index);
        if mol.has_query_features(atom) {
            QUERY_SURPLUS
        } else if mol.atomic_number(atom) != 6 {
            HETERO_SURPLUS
        } else {
            0.0
        }
    }
    /// Get the bounding box, computing it if the cached one is stale.
    pub fn bounds(&self) -> Bounds {
        if let Some(bounds) = self.bounds.get() {
            return bounds;
        }
        let Some(&Point(x, y)) = self.positions().first() else {
            return Bounds::default();
        };
        let mut bounds = Bounds {
            min_x: x,
            max_x: x,
            min_y: y,
            max_y: y,
        };
        for (n, &Point(x, y)) in self.positions().iter().enumerate() {
            let surplus = self.surplus(n);
            bounds.min_x = bounds.min_x.min(x - surplus);
            bounds.max_x = bounds.max_x.max(x + surplus);
            bounds.min_y = bounds.min_y.min(y - surplus);
            bounds.max_y = bounds.max_y.max(y + surplus);
        }
        self.bounds.set(Some(bounds));
        bounds
    }
    pub fn width(&self) -> f64 {
        self.bounds().width()
    }
    pub fn height(&self) -> f64 {
        self.bounds().height()
    }
}
