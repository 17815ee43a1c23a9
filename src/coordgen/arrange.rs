use super::*;
use crate::{BOND_LENGTH, PACKING_FACTOR};
use tracing::*;

/// A corner of a fragment's bounding box. y grows downwards, so "top" is the low-y side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopRight,
    BottomRight,
    BottomLeft,
    TopLeft,
}
impl Corner {
    pub const ALL: [Self; 4] = [
        Self::TopRight,
        Self::BottomRight,
        Self::BottomLeft,
        Self::TopLeft,
    ];
    pub const fn opposite(self) -> Self {
        match self {
            Self::TopRight => Self::BottomLeft,
            Self::BottomRight => Self::TopLeft,
            Self::BottomLeft => Self::TopRight,
            Self::TopLeft => Self::BottomRight,
        }
    }
}

/// Where [`Fragment::arrange_with`] put the other fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placement {
    /// Nested diagonally into the given corner.
    Corner(Corner),
    /// To the right, vertically centered.
    Beside,
    /// Below, horizontally centered.
    Topped,
}

impl Fragment<'_> {
    /// How far the atoms stay from a corner, measured along the diagonal.
    ///
    /// This is how much another fragment can be pushed into this corner of the bounding box.
    pub fn corner_distance(&self, corner: Corner) -> f64 {
        let b = self.bounds();
        self.positions()
            .iter()
            .enumerate()
            .map(|(n, &Point(x, y))| {
                let d = match corner {
                    Corner::TopRight => b.max_x - 0.5 * (b.max_x + b.min_y + x - y),
                    Corner::BottomRight => b.max_x - 0.5 * (b.max_x - b.max_y + x + y),
                    Corner::BottomLeft => 0.5 * (b.min_x + b.max_y + x - y) - b.min_x,
                    Corner::TopLeft => 0.5 * (b.min_x - b.min_y + x + y) - b.min_x,
                };
                d - self.surplus(n)
            })
            .reduce(f64::min)
            .unwrap_or(0.0)
    }
    /// Move `other` next to this fragment, choosing whichever arrangement leaves the smallest
    /// combined footprint.
    pub fn arrange_with(&self, other: &mut Fragment<'_>) -> Placement {
        let mut max_gain = 0.0;
        let mut max_corner = Corner::TopRight;
        for corner in Corner::ALL {
            let gain = self.corner_distance(corner) + other.corner_distance(corner.opposite());
            if max_gain < gain {
                max_gain = gain;
                max_corner = corner;
            }
        }

        let a = self.bounds();
        let b = other.bounds();
        let sum_height = a.height() + b.height();
        let sum_width = PACKING_FACTOR * (a.width() + b.width());
        let max_height = a.height().max(b.height());
        let max_width = PACKING_FACTOR * a.width().max(b.width());

        let corner_size = (sum_height - max_gain).hypot(sum_width - PACKING_FACTOR * max_gain);
        let topped_size = max_width.max(sum_height);
        let beside_size = max_height.max(sum_width);

        let placement = if corner_size < topped_size && corner_size < beside_size {
            Placement::Corner(max_corner)
        } else if beside_size < topped_size {
            Placement::Beside
        } else {
            Placement::Topped
        };
        let g = max_gain;
        let (dx, dy) = match placement {
            Placement::Corner(Corner::TopRight) => (
                a.max_x - b.min_x - g + BOND_LENGTH,
                a.min_y - b.max_y + g - BOND_LENGTH,
            ),
            Placement::Corner(Corner::BottomRight) => (
                a.max_x - b.min_x - g + BOND_LENGTH,
                a.max_y - b.min_y - g + BOND_LENGTH,
            ),
            Placement::Corner(Corner::BottomLeft) => (
                a.min_x - b.max_x + g - BOND_LENGTH,
                a.max_y - b.min_y - g + BOND_LENGTH,
            ),
            Placement::Corner(Corner::TopLeft) => (
                a.min_x - b.max_x + g - BOND_LENGTH,
                a.min_y - b.max_y + g - BOND_LENGTH,
            ),
            Placement::Beside => (
                a.max_x - b.min_x + BOND_LENGTH,
                (a.max_y + a.min_y - b.max_y - b.min_y) / 2.0,
            ),
            Placement::Topped => (
                (a.max_x + a.min_x - b.max_x - b.min_x) / 2.0,
                a.max_y - b.min_y + BOND_LENGTH,
            ),
        };
        debug!(?placement, gain = max_gain, dx, dy, "arranged fragments");
        other.translate(dx, dy);
        placement
    }
}
