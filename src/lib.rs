pub mod coordgen;
pub mod sketcher;

/// Length of a standard bond; all other distances are expressed relative to it.
pub const BOND_LENGTH: f64 = 1.0;
/// Atoms closer than this are reported as colliding.
pub const COLLISION_LIMIT_BOND_ROTATION: f64 = 0.8;
/// Atoms closer than this to a bond get pushed away from it.
pub const COLLISION_LIMIT_ATOM_MOVEMENT: f64 = 0.5;
/// At most this many forces contribute to a single relaxation step.
pub const MAX_COLLISION_FORCES: usize = 4;
/// Surplus for atoms carrying query features.
pub const QUERY_SURPLUS: f64 = 0.6;
/// Surplus for any non-carbon atom.
pub const HETERO_SURPLUS: f64 = 0.25;
/// Empirical compression of widths when packing fragments next to each other,
/// approximating the denser 60° bond lattice.
pub const PACKING_FACTOR: f64 = 0.75;

pub mod prelude {
    pub use super::coordgen::{Corner, Placement};
    pub use super::sketcher::{
        Builder, Fragment, FragmentError, LayoutMode, Molecule, MoleculeGraph, Point,
    };
}
