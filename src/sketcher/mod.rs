pub mod atom;
pub mod bond;
pub mod builder;
pub mod fragment;
pub mod math;
pub mod mode;
pub mod molecule;
pub mod point;

pub use atom::Atom;
pub use bond::Bond;
pub use builder::Builder;
pub use fragment::{Fragment, FragmentError};
pub(crate) use fragment::LocatedBond;
pub use math::Polar;
pub use mode::LayoutMode;
pub use molecule::{Molecule, MoleculeGraph};
pub use point::Point;
