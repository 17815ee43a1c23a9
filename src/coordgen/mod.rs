pub mod arrange;
pub mod bounds;
pub mod collision;
pub mod flip;

use super::sketcher::*;

pub use arrange::{Corner, Placement};
pub use bounds::Bounds;
pub use flip::FlipPlan;
