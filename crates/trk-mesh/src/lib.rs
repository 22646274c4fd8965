//! Triangle ribbon between the two track boundaries.

pub mod ribbon;

pub use ribbon::{FaceCorner, RibbonMesh, TEXCOORD_PALETTE};
