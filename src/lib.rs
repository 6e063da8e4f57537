extern crate nalgebra as na;
extern crate nalgebra_sparse as nas;

pub mod error;
pub mod evp;
pub mod geometry;
pub mod mesh;
pub mod operators;
pub mod sparse;
pub mod spectrum;

pub type VertexIdx = usize;
pub type FaceIdx = usize;
