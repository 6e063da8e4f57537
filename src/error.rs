//! Error types for spectrum computation.

use crate::{FaceIdx, VertexIdx};

use thiserror::Error;

pub type SpectrumResult<T> = Result<T, SpectrumError>;

/// Errors that can occur while computing a Laplace-Beltrami spectrum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpectrumError {
  /// A triangle with collinear or coincident vertices.
  #[error("face {face} is degenerate: its vertices are collinear or coincident")]
  DegenerateFace { face: FaceIdx },

  /// An all-zero mass matrix row, caused by a vertex no face refers to.
  #[error("mass matrix row {vertex} is zero: vertex {vertex} does not occur in any face")]
  SingularMassRow { vertex: VertexIdx },

  /// The mass matrix could not be factorized.
  #[error("mass matrix is singular to working precision")]
  SingularMass,

  /// The eigensolver exhausted its iteration budget.
  #[error("eigensolver did not converge within {max_iterations} iterations")]
  NoConvergence { max_iterations: usize },

  /// Requested eigenvalue count outside the well-posed range.
  #[error("eigenvalue count {requested} out of range: must lie in 1..{nvertices}")]
  InvalidEigenCount { requested: usize, nvertices: usize },
}
