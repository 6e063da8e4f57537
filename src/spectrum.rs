//! Laplace-Beltrami spectrum pipelines.
//!
//! Discretizes the Laplace-Beltrami operator of a triangle surface and
//! solves the generalized eigenvalue problem `A f = lambda M f`, following
//! Reuter et al. (2009). Both discretizations share the stiffness matrix and
//! differ in the mass matrix. The returned spectrum holds the reciprocals
//! `1/lambda` of the raw eigenvalues.

use crate::{
  error::SpectrumResult,
  evp::{DenseSchurSolver, EigenSolver},
  geometry,
  mesh::TriangleSurface,
  operators::{self, ConsistentMass, LumpedMass, MassMatrixProvider},
};

use tracing::warn;

/// Fewest vertices for a well-posed generalized eigenvalue problem.
pub const MIN_VERTEX_COUNT: usize = 5;

/// Default number of computed eigenvalues.
pub const DEFAULT_NEIGEN_VALUES: usize = 3;

/// Spectrum returned for meshes with fewer than [`MIN_VERTEX_COUNT`] vertices.
pub fn sentinel_spectrum() -> Vec<na::Complex<f64>> {
  vec![na::Complex::new(-1.0, 0.0); 5]
}

/// Which mass matrix discretizes the surface inner product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Discretization {
  /// Cotangent weights with lumped (diagonal) masses.
  Geometric,
  /// Linear finite elements with the consistent mass matrix.
  Fem,
}

/// Runs the spectrum computation stages over one mesh.
///
/// The precomputation (connectivity, areas, weights, stiffness) is shared by
/// both discretizations; the [`Discretization`] tag selects the mass matrix
/// strategy. The eigensolver is injected once at construction.
pub struct SpectrumPipeline<S = DenseSchurSolver> {
  solver: S,
  neigen_values: usize,
}

impl SpectrumPipeline<DenseSchurSolver> {
  pub fn new() -> Self {
    Self::with_solver(DenseSchurSolver::default(), DEFAULT_NEIGEN_VALUES)
  }
}
impl Default for SpectrumPipeline<DenseSchurSolver> {
  fn default() -> Self {
    Self::new()
  }
}

impl<S: EigenSolver> SpectrumPipeline<S> {
  pub fn with_solver(solver: S, neigen_values: usize) -> Self {
    Self {
      solver,
      neigen_values,
    }
  }

  /// Computes the spectrum of `surface` under the given discretization.
  ///
  /// Meshes with fewer than [`MIN_VERTEX_COUNT`] vertices short-circuit to
  /// the sentinel spectrum without any assembly.
  pub fn compute(
    &self,
    surface: &TriangleSurface,
    discretization: Discretization,
  ) -> SpectrumResult<Vec<na::Complex<f64>>> {
    let nvertices = surface.nvertices();
    if nvertices < MIN_VERTEX_COUNT {
      warn!(
        "mesh has only {} vertices, returning the sentinel spectrum",
        nvertices
      );
      return Ok(sentinel_spectrum());
    }

    let connectivity = surface.connectivity();
    let areas = geometry::triangle_areas(surface)?;
    let weights = geometry::cotangent_weights(surface)?.to_nalgebra_csr();
    let stiffness = operators::assemble_stiffness(&weights, &connectivity);
    let mass = match discretization {
      Discretization::Geometric => LumpedMass.assemble(&areas, &connectivity),
      Discretization::Fem => ConsistentMass.assemble(&areas, &connectivity),
    };

    let stiffness = stiffness.to_nalgebra_dense();
    let mass = mass.to_nalgebra_dense();
    let raw_eigenvalues = self
      .solver
      .solve_generalized(&stiffness, &mass, self.neigen_values)?;

    Ok(raw_eigenvalues.into_iter().map(|ev| ev.inv()).collect())
  }
}

/// Spectrum of the geometric (lumped mass) discretization.
pub fn geometric_spectrum(surface: &TriangleSurface) -> SpectrumResult<Vec<na::Complex<f64>>> {
  SpectrumPipeline::new().compute(surface, Discretization::Geometric)
}

/// Spectrum of the linear FEM (consistent mass) discretization.
pub fn fem_spectrum(surface: &TriangleSurface) -> SpectrumResult<Vec<na::Complex<f64>>> {
  SpectrumPipeline::new().compute(surface, Discretization::Fem)
}
