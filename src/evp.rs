//! Generalized eigenvalue problems on dense operands.

use crate::error::{SpectrumError, SpectrumResult};

/// Capability to solve the generalized eigenvalue problem `A f = lambda M f`.
///
/// Implementations select which `neigen_values` eigenvalues they return;
/// no ordering is guaranteed across implementations.
pub trait EigenSolver {
  fn solve_generalized(
    &self,
    stiffness: &na::DMatrix<f64>,
    mass: &na::DMatrix<f64>,
    neigen_values: usize,
  ) -> SpectrumResult<Vec<na::Complex<f64>>>;
}

/// Dense generalized eigensolver based on the real Schur decomposition.
///
/// Reduces `A f = lambda M f` to the standard problem
/// `(M^-1 A) f = lambda f` through an LU factorization of the mass matrix,
/// then takes the complex eigenvalues of the system matrix. Returns the
/// largest-magnitude eigenvalues first.
pub struct DenseSchurSolver {
  /// Convergence tolerance of the Schur iteration.
  pub eps: f64,
  /// Iteration budget of the Schur iteration.
  pub max_iterations: usize,
}

impl Default for DenseSchurSolver {
  fn default() -> Self {
    Self {
      eps: f64::EPSILON,
      max_iterations: 10_000,
    }
  }
}

impl EigenSolver for DenseSchurSolver {
  fn solve_generalized(
    &self,
    stiffness: &na::DMatrix<f64>,
    mass: &na::DMatrix<f64>,
    neigen_values: usize,
  ) -> SpectrumResult<Vec<na::Complex<f64>>> {
    let nvertices = mass.nrows();
    assert!(
      stiffness.nrows() == nvertices && stiffness.ncols() == nvertices && mass.ncols() == nvertices,
      "Operands must be square and of equal dimension."
    );

    if neigen_values == 0 || neigen_values >= nvertices {
      return Err(SpectrumError::InvalidEigenCount {
        requested: neigen_values,
        nvertices,
      });
    }

    if let Some(vertex) = zero_row(mass) {
      return Err(SpectrumError::SingularMassRow { vertex });
    }

    let mass_lu = na::linalg::LU::new(mass.clone());
    if !pivots_regular(&mass_lu) {
      return Err(SpectrumError::SingularMass);
    }
    // From A f = lambda M f to (M^-1 A) f = lambda f.
    let system = mass_lu
      .solve(stiffness)
      .ok_or(SpectrumError::SingularMass)?;

    let schur = na::linalg::Schur::try_new(system, self.eps, self.max_iterations).ok_or(
      SpectrumError::NoConvergence {
        max_iterations: self.max_iterations,
      },
    )?;

    let mut eigenvalues: Vec<_> = schur.complex_eigenvalues().iter().copied().collect();
    eigenvalues.sort_by(|a, b| b.norm().total_cmp(&a.norm()));
    eigenvalues.truncate(neigen_values);
    Ok(eigenvalues)
  }
}

fn zero_row(m: &na::DMatrix<f64>) -> Option<usize> {
  m.row_iter().position(|row| row.iter().all(|&x| x == 0.0))
}

const PIVOT_RATIO_TOL: f64 = 1e-12;

fn pivots_regular(lu: &na::linalg::LU<f64, na::Dyn, na::Dyn>) -> bool {
  let pivots = lu.u().diagonal();
  let max = pivots.iter().fold(0.0f64, |acc, p| acc.max(p.abs()));
  let min = pivots.iter().fold(f64::INFINITY, |acc, p| acc.min(p.abs()));
  max > 0.0 && min > PIVOT_RATIO_TOL * max
}
