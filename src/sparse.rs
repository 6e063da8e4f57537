//! Sparse matrix assembly in triplet form.

/// Sparse matrix builder for incremental assembly.
///
/// Entries pushed at the same position accumulate: the nalgebra conversions
/// sum duplicate triplets.
#[derive(Debug, Clone, Default)]
pub struct SparseMatrix {
  nrows: usize,
  ncols: usize,
  triplets: Vec<(usize, usize, f64)>,
}

impl SparseMatrix {
  pub fn new(nrows: usize, ncols: usize) -> Self {
    Self {
      nrows,
      ncols,
      triplets: Vec::new(),
    }
  }

  pub fn nrows(&self) -> usize {
    self.nrows
  }
  pub fn ncols(&self) -> usize {
    self.ncols
  }
  pub fn ntriplets(&self) -> usize {
    self.triplets.len()
  }

  pub fn push(&mut self, r: usize, c: usize, v: f64) {
    self.triplets.push((r, c, v));
  }

  pub fn to_nalgebra_coo(&self) -> nas::CooMatrix<f64> {
    let rows = self.triplets.iter().map(|t| t.0).collect();
    let cols = self.triplets.iter().map(|t| t.1).collect();
    let vals = self.triplets.iter().map(|t| t.2).collect();
    nas::CooMatrix::try_from_triplets(self.nrows, self.ncols, rows, cols, vals).unwrap()
  }

  pub fn to_nalgebra_csr(&self) -> nas::CsrMatrix<f64> {
    (&self.to_nalgebra_coo()).into()
  }

  pub fn to_nalgebra_dense(&self) -> na::DMatrix<f64> {
    (&self.to_nalgebra_coo()).into()
  }
}

#[cfg(test)]
mod test {
  use super::*;

  use approx::assert_relative_eq;

  #[test]
  fn duplicate_triplets_accumulate() {
    let mut matrix = SparseMatrix::new(3, 3);
    matrix.push(0, 1, 1.5);
    matrix.push(0, 1, 0.5);
    matrix.push(2, 2, -1.0);

    assert_eq!(matrix.nrows(), 3);
    assert_eq!(matrix.ncols(), 3);
    assert_eq!(matrix.ntriplets(), 3);

    let dense = matrix.to_nalgebra_dense();
    let expected = na::dmatrix![
      0.0, 2.0, 0.0;
      0.0, 0.0, 0.0;
      0.0, 0.0, -1.0
    ];
    assert_relative_eq!(dense, expected, epsilon = 1e-12);

    // The conversions merge duplicates into one stored entry.
    assert_eq!(matrix.to_nalgebra_csr().nnz(), 2);
  }
}
