//! Assembly of the discrete Laplace-Beltrami operators.
//!
//! The stiffness matrix is shared by both discretizations. The mass matrix
//! depends on the chosen discretization and is built by a
//! [`MassMatrixProvider`] strategy.

use crate::{mesh::MeshConnectivity, sparse::SparseMatrix};

/// Assembles the stiffness matrix `A = diag(V) - W`.
///
/// `V[i] = (1/3) sum_{j in Neighbor(i)} W[i,j]`. The divide by 3 fixes the
/// scale of the recovered spectrum and must not be altered.
pub fn assemble_stiffness(
  weights: &nas::CsrMatrix<f64>,
  connectivity: &MeshConnectivity,
) -> SparseMatrix {
  let nvertices = connectivity.nvertices();
  let mut stiffness = SparseMatrix::new(nvertices, nvertices);

  for ivertex in 0..nvertices {
    let row_sum: f64 = connectivity
      .neighbors(ivertex)
      .iter()
      .map(|&j| weight_entry(weights, ivertex, j))
      .sum();
    stiffness.push(ivertex, ivertex, row_sum / 3.0);
  }
  for (r, c, &w) in weights.triplet_iter() {
    stiffness.push(r, c, -w);
  }

  stiffness
}

fn weight_entry(weights: &nas::CsrMatrix<f64>, r: usize, c: usize) -> f64 {
  weights
    .get_entry(r, c)
    .map_or(0.0, |entry| entry.into_value())
}

/// Strategy for building the mass matrix of a discretization.
pub trait MassMatrixProvider {
  fn assemble(&self, areas: &[f64], connectivity: &MeshConnectivity) -> SparseMatrix;
}

/// Lumped mass matrix of the geometric discretization.
///
/// Diagonal with `D[i] = (sum of areas of triangles at vertex i) / 3`.
pub struct LumpedMass;
impl MassMatrixProvider for LumpedMass {
  fn assemble(&self, areas: &[f64], connectivity: &MeshConnectivity) -> SparseMatrix {
    let nvertices = connectivity.nvertices();
    let mut mass = SparseMatrix::new(nvertices, nvertices);
    for ivertex in 0..nvertices {
      mass.push(ivertex, ivertex, vertex_area(areas, connectivity, ivertex) / 3.0);
    }
    mass
  }
}

/// Consistent mass matrix of the linear FEM discretization, `B = P + Q`.
///
/// Off-diagonal `P[i,j] = (sum of areas of the 1-2 triangles at edge (i,j)) / 12`,
/// assigned at `(i,j)` and `(j,i)` to keep B symmetric. Diagonal
/// `Q[i] = (sum of areas of triangles at vertex i) / 6`.
pub struct ConsistentMass;
impl MassMatrixProvider for ConsistentMass {
  fn assemble(&self, areas: &[f64], connectivity: &MeshConnectivity) -> SparseMatrix {
    let nvertices = connectivity.nvertices();
    let mut mass = SparseMatrix::new(nvertices, nvertices);

    for (v0, v1) in connectivity.edges() {
      let edge_area: f64 = connectivity
        .faces_at_edge(v0, v1)
        .iter()
        .map(|&iface| areas[iface])
        .sum();
      mass.push(v0, v1, edge_area / 12.0);
      mass.push(v1, v0, edge_area / 12.0);
    }
    for ivertex in 0..nvertices {
      mass.push(ivertex, ivertex, vertex_area(areas, connectivity, ivertex) / 6.0);
    }

    mass
  }
}

fn vertex_area(areas: &[f64], connectivity: &MeshConnectivity, ivertex: usize) -> f64 {
  connectivity
    .faces_at_vertex(ivertex)
    .iter()
    .map(|&iface| areas[iface])
    .sum()
}
