//! Geometric quantities of a triangle surface.

use crate::{
  error::{SpectrumError, SpectrumResult},
  mesh::TriangleSurface,
  sparse::SparseMatrix,
};

/// Triangle areas by Heron's formula.
///
/// For each triangle the three edge lengths give the semiperimeter
/// `s = (a+b+c)/2` and the area `sqrt(s(s-a)(s-b)(s-c))`. A radicand that is
/// not strictly positive means the triangle is degenerate and is reported as
/// [`SpectrumError::DegenerateFace`] instead of turning into NaN downstream.
pub fn triangle_areas(surface: &TriangleSurface) -> SpectrumResult<Vec<f64>> {
  let coords = surface.vertex_coords();
  surface
    .triangles()
    .iter()
    .enumerate()
    .map(|(iface, &[v0, v1, v2])| {
      let a = (coords.column(v0) - coords.column(v1)).norm();
      let b = (coords.column(v1) - coords.column(v2)).norm();
      let c = (coords.column(v2) - coords.column(v0)).norm();
      let s = (a + b + c) / 2.0;
      let radicand = s * (s - a) * (s - b) * (s - c);
      if radicand.is_nan() || radicand <= 0.0 {
        return Err(SpectrumError::DegenerateFace { face: iface });
      }
      Ok(radicand.sqrt())
    })
    .collect()
}

/// Halved cotangent edge weights.
///
/// For each mesh edge `(i, j)` the weight is
/// `w_ij = (1/2) sum cot(angle opposite the edge)` over the 1-2 triangles
/// containing the edge. The matrix is symmetric with zero diagonal.
pub fn cotangent_weights(surface: &TriangleSurface) -> SpectrumResult<SparseMatrix> {
  let nvertices = surface.nvertices();
  let coords = surface.vertex_coords();

  let mut weights = SparseMatrix::new(nvertices, nvertices);
  for (iface, triangle) in surface.triangles().iter().enumerate() {
    for icorner in 0..3 {
      let apex = triangle[icorner];
      let v0 = triangle[(icorner + 1) % 3];
      let v1 = triangle[(icorner + 2) % 3];

      let e0 = coords.column(v0) - coords.column(apex);
      let e1 = coords.column(v1) - coords.column(apex);
      let cross_norm = e0.cross(&e1).norm();
      if cross_norm.is_nan() || cross_norm <= 0.0 {
        return Err(SpectrumError::DegenerateFace { face: iface });
      }
      let cot = e0.dot(&e1) / cross_norm;

      weights.push(v0, v1, cot / 2.0);
      weights.push(v1, v0, cot / 2.0);
    }
  }
  Ok(weights)
}
