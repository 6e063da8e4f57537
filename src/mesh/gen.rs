//! Fixture mesh generation.

use super::TriangleSurface;
use crate::VertexIdx;

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Geodesic sphere from subdividing an icosahedron.
///
/// All vertices lie on the unit sphere. The mesh is closed and manifold.
pub fn mesh_sphere_surface(nsubdivisions: usize) -> TriangleSurface {
  let triangles = ICOSAHEDRON_SURFACE.triangles().to_vec();
  let vertices = ICOSAHEDRON_SURFACE
    .vertex_coords()
    .column_iter()
    .map(|c| c.into_owned())
    .collect();

  let (triangles, vertices) = subdivide(triangles, vertices, nsubdivisions);

  let vertex_coords = na::Matrix3xX::from_columns(&vertices);
  TriangleSurface::new(triangles, vertex_coords)
}

fn subdivide(
  mut triangles: Vec<[VertexIdx; 3]>,
  mut vertices: Vec<na::Vector3<f64>>,
  nsubdivisions: usize,
) -> (Vec<[VertexIdx; 3]>, Vec<na::Vector3<f64>>) {
  for _ in 0..nsubdivisions {
    let mut midpoints = HashMap::new();
    triangles = triangles
      .into_iter()
      .flat_map(|[v0, v1, v2]| {
        let v01 = unit_midpoint(v0, v1, &mut vertices, &mut midpoints);
        let v12 = unit_midpoint(v1, v2, &mut vertices, &mut midpoints);
        let v20 = unit_midpoint(v2, v0, &mut vertices, &mut midpoints);

        [
          [v0, v01, v20],
          [v1, v12, v01],
          [v2, v20, v12],
          [v01, v12, v20],
        ]
      })
      .collect();
  }
  (triangles, vertices)
}

fn unit_midpoint(
  v0: VertexIdx,
  v1: VertexIdx,
  vertices: &mut Vec<na::Vector3<f64>>,
  midpoints: &mut HashMap<(VertexIdx, VertexIdx), VertexIdx>,
) -> VertexIdx {
  let edge = if v0 < v1 { (v0, v1) } else { (v1, v0) };
  if let Some(&midpoint) = midpoints.get(&edge) {
    return midpoint;
  }

  let midpoint = ((vertices[v0] + vertices[v1]) / 2.0).normalize();
  vertices.push(midpoint);
  let index = vertices.len() - 1;
  midpoints.insert(edge, index);
  index
}

static ICOSAHEDRON_SURFACE: Lazy<TriangleSurface> = Lazy::new(|| {
  let phi = (1.0 + 5.0f64.sqrt()) / 2.0;

  #[rustfmt::skip]
  let vertices = [
    [-1.0, phi, 0.0],
    [ 1.0, phi, 0.0],
    [-1.0,-phi, 0.0],
    [ 1.0,-phi, 0.0],
    [ 0.0,-1.0, phi],
    [ 0.0, 1.0, phi],
    [ 0.0,-1.0,-phi],
    [ 0.0, 1.0,-phi],
    [ phi, 0.0,-1.0],
    [ phi, 0.0, 1.0],
    [-phi, 0.0,-1.0],
    [-phi, 0.0, 1.0],
  ];

  let vertices: Vec<_> = vertices
    .into_iter()
    .map(|v| na::Vector3::new(v[0], v[1], v[2]).normalize())
    .collect();
  let vertex_coords = na::Matrix3xX::from_columns(&vertices);

  let triangles = vec![
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
  ];

  TriangleSurface::new(triangles, vertex_coords)
});
