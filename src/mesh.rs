//! Triangle surface meshes and their connectivity.
//!
//! A [`TriangleSurface`] stores the vertex coordinates and the triangle list.
//! A [`MeshConnectivity`] is derived from the triangle list once per spectrum
//! computation and answers the incidence queries the operator assembly needs:
//! vertex neighbors, triangles at a vertex, triangles at an edge, and the
//! deduplicated edge list.

pub mod gen;

use crate::{FaceIdx, VertexIdx};

use indexmap::IndexMap;
use itertools::Itertools as _;

/// Triangulated surface embedded in 3D.
///
/// Vertex coordinates are the columns of `vertex_coords`, triangles index
/// into them. Callers must reference every vertex in at least one triangle;
/// an unreferenced vertex gives the derived mass matrix a zero row and the
/// eigensolve reports it as singular.
#[derive(Debug, Clone)]
pub struct TriangleSurface {
  triangles: Vec<[VertexIdx; 3]>,
  vertex_coords: na::Matrix3xX<f64>,
}
impl TriangleSurface {
  pub fn new(triangles: Vec<[VertexIdx; 3]>, vertex_coords: na::Matrix3xX<f64>) -> Self {
    let nvertices = vertex_coords.ncols();
    for triangle in &triangles {
      for &ivertex in triangle {
        assert!(ivertex < nvertices, "Triangle vertex index out of bounds.");
      }
    }
    Self {
      triangles,
      vertex_coords,
    }
  }

  pub fn triangles(&self) -> &[[VertexIdx; 3]] {
    &self.triangles
  }
  pub fn vertex_coords(&self) -> &na::Matrix3xX<f64> {
    &self.vertex_coords
  }
  pub fn nvertices(&self) -> usize {
    self.vertex_coords.ncols()
  }
  pub fn ntriangles(&self) -> usize {
    self.triangles.len()
  }

  pub fn connectivity(&self) -> MeshConnectivity {
    MeshConnectivity::from_triangles(&self.triangles, self.nvertices())
  }
}

/// Incidence information derived from a triangle list.
///
/// All orderings are deterministic: incident faces and edges appear in
/// first-encounter order over the triangle list, neighbors in the edge
/// list's order.
#[derive(Debug, Clone)]
pub struct MeshConnectivity {
  neighbors: Vec<Vec<VertexIdx>>,
  faces_at_vertices: Vec<Vec<FaceIdx>>,
  faces_at_edges: IndexMap<(VertexIdx, VertexIdx), Vec<FaceIdx>>,
}
impl MeshConnectivity {
  pub fn from_triangles(triangles: &[[VertexIdx; 3]], nvertices: usize) -> Self {
    let mut faces_at_vertices = vec![Vec::new(); nvertices];
    let mut faces_at_edges = IndexMap::<(VertexIdx, VertexIdx), Vec<FaceIdx>>::new();

    for (iface, triangle) in triangles.iter().enumerate() {
      for &ivertex in triangle {
        faces_at_vertices[ivertex].push(iface);
      }
      for (v0, v1) in triangle.iter().copied().tuple_combinations() {
        let edge = canonical_edge(v0, v1);
        faces_at_edges.entry(edge).or_default().push(iface);
      }
    }

    let mut neighbors = vec![Vec::new(); nvertices];
    for &(v0, v1) in faces_at_edges.keys() {
      neighbors[v0].push(v1);
      neighbors[v1].push(v0);
    }

    Self {
      neighbors,
      faces_at_vertices,
      faces_at_edges,
    }
  }

  pub fn nvertices(&self) -> usize {
    self.neighbors.len()
  }
  pub fn nedges(&self) -> usize {
    self.faces_at_edges.len()
  }

  /// Vertices sharing an edge with `ivertex`, each exactly once.
  pub fn neighbors(&self, ivertex: VertexIdx) -> &[VertexIdx] {
    &self.neighbors[ivertex]
  }

  /// Triangles incident to `ivertex`.
  pub fn faces_at_vertex(&self, ivertex: VertexIdx) -> &[FaceIdx] {
    &self.faces_at_vertices[ivertex]
  }

  /// Triangles incident to the undirected edge `(v0, v1)`.
  ///
  /// One triangle for a boundary edge, two for an interior edge of a
  /// manifold mesh.
  pub fn faces_at_edge(&self, v0: VertexIdx, v1: VertexIdx) -> &[FaceIdx] {
    self
      .faces_at_edges
      .get(&canonical_edge(v0, v1))
      .map(Vec::as_slice)
      .unwrap_or(&[])
  }

  /// Deduplicated undirected edges, smaller vertex index first.
  pub fn edges(&self) -> impl ExactSizeIterator<Item = (VertexIdx, VertexIdx)> + '_ {
    self.faces_at_edges.keys().copied()
  }

  /// Edges with exactly one incident triangle.
  pub fn boundary_edges(&self) -> impl Iterator<Item = (VertexIdx, VertexIdx)> + '_ {
    self
      .faces_at_edges
      .iter()
      .filter(|(_, faces)| faces.len() == 1)
      .map(|(&edge, _)| edge)
  }

  /// Whether no edge has more than two incident triangles.
  pub fn is_manifold(&self) -> bool {
    self.faces_at_edges.values().all(|faces| faces.len() <= 2)
  }
}

fn canonical_edge(v0: VertexIdx, v1: VertexIdx) -> (VertexIdx, VertexIdx) {
  if v0 < v1 {
    (v0, v1)
  } else {
    (v1, v0)
  }
}

#[cfg(test)]
mod test {
  use super::*;

  fn fan_triangles() -> Vec<[VertexIdx; 3]> {
    vec![[0, 1, 2], [0, 2, 3], [0, 3, 1]]
  }

  #[test]
  fn neighbors_are_deduplicated() {
    let connectivity = MeshConnectivity::from_triangles(&fan_triangles(), 4);
    assert_eq!(connectivity.neighbors(0), &[1, 2, 3]);
    assert_eq!(connectivity.neighbors(1), &[0, 2, 3]);
    assert_eq!(connectivity.neighbors(2), &[0, 1, 3]);
    assert_eq!(connectivity.neighbors(3), &[0, 2, 1]);
  }

  #[test]
  fn edges_are_canonical_and_unique() {
    let connectivity = MeshConnectivity::from_triangles(&fan_triangles(), 4);
    let edges: Vec<_> = connectivity.edges().collect();
    assert_eq!(
      edges,
      vec![(0, 1), (0, 2), (1, 2), (0, 3), (2, 3), (1, 3)]
    );
  }

  #[test]
  fn faces_at_edge_counts_incident_triangles() {
    let connectivity = MeshConnectivity::from_triangles(&fan_triangles(), 4);
    assert_eq!(connectivity.faces_at_edge(0, 1), &[0, 2]);
    assert_eq!(connectivity.faces_at_edge(1, 0), &[0, 2]);
    assert_eq!(connectivity.faces_at_edge(1, 2), &[0]);
    assert!(connectivity.faces_at_edge(1, 3).len() == 1);
    assert!(connectivity.faces_at_edge(2, 2).is_empty());
  }

  #[test]
  fn fan_boundary_is_outer_ring() {
    let connectivity = MeshConnectivity::from_triangles(&fan_triangles(), 4);
    assert!(connectivity.is_manifold());
    let boundary: Vec<_> = connectivity.boundary_edges().collect();
    assert_eq!(boundary, vec![(1, 2), (2, 3), (1, 3)]);
  }

  #[test]
  fn faces_at_vertices_follow_triangle_order() {
    let connectivity = MeshConnectivity::from_triangles(&fan_triangles(), 4);
    assert_eq!(connectivity.faces_at_vertex(0), &[0, 1, 2]);
    assert_eq!(connectivity.faces_at_vertex(1), &[0, 2]);
    assert_eq!(connectivity.faces_at_vertex(3), &[1, 2]);
  }

  #[test]
  #[should_panic]
  fn out_of_bounds_triangle_panics() {
    let vertex_coords = na::Matrix3xX::from_columns(&[
      na::Vector3::new(0.0, 0.0, 0.0),
      na::Vector3::new(1.0, 0.0, 0.0),
      na::Vector3::new(0.0, 1.0, 0.0),
    ]);
    TriangleSurface::new(vec![[0, 1, 3]], vertex_coords);
  }
}
