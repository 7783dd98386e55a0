use std::collections::BTreeSet;

use nav_mesh::{AdjacencyGraph, NavMesh, Point};

fn stair_mesh() -> NavMesh {
    let vertices = vec![
        Point::new(0.0, 0.0),
        Point::new(0.0, 1.0),
        Point::new(1.0, 0.0),
        Point::new(1.0, 1.0),
        Point::new(2.0, 0.0),
        Point::new(2.0, 1.0),
        Point::new(3.0, 0.0),
        Point::new(3.0, 1.0),
        Point::new(3.0, 2.0),
        Point::new(2.0, 2.0),
        Point::new(2.0, 3.0),
        Point::new(3.0, 3.0),
        Point::new(4.0, 3.0),
        Point::new(4.0, 2.0),
        Point::new(5.0, 3.0),
        Point::new(5.0, 2.0),
        Point::new(5.0, 1.0),
        Point::new(4.0, 1.0),
    ];
    let triangles = vec![
        [0, 1, 2],
        [1, 2, 3],
        [2, 3, 4],
        [3, 4, 5],
        [4, 5, 6],
        [5, 6, 7],
        [5, 7, 9],
        [9, 7, 8],
        [9, 8, 10],
        [8, 10, 11],
        [8, 11, 13],
        [11, 12, 13],
        [12, 13, 15],
        [12, 14, 15],
        [13, 15, 16],
        [13, 16, 17],
    ];
    NavMesh::new(vertices, triangles)
}

fn undirected_edges(graph: &AdjacencyGraph) -> BTreeSet<(u32, u32)> {
    let mut edges = BTreeSet::new();
    for tri in 0..graph.len() as u32 {
        for edge in graph.neighbors(tri) {
            edges.insert((tri.min(edge.to), tri.max(edge.to)));
        }
    }
    edges
}

#[test]
fn edges_exist_exactly_where_triangles_share_two_vertices() {
    let mesh = stair_mesh();
    let graph = AdjacencyGraph::from_mesh(&mesh);
    assert_eq!(graph.len(), mesh.triangle_count());

    let mut expected = BTreeSet::new();
    for i in 0..mesh.triangle_count() as u32 {
        for j in (i + 1)..mesh.triangle_count() as u32 {
            let a = mesh.triangle(i);
            let b = mesh.triangle(j);
            let shared = a.iter().filter(|v| b.contains(v)).count();
            if shared == 2 {
                expected.insert((i, j));
            }
        }
    }

    assert_eq!(undirected_edges(&graph), expected);
    // The stair dual graph is a chain with one branch at triangle 12.
    assert_eq!(expected.len(), 15);
    assert!(expected.contains(&(12, 13)));
    assert!(expected.contains(&(12, 14)));
}

#[test]
fn edges_are_symmetric_with_equal_weights() {
    let mesh = stair_mesh();
    let graph = AdjacencyGraph::from_mesh(&mesh);

    for tri in 0..graph.len() as u32 {
        for edge in graph.neighbors(tri) {
            let mirrored = graph
                .neighbors(edge.to)
                .iter()
                .find(|back| back.to == tri)
                .expect("edge has a mirror");
            assert_eq!(mirrored.weight, edge.weight);
        }
    }
}

#[test]
fn weights_are_truncated_centroid_distances() {
    // Scale the mesh up so centroid distances are not all sub-unit.
    let mesh = {
        let base = stair_mesh();
        let vertices = base
            .vertices()
            .iter()
            .map(|v| Point::new(v.x * 10.0, v.y * 10.0))
            .collect();
        NavMesh::new(vertices, base.triangles().to_vec())
    };
    let graph = AdjacencyGraph::from_mesh(&mesh);

    for tri in 0..graph.len() as u32 {
        for edge in graph.neighbors(tri) {
            let expected = mesh.centroid(tri).distance(mesh.centroid(edge.to)) as u32;
            assert_eq!(edge.weight, expected);
            assert!(edge.weight > 0);
        }
    }
}

#[test]
fn obstacle_triangles_are_isolated() {
    let mesh = stair_mesh().with_obstacles([5u32]);
    let graph = AdjacencyGraph::from_mesh(&mesh);

    assert!(graph.neighbors(5).is_empty());
    for tri in 0..graph.len() as u32 {
        assert!(
            graph.neighbors(tri).iter().all(|edge| edge.to != 5),
            "triangle {tri} still links to the obstacle"
        );
    }
}

#[test]
fn rebuilding_yields_a_structurally_equal_graph() {
    let mesh = stair_mesh().with_obstacles([3u32, 11]);
    assert_eq!(
        AdjacencyGraph::from_mesh(&mesh),
        AdjacencyGraph::from_mesh(&mesh)
    );
}

#[test]
fn malformed_triangles_degrade_without_faulting() {
    // Out-of-range index, duplicated vertex in a triple, and a duplicated
    // triangle (three shared vertices): none may produce an edge or panic.
    let vertices = vec![
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(1.0, 1.0),
        Point::new(0.0, 1.0),
    ];
    let triangles = vec![[0, 1, 2], [0, 2, 3], [0, 2, 99], [1, 1, 2], [0, 1, 2]];
    let graph = AdjacencyGraph::from_mesh(&NavMesh::new(vertices, triangles));

    assert!(graph.neighbors(2).is_empty());
    assert!(graph.neighbors(3).is_empty());
    // The duplicated triangle shares all three vertices with triangle 0, so
    // the pair contributes nothing.
    assert!(graph.neighbors(4).iter().all(|edge| edge.to != 0));
    // The two well-formed halves of the square still connect.
    assert!(graph.neighbors(0).iter().any(|edge| edge.to == 1));
}
