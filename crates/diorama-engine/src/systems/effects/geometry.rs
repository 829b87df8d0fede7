//! Quad mesh generation for sparkles and flashes.

/// Floats per effects vertex: x, y, kind, u, v, alpha.
pub const VERTEX_FLOATS: usize = 6;

/// Append one axis-aligned quad as two triangles (six vertices) to `out`.
/// `kind` and `alpha` are written per vertex so the page's draw call needs
/// no per-quad uniforms.
pub fn push_quad(out: &mut Vec<f32>, center: [f32; 2], half: f32, kind: f32, alpha: f32) {
    let (cx, cy) = (center[0], center[1]);
    let corners = [
        [cx - half, cy - half, 0.0, 0.0],
        [cx + half, cy - half, 1.0, 0.0],
        [cx + half, cy + half, 1.0, 1.0],
        [cx - half, cy + half, 0.0, 1.0],
    ];
    for &i in &[0usize, 1, 2, 0, 2, 3] {
        let [x, y, u, v] = corners[i];
        out.extend_from_slice(&[x, y, kind, u, v, alpha]);
    }
}
