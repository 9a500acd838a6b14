//! Vertex tables for the capital "I" glyph and the validated `VertexData`
//! container that pairs a position array with a color array.
//!
//! Positions are three floats per vertex in model space; colors are four
//! floats (RGBA in [0, 1]). The glyph is a non-indexed triangle list: each
//! triangle owns its three vertices.

use glam::{Vec3, Vec4};

use crate::error::RenderError;

/// Floats per position (x, y, z).
pub const POSITION_ARITY: usize = 3;

/// Floats per color (r, g, b, a).
pub const COLOR_ARITY: usize = 4;

/// Number of vertices in the "I" glyph (10 triangles).
pub const GLYPH_VERTEX_COUNT: usize = 30;

const BLUE: [f32; 4] = [0.0, 0.0, 0.8, 1.0];
const ORANGE: [f32; 4] = [0.9, 0.5, 0.2, 1.0];

/// Model-space positions of the "I": top bar, stem, bottom bar.
#[rustfmt::skip]
pub const GLYPH_POSITIONS: [f32; GLYPH_VERTEX_COUNT * POSITION_ARITY] = [
    // top bar
    -5.0,   7.5, 0.0,
    -1.25,  5.0, 0.0,
    -5.0,   5.0, 0.0,

    -1.25,  5.0, 0.0,
    -5.0,   7.5, 0.0,
     5.0,   7.5, 0.0,

     5.0,   7.5, 0.0,
     1.25,  5.0, 0.0,
    -1.25,  5.0, 0.0,

     5.0,   7.5, 0.0,
     5.0,   5.0, 0.0,
     1.25,  5.0, 0.0,

    // stem
     1.25,  5.0, 0.0,
    -1.25,  5.0, 0.0,
    -1.25, -5.0, 0.0,

    -1.25, -5.0, 0.0,
     1.25, -5.0, 0.0,
     1.25,  5.0, 0.0,

    // bottom bar
    -5.0,  -7.5, 0.0,
    -1.25, -5.0, 0.0,
    -5.0,  -5.0, 0.0,

    -1.25, -5.0, 0.0,
    -5.0,  -7.5, 0.0,
     5.0,  -7.5, 0.0,

     5.0,  -7.5, 0.0,
     1.25, -5.0, 0.0,
    -1.25, -5.0, 0.0,

     5.0,  -7.5, 0.0,
     5.0,  -5.0, 0.0,
     1.25, -5.0, 0.0,
];

/// Per-vertex colors of the "I". The stem blends blue at its top into
/// orange at its bottom.
pub fn glyph_colors() -> [f32; GLYPH_VERTEX_COUNT * COLOR_ARITY] {
    let mut per_vertex = [BLUE; GLYPH_VERTEX_COUNT];
    // stem: y = -5 vertices are orange
    for i in [14, 15, 16] {
        per_vertex[i] = ORANGE;
    }
    for color in per_vertex.iter_mut().skip(18) {
        *color = ORANGE;
    }

    let mut out = [0.0; GLYPH_VERTEX_COUNT * COLOR_ARITY];
    for (chunk, color) in out.chunks_exact_mut(COLOR_ARITY).zip(per_vertex) {
        chunk.copy_from_slice(&color);
    }
    out
}

/// A single expanded vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: Vec3,
    pub color: Vec4,
}

/// Flat position and color arrays describing the same number of vertices.
///
/// Construction validates the arrays, so a `VertexData` value always has
/// `positions.len() == n * 3` and `colors.len() == n * 4` for some `n > 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexData {
    positions: Vec<f32>,
    colors: Vec<f32>,
}

impl VertexData {
    /// Pairs position and color arrays after checking arity and count.
    ///
    /// # Errors
    ///
    /// Returns `RenderError::Validation` if either array is empty, is not a
    /// whole number of items, or the two arrays disagree on vertex count.
    pub fn new(positions: Vec<f32>, colors: Vec<f32>) -> Result<Self, RenderError> {
        if positions.is_empty() {
            return Err(RenderError::Validation("position array is empty".into()));
        }
        if positions.len() % POSITION_ARITY != 0 {
            return Err(RenderError::Validation(format!(
                "position array length {} is not a multiple of {POSITION_ARITY}",
                positions.len()
            )));
        }
        if colors.len() % COLOR_ARITY != 0 {
            return Err(RenderError::Validation(format!(
                "color array length {} is not a multiple of {COLOR_ARITY}",
                colors.len()
            )));
        }

        let position_count = positions.len() / POSITION_ARITY;
        let color_count = colors.len() / COLOR_ARITY;
        if position_count != color_count {
            return Err(RenderError::Validation(format!(
                "{position_count} positions vs {color_count} colors"
            )));
        }

        Ok(Self { positions, colors })
    }

    /// The 30-vertex capital "I".
    pub fn glyph() -> Self {
        Self {
            positions: GLYPH_POSITIONS.to_vec(),
            colors: glyph_colors().to_vec(),
        }
    }

    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn colors(&self) -> &[f32] {
        &self.colors
    }

    /// Number of vertices described by both arrays.
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / POSITION_ARITY
    }

    /// Number of whole triangles in the list.
    pub fn triangle_count(&self) -> usize {
        self.vertex_count() / 3
    }

    /// Returns vertex `index` with position and color joined.
    pub fn vertex(&self, index: usize) -> Option<Vertex> {
        let p = self
            .positions
            .get(index * POSITION_ARITY..(index + 1) * POSITION_ARITY)?;
        let c = self
            .colors
            .get(index * COLOR_ARITY..(index + 1) * COLOR_ARITY)?;
        Some(Vertex {
            position: Vec3::from_slice(p),
            color: Vec4::from_slice(c),
        })
    }

    /// Iterates all vertices in draw order.
    pub fn vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.positions
            .chunks_exact(POSITION_ARITY)
            .zip(self.colors.chunks_exact(COLOR_ARITY))
            .map(|(p, c)| Vertex {
                position: Vec3::from_slice(p),
                color: Vec4::from_slice(c),
            })
    }
}
