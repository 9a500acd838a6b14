//! Orthographic projection for the glyph.
//!
//! The matrix is a pure function of six bounds and uses the OpenGL clip
//! convention (right-handed, depth mapped to [-1, 1]).

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Axis-aligned clipping bounds of an orthographic projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrthoBounds {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
    pub near: f32,
    pub far: f32,
}

impl OrthoBounds {
    /// Bounds used to frame the "I": a 20x20 window centered on the origin.
    pub const GLYPH: OrthoBounds = OrthoBounds {
        left: -10.0,
        right: 10.0,
        bottom: -10.0,
        top: 10.0,
        near: -1.0,
        far: 1.0,
    };

    /// Returns true when every axis has a non-zero, finite extent.
    pub fn is_valid(&self) -> bool {
        let extents = [
            self.right - self.left,
            self.top - self.bottom,
            self.far - self.near,
        ];
        extents.iter().all(|e| e.is_finite() && *e != 0.0)
    }

    /// Builds the orthographic projection matrix for these bounds.
    pub fn matrix(&self) -> Mat4 {
        Mat4::orthographic_rh_gl(
            self.left,
            self.right,
            self.bottom,
            self.top,
            self.near,
            self.far,
        )
    }
}

impl Default for OrthoBounds {
    fn default() -> Self {
        Self::GLYPH
    }
}

/// Maps a model-space point through `projection` into clip space.
pub fn to_clip(projection: &Mat4, point: Vec3) -> Vec3 {
    projection.project_point3(point)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_vec3_near(got: Vec3, expected: Vec3) {
        assert!(
            (got - expected).abs().max_element() < 1e-6,
            "expected {expected:?}, got {got:?}"
        );
    }

    #[test]
    fn origin_maps_to_clip_origin() {
        let m = OrthoBounds::GLYPH.matrix();
        assert_vec3_near(to_clip(&m, Vec3::ZERO), Vec3::ZERO);
    }

    #[test]
    fn top_right_corner_maps_to_clip_corner() {
        let m = OrthoBounds::GLYPH.matrix();
        let clip = to_clip(&m, Vec3::new(10.0, 10.0, 0.0));
        assert!((clip.x - 1.0).abs() < 1e-6, "x: {clip:?}");
        assert!((clip.y - 1.0).abs() < 1e-6, "y: {clip:?}");
    }

    #[test]
    fn bottom_left_corner_maps_to_negative_corner() {
        let m = OrthoBounds::GLYPH.matrix();
        let clip = to_clip(&m, Vec3::new(-10.0, -10.0, 0.0));
        assert_vec3_near(clip, Vec3::new(-1.0, -1.0, 0.0));
    }

    #[test]
    fn matrix_matches_gl_ortho_formula() {
        let b = OrthoBounds::GLYPH;
        let cols = b.matrix().to_cols_array();
        let expected = [
            0.1, 0.0, 0.0, 0.0, //
            0.0, 0.1, 0.0, 0.0, //
            0.0, 0.0, -1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ];
        for (i, (g, e)) in cols.iter().zip(expected.iter()).enumerate() {
            assert!((g - e).abs() < 1e-6, "element {i}: expected {e}, got {g}");
        }
    }

    #[test]
    fn near_plane_maps_to_minus_one_depth() {
        // With near = -1, the eye-space point z = 1 lies on the near plane.
        let m = OrthoBounds::GLYPH.matrix();
        let clip = to_clip(&m, Vec3::new(0.0, 0.0, 1.0));
        assert!((clip.z + 1.0).abs() < 1e-6, "z: {clip:?}");
    }

    #[test]
    fn default_is_glyph_bounds() {
        assert_eq!(OrthoBounds::default(), OrthoBounds::GLYPH);
    }

    #[test]
    fn zero_extent_is_invalid() {
        let b = OrthoBounds {
            left: 1.0,
            right: 1.0,
            ..OrthoBounds::GLYPH
        };
        assert!(!b.is_valid());
        assert!(OrthoBounds::GLYPH.is_valid());
    }

    #[test]
    fn bounds_serialize_round_trip_through_json() {
        let json = serde_json::to_string(&OrthoBounds::GLYPH).unwrap();
        let back: OrthoBounds = serde_json::from_str(&json).unwrap();
        assert_eq!(back, OrthoBounds::GLYPH);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn points_inside_bounds_land_inside_clip_cube(
                x in -10.0_f32..=10.0,
                y in -10.0_f32..=10.0,
                z in -1.0_f32..=1.0,
            ) {
                let m = OrthoBounds::GLYPH.matrix();
                let clip = to_clip(&m, Vec3::new(x, y, z));
                prop_assert!(clip.abs().max_element() <= 1.0 + 1e-5, "{clip:?}");
            }

            #[test]
            fn projection_is_linear_scale_in_xy(x in -100.0_f32..=100.0, y in -100.0_f32..=100.0) {
                let m = OrthoBounds::GLYPH.matrix();
                let clip = to_clip(&m, Vec3::new(x, y, 0.0));
                prop_assert!((clip.x - x / 10.0).abs() < 1e-4);
                prop_assert!((clip.y - y / 10.0).abs() < 1e-4);
            }
        }
    }
}
