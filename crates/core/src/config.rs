//! Render configuration read from a JSON object.
//!
//! Every key is optional: a missing key falls back to the default that
//! reproduces the classic "I" frame. A key that is present with the wrong
//! JSON type (or an out-of-range value) is an `InvalidConfig` error rather
//! than being silently replaced.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::RenderError;
use crate::projection::OrthoBounds;

/// Default surface width in pixels.
pub const DEFAULT_WIDTH: u32 = 500;

/// Default surface height in pixels.
pub const DEFAULT_HEIGHT: u32 = 500;

/// Settings shared by every frame target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Surface width in pixels.
    pub width: u32,
    /// Surface height in pixels.
    pub height: u32,
    /// RGBA clear color in [0, 1].
    pub clear_color: [f32; 4],
    /// Whether fragments are depth-tested with `LESS`.
    pub depth_test: bool,
    /// Orthographic projection bounds.
    pub bounds: OrthoBounds,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            clear_color: [0.0, 0.0, 0.0, 0.0],
            depth_test: true,
            bounds: OrthoBounds::GLYPH,
        }
    }
}

impl RenderConfig {
    /// Reads a config from a JSON object, defaulting missing keys.
    ///
    /// Recognized keys: `width`, `height`, `clear_color` (array of four
    /// numbers), `depth_test`, and `bounds` (object with `left`, `right`,
    /// `bottom`, `top`, `near`, `far`).
    ///
    /// # Errors
    ///
    /// Returns `RenderError::InvalidConfig` if the value is not an object,
    /// a key has the wrong type, a dimension is zero, or the bounds are
    /// degenerate.
    pub fn from_json(params: &Value) -> Result<Self, RenderError> {
        if !params.is_object() {
            return Err(RenderError::InvalidConfig(
                "expected a JSON object".to_string(),
            ));
        }

        let defaults = Self::default();
        let width = param_u32(params, "width", defaults.width)?;
        let height = param_u32(params, "height", defaults.height)?;
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidConfig(
                "width and height must be non-zero".to_string(),
            ));
        }

        let bounds = match params.get("bounds") {
            None => defaults.bounds,
            Some(b) if !b.is_object() => return Err(type_error("bounds", "an object", b)),
            Some(b) => {
                let d = defaults.bounds;
                OrthoBounds {
                    left: param_f32(b, "left", d.left)?,
                    right: param_f32(b, "right", d.right)?,
                    bottom: param_f32(b, "bottom", d.bottom)?,
                    top: param_f32(b, "top", d.top)?,
                    near: param_f32(b, "near", d.near)?,
                    far: param_f32(b, "far", d.far)?,
                }
            }
        };
        if !bounds.is_valid() {
            return Err(RenderError::InvalidConfig(format!(
                "degenerate projection bounds: {bounds:?}"
            )));
        }

        Ok(Self {
            width,
            height,
            clear_color: param_rgba(params, "clear_color", defaults.clear_color)?,
            depth_test: param_bool(params, "depth_test", defaults.depth_test)?,
            bounds,
        })
    }

    /// Parses a JSON document and reads it with [`RenderConfig::from_json`].
    ///
    /// # Errors
    ///
    /// Returns `RenderError::InvalidConfig` on malformed JSON or bad values.
    pub fn from_json_str(text: &str) -> Result<Self, RenderError> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| RenderError::InvalidConfig(format!("malformed JSON: {e}")))?;
        Self::from_json(&value)
    }
}

fn type_error(name: &str, expected: &str, got: &Value) -> RenderError {
    RenderError::InvalidConfig(format!("'{name}' must be {expected}, got {got}"))
}

/// Extracts an `f32` from `params[name]`, or `default` if the key is absent.
pub fn param_f32(params: &Value, name: &str, default: f32) -> Result<f32, RenderError> {
    match params.get(name) {
        None => Ok(default),
        Some(v) => v
            .as_f64()
            .map(|f| f as f32)
            .ok_or_else(|| type_error(name, "a number", v)),
    }
}

/// Extracts a `u32` from `params[name]`, or `default` if the key is absent.
pub fn param_u32(params: &Value, name: &str, default: u32) -> Result<u32, RenderError> {
    match params.get(name) {
        None => Ok(default),
        Some(v) => v
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| type_error(name, "a non-negative 32-bit integer", v)),
    }
}

/// Extracts a `bool` from `params[name]`, or `default` if the key is absent.
pub fn param_bool(params: &Value, name: &str, default: bool) -> Result<bool, RenderError> {
    match params.get(name) {
        None => Ok(default),
        Some(v) => v.as_bool().ok_or_else(|| type_error(name, "a boolean", v)),
    }
}

/// Extracts an RGBA quadruple in [0, 1] from `params[name]`.
pub fn param_rgba(
    params: &Value,
    name: &str,
    default: [f32; 4],
) -> Result<[f32; 4], RenderError> {
    let Some(v) = params.get(name) else {
        return Ok(default);
    };
    let items = v
        .as_array()
        .filter(|a| a.len() == 4)
        .ok_or_else(|| type_error(name, "an array of four numbers", v))?;

    let mut rgba = [0.0; 4];
    for (slot, item) in rgba.iter_mut().zip(items) {
        let c = item
            .as_f64()
            .filter(|c| (0.0..=1.0).contains(c))
            .ok_or_else(|| type_error(name, "numbers in [0, 1]", item))?;
        *slot = c as f32;
    }
    Ok(rgba)
}
