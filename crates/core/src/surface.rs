//! Drawing-surface abstraction and rendering-context acquisition.
//!
//! A [`Surface`] reports its pixel size and can be asked for a context of a
//! given [`ContextKind`]. [`acquire_context`] walks the candidate kinds in
//! order and keeps the first one the surface hands out, recording the
//! surface size as the viewport for later frames.

use std::fmt;

use crate::error::RenderError;

/// Kinds of rendering context a surface may be able to provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextKind {
    /// Standard WebGL 1 context (`"webgl"`).
    WebGl,
    /// Pre-standard WebGL context (`"experimental-webgl"`).
    ExperimentalWebGl,
}

impl ContextKind {
    /// The context identifier passed to `getContext`.
    pub fn as_str(self) -> &'static str {
        match self {
            ContextKind::WebGl => "webgl",
            ContextKind::ExperimentalWebGl => "experimental-webgl",
        }
    }
}

impl fmt::Display for ContextKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Context kinds tried by [`acquire_context`], most preferred first.
pub const CONTEXT_CANDIDATES: [ContextKind; 2] =
    [ContextKind::WebGl, ContextKind::ExperimentalWebGl];

/// Pixel dimensions of the drawable area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True if either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Something that can be drawn on: a canvas, an offscreen buffer, a mock.
pub trait Surface {
    /// The raw context type handed out by this surface.
    type Context;

    /// Surface width in pixels.
    fn width(&self) -> u32;

    /// Surface height in pixels.
    fn height(&self) -> u32;

    /// Attempts to obtain a context of `kind`. `None` means this kind is
    /// unavailable; the caller moves on to the next candidate.
    fn try_context(&self, kind: ContextKind) -> Option<Self::Context>;
}

/// An acquired context together with the kind that produced it and the
/// viewport recorded at acquisition time.
#[derive(Debug)]
pub struct GraphicsContext<C> {
    context: C,
    kind: ContextKind,
    viewport: Viewport,
}

impl<C> GraphicsContext<C> {
    pub fn context(&self) -> &C {
        &self.context
    }

    pub fn kind(&self) -> ContextKind {
        self.kind
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Consumes the wrapper, returning the raw context and its viewport.
    pub fn into_parts(self) -> (C, Viewport) {
        (self.context, self.viewport)
    }

    /// Converts the raw context (e.g. a browser context into a `glow`
    /// context) while keeping the kind and viewport.
    pub fn map<D>(self, f: impl FnOnce(C) -> D) -> GraphicsContext<D> {
        GraphicsContext {
            context: f(self.context),
            kind: self.kind,
            viewport: self.viewport,
        }
    }
}

/// Acquires a context using [`CONTEXT_CANDIDATES`].
///
/// # Errors
///
/// Returns `RenderError::ContextUnavailable` if no candidate kind succeeds.
pub fn acquire_context<S: Surface>(surface: &S) -> Result<GraphicsContext<S::Context>, RenderError> {
    acquire_context_from(surface, &CONTEXT_CANDIDATES)
}

/// Acquires a context by trying `candidates` in order; the first success wins.
///
/// # Errors
///
/// Returns `RenderError::ContextUnavailable` listing every kind attempted
/// if none succeeds (including when `candidates` is empty).
pub fn acquire_context_from<S: Surface>(
    surface: &S,
    candidates: &[ContextKind],
) -> Result<GraphicsContext<S::Context>, RenderError> {
    let acquired = candidates
        .iter()
        .find_map(|&kind| surface.try_context(kind).map(|ctx| (kind, ctx)));

    match acquired {
        Some((kind, context)) => {
            let viewport = Viewport::new(surface.width(), surface.height());
            log::debug!(
                "acquired {kind} context, viewport {}x{}",
                viewport.width,
                viewport.height
            );
            Ok(GraphicsContext {
                context,
                kind,
                viewport,
            })
        }
        None => {
            log::error!("no rendering context available");
            Err(RenderError::ContextUnavailable {
                tried: candidates.iter().map(|k| k.to_string()).collect(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Mock surface that only supports the listed kinds and records attempts.
    struct MockSurface {
        supported: Vec<ContextKind>,
        attempts: RefCell<Vec<ContextKind>>,
    }

    impl MockSurface {
        fn supporting(supported: &[ContextKind]) -> Self {
            Self {
                supported: supported.to_vec(),
                attempts: RefCell::new(Vec::new()),
            }
        }
    }

    impl Surface for MockSurface {
        type Context = ContextKind;

        fn width(&self) -> u32 {
            640
        }

        fn height(&self) -> u32 {
            480
        }

        fn try_context(&self, kind: ContextKind) -> Option<ContextKind> {
            self.attempts.borrow_mut().push(kind);
            self.supported.contains(&kind).then_some(kind)
        }
    }

    #[test]
    fn preferred_kind_short_circuits() {
        let surface = MockSurface::supporting(&[ContextKind::WebGl, ContextKind::ExperimentalWebGl]);
        let ctx = acquire_context(&surface).unwrap();
        assert_eq!(ctx.kind(), ContextKind::WebGl);
        assert_eq!(*surface.attempts.borrow(), vec![ContextKind::WebGl]);
    }

    #[test]
    fn falls_back_to_alternate_kind() {
        let surface = MockSurface::supporting(&[ContextKind::ExperimentalWebGl]);
        let ctx = acquire_context(&surface).unwrap();
        assert_eq!(ctx.kind(), ContextKind::ExperimentalWebGl);
        assert_eq!(*ctx.context(), ContextKind::ExperimentalWebGl);
        assert_eq!(surface.attempts.borrow().len(), 2);
    }

    #[test]
    fn records_surface_dimensions_as_viewport() {
        let surface = MockSurface::supporting(&[ContextKind::WebGl]);
        let ctx = acquire_context(&surface).unwrap();
        assert_eq!(ctx.viewport(), Viewport::new(640, 480));
    }

    #[test]
    fn unavailable_when_no_kind_succeeds() {
        let surface = MockSurface::supporting(&[]);
        let result = acquire_context(&surface);
        match result {
            Err(RenderError::ContextUnavailable { tried }) => {
                assert_eq!(tried, vec!["webgl", "experimental-webgl"]);
            }
            other => panic!("expected ContextUnavailable, got {other:?}"),
        }
    }

    #[test]
    fn empty_candidate_list_is_unavailable() {
        let surface = MockSurface::supporting(&[ContextKind::WebGl]);
        let result = acquire_context_from(&surface, &[]);
        assert!(matches!(result, Err(RenderError::ContextUnavailable { .. })));
        assert!(surface.attempts.borrow().is_empty());
    }

    #[test]
    fn map_keeps_kind_and_viewport() {
        let surface = MockSurface::supporting(&[ContextKind::WebGl]);
        let ctx = acquire_context(&surface).unwrap().map(|k| k.as_str().len());
        assert_eq!(*ctx.context(), 5);
        assert_eq!(ctx.kind(), ContextKind::WebGl);
        let (raw, viewport) = ctx.into_parts();
        assert_eq!(raw, 5);
        assert_eq!(viewport, Viewport::new(640, 480));
    }

    #[test]
    fn context_kind_strings_match_get_context_identifiers() {
        assert_eq!(ContextKind::WebGl.as_str(), "webgl");
        assert_eq!(ContextKind::ExperimentalWebGl.to_string(), "experimental-webgl");
    }

    #[test]
    fn empty_viewport_detection() {
        assert!(Viewport::new(0, 10).is_empty());
        assert!(!Viewport::new(1, 1).is_empty());
    }
}
