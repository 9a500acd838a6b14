//! Offscreen GLES 2 context for device tests.
//!
//! Uses the EGL device platform, so no window system is needed. Drawing
//! goes to a framebuffer object with RGBA8 color and 16-bit depth
//! attachments, left bound for the lifetime of the context.

#![allow(unsafe_code)]

use std::cell::RefCell;

use glow::HasContext;
use glutin::api::egl::context::PossiblyCurrentContext;
use glutin::api::egl::device::Device;
use glutin::api::egl::display::Display;
use glutin::config::{ConfigSurfaceTypes, ConfigTemplateBuilder};
use glutin::context::{ContextApi, ContextAttributesBuilder, Version};
use glutin::prelude::*;

use crate::surface::{ContextKind, Surface};

/// A current GLES 2 context that hands its `glow::Context` out once, as a
/// `"webgl"` context.
pub struct HeadlessGl {
    gl: RefCell<Option<glow::Context>>,
    width: u32,
    height: u32,
    _context: PossiblyCurrentContext,
}

impl HeadlessGl {
    /// Panics if the machine has no usable EGL device.
    pub fn new(width: u32, height: u32) -> Self {
        let device = Device::query_devices()
            .expect("EGL device enumeration")
            .next()
            .expect("no EGL device");
        let display = unsafe { Display::with_device(&device, None) }.expect("EGL display");

        let template = ConfigTemplateBuilder::new()
            .with_surface_type(ConfigSurfaceTypes::empty())
            .build();
        let config = unsafe { display.find_configs(template) }
            .expect("EGL configs")
            .next()
            .expect("no EGL config");
        let attributes = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::Gles(Some(Version::new(2, 0))))
            .build(None);
        let context = unsafe { display.create_context(&config, &attributes) }
            .expect("GLES 2 context")
            .make_current_surfaceless()
            .expect("surfaceless make-current");

        let gl = unsafe {
            glow::Context::from_loader_function_cstr(|name| display.get_proc_address(name))
        };
        attach_offscreen_target(&gl, width, height);

        Self {
            gl: RefCell::new(Some(gl)),
            width,
            height,
            _context: context,
        }
    }

    /// Takes the context directly, for tests below the session level.
    pub fn take(&self) -> glow::Context {
        self.gl.borrow_mut().take().expect("context already taken")
    }
}

impl Surface for HeadlessGl {
    type Context = glow::Context;

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn try_context(&self, kind: ContextKind) -> Option<glow::Context> {
        match kind {
            ContextKind::WebGl => self.gl.borrow_mut().take(),
            ContextKind::ExperimentalWebGl => None,
        }
    }
}

fn attach_offscreen_target(gl: &glow::Context, width: u32, height: u32) {
    let (w, h) = (width as i32, height as i32);
    unsafe {
        let framebuffer = gl.create_framebuffer().expect("framebuffer");
        gl.bind_framebuffer(glow::FRAMEBUFFER, Some(framebuffer));

        let color = gl.create_renderbuffer().expect("color renderbuffer");
        gl.bind_renderbuffer(glow::RENDERBUFFER, Some(color));
        gl.renderbuffer_storage(glow::RENDERBUFFER, glow::RGBA8, w, h);
        gl.framebuffer_renderbuffer(
            glow::FRAMEBUFFER,
            glow::COLOR_ATTACHMENT0,
            glow::RENDERBUFFER,
            Some(color),
        );

        let depth = gl.create_renderbuffer().expect("depth renderbuffer");
        gl.bind_renderbuffer(glow::RENDERBUFFER, Some(depth));
        gl.renderbuffer_storage(glow::RENDERBUFFER, glow::DEPTH_COMPONENT16, w, h);
        gl.framebuffer_renderbuffer(
            glow::FRAMEBUFFER,
            glow::DEPTH_ATTACHMENT,
            glow::RENDERBUFFER,
            Some(depth),
        );

        assert_eq!(
            gl.check_framebuffer_status(glow::FRAMEBUFFER),
            glow::FRAMEBUFFER_COMPLETE,
            "offscreen framebuffer incomplete"
        );
    }
}

/// Reads the bound framebuffer as RGBA8, bottom row first.
pub fn read_rgba(gl: &glow::Context, width: u32, height: u32) -> Vec<u8> {
    let mut pixels = vec![0_u8; width as usize * height as usize * 4];
    unsafe {
        gl.read_pixels(
            0,
            0,
            width as i32,
            height as i32,
            glow::RGBA,
            glow::UNSIGNED_BYTE,
            glow::PixelPackData::Slice(Some(&mut pixels)),
        );
    }
    pixels
}
