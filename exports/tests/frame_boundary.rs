mod common;

use std::sync::{Arc, Mutex};

use glproxy_interception::{GlExtensions, RenderPipeline, TextureSink, TextureUpload};
use opengl32::ffi::*;
use opengl32::gl11::glDrawArrays;
use opengl32::hooked::{glClear, glTexImage2D, wglDeleteContext, wglSwapBuffers, wglSwapLayerBuffers};

struct Markers;

impl RenderPipeline for Markers {
    fn start(&mut self, gl: &GlExtensions) {
        common::record(format!("start(ext={})", gl.glDrawArrays.is_some()));
    }

    fn stop(&mut self) {
        common::record("stop");
    }

    fn begin_frame(&mut self, frame: u64) {
        common::record(format!("begin_frame {}", frame));
    }

    fn end_frame(&mut self, frame: u64) {
        common::record(format!("end_frame {}", frame));
    }
}

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<usize>>>);

impl TextureSink for Captured {
    fn capture(&mut self, upload: &TextureUpload<'_>) -> glproxy_interception::Result<()> {
        self.0.lock().unwrap().push(upload.pixels.map_or(0, <[u8]>::len));
        Ok(())
    }
}

fn captured() -> &'static Captured {
    static CAPTURED: std::sync::OnceLock<Captured> = std::sync::OnceLock::new();
    CAPTURED.get_or_init(Captured::default)
}

fn install() -> &'static glproxy_interception::ProxyContext {
    common::install(|context| {
        context
            .with_pipeline(Box::new(Markers))
            .with_texture_sink(Box::new(captured().clone()))
    })
}

#[test]
fn end_of_frame_runs_after_the_draws_and_before_the_swap() {
    let _serial = common::serial();
    let context = install();
    common::take_calls();

    unsafe {
        glClear(0x4100);
        glDrawArrays(4, 0, 3);
        glDrawArrays(4, 3, 3);
        wglSwapBuffers(std::ptr::null_mut());
        wglDeleteContext(std::ptr::null_mut());
    }

    assert_eq!(
        common::take_calls(),
        vec![
            "start(ext=true)",
            "begin_frame 0",
            "glClear(0x4100)",
            "glDrawArrays(4, 0, 3)",
            "glDrawArrays(4, 3, 3)",
            "end_frame 0",
            "wglSwapBuffers",
            "stop",
            "wglDeleteContext",
        ]
    );
    assert!(!context.session().is_active());
}

#[test]
fn layer_swaps_end_frames_and_repeated_clears_begin_once() {
    let _serial = common::serial();
    let context = install();
    common::take_calls();

    unsafe {
        glClear(0x4000);
        glClear(0x0100);
        wglSwapLayerBuffers(std::ptr::null_mut(), 1);
        glClear(0x4000);
        wglSwapLayerBuffers(std::ptr::null_mut(), 1);
    }

    assert_eq!(context.session().current_frame(), 2);
    assert_eq!(
        context.session().last_boundary(),
        Some(glproxy_interception::FrameBoundary::End(1))
    );

    unsafe { wglDeleteContext(std::ptr::null_mut()) };

    assert_eq!(
        common::take_calls(),
        vec![
            "start(ext=true)",
            "begin_frame 0",
            "glClear(0x4000)",
            "glClear(0x100)",
            "end_frame 0",
            "wglSwapLayerBuffers(1)",
            "begin_frame 1",
            "glClear(0x4000)",
            "end_frame 1",
            "wglSwapLayerBuffers(1)",
            "stop",
            "wglDeleteContext",
        ]
    );
}

#[test]
fn texture_uploads_are_captured_and_still_forwarded() {
    let _serial = common::serial();
    let context = install();
    common::take_calls();
    captured().0.lock().unwrap().clear();

    let before = common::calls_of(context, "glTexImage2D");
    assert!(!context.session().is_active());

    let pixels = vec![0x7Fu8; 8 * 4 * 4];
    unsafe {
        glTexImage2D(
            gl::TEXTURE_2D,
            0,
            gl::RGBA as GLint,
            8,
            4,
            0,
            gl::RGBA,
            gl::UNSIGNED_BYTE,
            pixels.as_ptr().cast(),
        );
    }

    assert_eq!(*captured().0.lock().unwrap(), vec![128]);
    assert_eq!(common::take_calls(), vec!["glTexImage2D(8x4)"]);
    assert_eq!(common::calls_of(context, "glTexImage2D"), before + 1);
    assert!(!context.session().is_active());
}

#[test]
fn hooked_wgl_calls_hand_back_the_driver_result() {
    let _serial = common::serial();
    let context = install();
    common::take_calls();

    let swaps = common::calls_of(context, "wglSwapBuffers");
    let layer_swaps = common::calls_of(context, "wglSwapLayerBuffers");
    let deletes = common::calls_of(context, "wglDeleteContext");
    let mut rc = 0u8;

    let (swapped, layer_swapped, deleted_null, deleted) = unsafe {
        (
            wglSwapBuffers(std::ptr::null_mut()),
            wglSwapLayerBuffers(std::ptr::null_mut(), 5),
            wglDeleteContext(std::ptr::null_mut()),
            wglDeleteContext((&mut rc as *mut u8).cast()),
        )
    };

    assert_eq!((swapped, layer_swapped, deleted_null, deleted), (1, 5, 0, 1));
    assert_eq!(common::calls_of(context, "wglSwapBuffers"), swaps + 1);
    assert_eq!(common::calls_of(context, "wglSwapLayerBuffers"), layer_swaps + 1);
    assert_eq!(common::calls_of(context, "wglDeleteContext"), deletes + 2);
    assert_eq!(
        common::take_calls(),
        vec!["wglSwapBuffers", "wglSwapLayerBuffers(5)", "wglDeleteContext", "wglDeleteContext"]
    );
}
