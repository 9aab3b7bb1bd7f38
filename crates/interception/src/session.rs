use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError, TryLockError};

use log::{debug, info, warn};

use crate::extensions::GlExtensions;
use crate::textures::{TextureSink, TextureUpload};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderState {
    Inactive,
    Active,
}

/// Anchor points of one rendered frame, tagged with the frame number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameBoundary {
    Begin(u64),
    End(u64),
}

/// Injected rendering logic driven by the session hooks.
///
/// Every method runs synchronously inside the intercepted call, before the
/// call is forwarded to the driver.
pub trait RenderPipeline: Send {
    fn start(&mut self, _gl: &GlExtensions) {}

    fn stop(&mut self) {}

    fn begin_frame(&mut self, _frame: u64) {}

    fn end_frame(&mut self, _frame: u64) {}
}

/// Pipeline that injects nothing.
pub struct Passthrough;

impl RenderPipeline for Passthrough {}

struct Hooks {
    state: RenderState,
    in_frame: bool,
    pipeline: Box<dyn RenderPipeline>,
    textures: Option<Box<dyn TextureSink>>,
}

/// Render-state machine for one process. Owned by the proxy context so tests
/// can build independent sessions.
pub struct Session {
    hooks: Mutex<Hooks>,
    active: AtomicBool,
    frame: AtomicU64,
    boundary: Mutex<Option<FrameBoundary>>,
    dump_textures: AtomicBool,
}

impl Session {
    pub fn new(pipeline: Box<dyn RenderPipeline>) -> Self {
        Self {
            hooks: Mutex::new(Hooks {
                state: RenderState::Inactive,
                in_frame: false,
                pipeline,
                textures: None,
            }),
            active: AtomicBool::new(false),
            frame: AtomicU64::new(0),
            boundary: Mutex::new(None),
            dump_textures: AtomicBool::new(false),
        }
    }

    pub fn set_pipeline(&self, pipeline: Box<dyn RenderPipeline>) {
        self.hooks.lock().unwrap_or_else(PoisonError::into_inner).pipeline = pipeline;
    }

    /// Installs the texture sink and enables capture.
    pub fn set_texture_sink(&self, sink: Box<dyn TextureSink>) {
        self.hooks.lock().unwrap_or_else(PoisonError::into_inner).textures = Some(sink);
        self.dump_textures.store(true, Ordering::SeqCst);
    }

    pub fn dump_textures(&self) -> bool {
        self.dump_textures.load(Ordering::SeqCst)
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    pub fn state(&self) -> RenderState {
        if self.is_active() {
            RenderState::Active
        } else {
            RenderState::Inactive
        }
    }

    /// Number of frames presented since the session started.
    pub fn current_frame(&self) -> u64 {
        self.frame.load(Ordering::SeqCst)
    }

    pub fn last_boundary(&self) -> Option<FrameBoundary> {
        *self.boundary.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Clear hook. The first clear starts the session; the first clear after
    /// each present begins a frame. `extensions` is only consulted on start.
    /// Returns `false` when the hook was skipped for a re-entrant call.
    pub fn on_clear(&self, extensions: impl FnOnce() -> GlExtensions) -> bool {
        let Some(mut hooks) = self.enter() else {
            return false;
        };

        if hooks.state == RenderState::Inactive {
            let gl = extensions();
            hooks.pipeline.start(&gl);
            hooks.state = RenderState::Active;
            hooks.in_frame = false;
            self.frame.store(0, Ordering::SeqCst);
            self.active.store(true, Ordering::SeqCst);
            info!("Render session started");
        }

        if !hooks.in_frame {
            let frame = self.current_frame();
            hooks.pipeline.begin_frame(frame);
            hooks.in_frame = true;
            self.mark(FrameBoundary::Begin(frame));
        }

        true
    }

    /// Present hook, runs right before the swap is forwarded.
    pub fn on_present(&self) -> bool {
        let Some(mut hooks) = self.enter() else {
            return false;
        };

        if hooks.state == RenderState::Inactive {
            return true;
        }

        let frame = self.current_frame();
        hooks.pipeline.end_frame(frame);
        hooks.in_frame = false;
        self.mark(FrameBoundary::End(frame));
        self.frame.store(frame + 1, Ordering::SeqCst);

        true
    }

    /// Context teardown hook. The next clear starts a fresh session.
    pub fn on_context_teardown(&self) -> bool {
        let Some(mut hooks) = self.enter() else {
            return false;
        };

        if hooks.state == RenderState::Active {
            hooks.pipeline.stop();
            hooks.state = RenderState::Inactive;
            hooks.in_frame = false;
            self.active.store(false, Ordering::SeqCst);
            info!("Render session stopped after {} frames", self.current_frame());
        }

        true
    }

    /// Texture upload hook. Capture failures are logged and otherwise ignored.
    pub fn on_texture_upload(&self, upload: &TextureUpload<'_>) -> bool {
        if !self.dump_textures() {
            return true;
        }

        let Some(mut hooks) = self.enter() else {
            return false;
        };

        if let Some(sink) = hooks.textures.as_mut() {
            if let Err(e) = sink.capture(upload) {
                warn!("Texture capture failed: {}", e);
            }
        }

        true
    }

    fn enter(&self) -> Option<MutexGuard<'_, Hooks>> {
        match self.hooks.try_lock() {
            Ok(hooks) => Some(hooks),
            Err(TryLockError::Poisoned(poisoned)) => Some(poisoned.into_inner()),
            Err(TryLockError::WouldBlock) => {
                debug!("Skipping re-entrant session hook");
                None
            }
        }
    }

    fn mark(&self, boundary: FrameBoundary) {
        *self.boundary.lock().unwrap_or_else(PoisonError::into_inner) = Some(boundary);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Box::new(Passthrough))
    }
}
