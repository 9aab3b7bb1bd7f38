use std::ffi::{c_char, c_void, CStr};
use std::{ptr, sync};

use log::{debug, info, warn};

use crate::config::ProxyConfig;
use crate::entry::EntryPoint;
use crate::error::{ProxyError, Result};
use crate::extensions::{self, Extensions, ProcQuery, Source, WglProcQuery};
use crate::fatal;
use crate::ffi::*;
use crate::library::{ModuleLoader, RealLibrary};
use crate::registry::Registry;
use crate::report::{Report, Reporter};
use crate::session::{RenderPipeline, Session};
use crate::stats::FrameStats;
use crate::textures::{TextureSink, TextureUpload};

static CONTEXT: sync::OnceLock<ProxyContext> = sync::OnceLock::new();

/// Installs the process-wide context. A second install keeps the first one.
pub fn install(context: ProxyContext) -> &'static ProxyContext {
    if CONTEXT.set(context).is_err() {
        warn!("Interception context already installed");
    }

    current()
}

pub fn try_current() -> Option<&'static ProxyContext> {
    CONTEXT.get()
}

/// The installed context. Trampolines cannot do anything useful without
/// one, so its absence ends the process.
pub fn current() -> &'static ProxyContext {
    match CONTEXT.get() {
        Some(context) => context,
        None => fatal::terminate(&ProxyError::NoContext),
    }
}

/// Everything the trampolines share: the real driver, the entry-point
/// registry, the extension table and the render session.
pub struct ProxyContext {
    config: ProxyConfig,
    library: RealLibrary,
    registry: Registry,
    extensions: sync::OnceLock<Extensions>,
    proc_query: Option<Box<dyn ProcQuery + Send + Sync>>,
    session: Session,
    reporter: Reporter,
}

impl ProxyContext {
    pub fn new(loader: Box<dyn ModuleLoader>, config: ProxyConfig) -> Self {
        let session = Session::new(Box::new(FrameStats::new(config.stats_interval)));
        let reporter = Reporter::start(config.report);

        Self {
            library: RealLibrary::new(loader),
            registry: Registry::default(),
            extensions: sync::OnceLock::new(),
            proc_query: None,
            session,
            reporter,
            config,
        }
    }

    /// Context backed by the system's real driver, for a shim living in
    /// `base_dir`.
    #[cfg(windows)]
    pub fn system(base_dir: &std::path::Path, config: ProxyConfig) -> Self {
        let dump_dir = base_dir.join(&config.texture_dump_dir);
        let dump_textures = config.dump_textures;
        let context = Self::new(Box::new(crate::system::SystemLoader), config);

        if dump_textures {
            info!("Dumping texture uploads to {:?}", dump_dir);
            context.session.set_texture_sink(Box::new(crate::textures::TextureDumper::new(dump_dir)));
        }

        context
    }

    pub fn with_pipeline(self, pipeline: Box<dyn RenderPipeline>) -> Self {
        self.session.set_pipeline(pipeline);
        self
    }

    pub fn with_texture_sink(self, sink: Box<dyn TextureSink>) -> Self {
        self.session.set_texture_sink(sink);
        self
    }

    /// Replaces the driver's own `wglGetProcAddress` for extension lookups.
    pub fn with_proc_query(mut self, query: Box<dyn ProcQuery + Send + Sync>) -> Self {
        self.proc_query = Some(query);
        self
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Looks up the real address for `entry` and registers it. Entry points
    /// that are also part of the extension table reuse its address.
    pub fn resolve_entry(&self, entry: &'static EntryPoint) -> usize {
        self.registry.insert(entry);

        if let Some(address) = self.extensions.get().and_then(|e| e.address_of(entry.name())) {
            debug!("{} bound from the extension table ({:#010x})", entry.name(), address);
            return address;
        }

        if let Err(e) = self.library.ensure_loaded() {
            fatal::terminate(&e);
        }

        let address = entry.c_name().and_then(|name| self.library.symbol(name)).unwrap_or(0);
        debug!("{} bound to {:#010x}", entry.name(), address);
        address
    }

    pub fn resolve_extensions(&self) -> Result<&Extensions> {
        if let Some(extensions) = self.extensions.get() {
            return Ok(extensions);
        }

        self.library.ensure_loaded()?;

        let resolved = match &self.proc_query {
            Some(query) => extensions::resolve_all(query.as_ref(), &self.library)?,
            None => {
                let query = WglProcQuery::new(self.library.symbol(c"wglGetProcAddress"));
                extensions::resolve_all(&query, &self.library)?
            }
        };

        let from = |source| resolved.resolutions().iter().filter(|r| r.source == Some(source)).count();
        info!(
            "Extension table ready, {} entries via wglGetProcAddress, {} via exports",
            from(Source::ProcQuery),
            from(Source::Export)
        );

        Ok(self.extensions.get_or_init(|| resolved))
    }

    /// The extension table, resolved on first use. Missing required entries
    /// end the process.
    pub fn extensions(&self) -> &Extensions {
        match self.resolve_extensions() {
            Ok(extensions) => extensions,
            Err(e) => fatal::terminate(&e),
        }
    }

    pub fn before_clear(&self) {
        self.session.on_clear(|| *self.extensions().gl());
    }

    pub fn before_present(&self) {
        self.session.on_present();
    }

    pub fn before_context_teardown(&self) {
        self.session.on_context_teardown();
        glproxy_logging::flush();
    }

    /// Hands a `glTexImage2D` payload to the texture sink when dumping is on.
    ///
    /// # Safety
    /// Same contract as [`TextureUpload::from_raw`] for `pixels` read from
    /// client memory.
    #[allow(clippy::too_many_arguments)]
    pub unsafe fn before_texture_upload(
        &self,
        target: GLenum,
        level: GLint,
        internal_format: GLint,
        width: GLsizei,
        height: GLsizei,
        border: GLint,
        format: GLenum,
        type_: GLenum,
        pixels: *const c_void,
    ) {
        if !self.session.dump_textures() {
            return;
        }

        // With an unpack buffer bound, `pixels` is an offset into that buffer.
        let pixels = if !pixels.is_null() && self.unpack_buffer_bound() {
            debug!("Texture upload sourced from a pixel unpack buffer, payload not captured");
            ptr::null()
        } else {
            pixels
        };

        let upload = TextureUpload::from_raw(
            target, level, internal_format, width, height, border, format, type_, pixels,
        );
        self.session.on_texture_upload(&upload);
    }

    /// Whether a pixel unpack buffer is bound on the current context. Drivers
    /// without buffer objects are never queried.
    pub fn unpack_buffer_bound(&self) -> bool {
        let table = self.extensions().gl();
        let (Some(_), Some(get_integerv)) = (table.glBindBuffer, table.glGetIntegerv) else {
            return false;
        };

        let mut binding: GLint = 0;
        unsafe { get_integerv(gl::PIXEL_UNPACK_BUFFER_BINDING, &mut binding) };
        binding != 0
    }

    /// Logs the name an application asks the driver for.
    ///
    /// # Safety
    /// `name` must be null, an ordinal below 0x10000, or a NUL-terminated
    /// string.
    pub unsafe fn before_proc_query(&self, function: &str, name: *const c_char) {
        if !self.config.log_proc_queries {
            return;
        }

        match name as usize {
            0 => info!("{}(null)", function),
            ordinal if ordinal < 0x10000 => info!("{}(#{})", function, ordinal),
            _ => info!("{}('{}')", function, CStr::from_ptr(name).to_string_lossy()),
        }
    }

    /// Writes the invocation report. Only the first call produces one.
    pub fn shutdown(&self) -> Option<Report> {
        self.reporter.shutdown(&self.registry)
    }

    pub fn unload(&self) {
        self.library.unload();
    }
}
