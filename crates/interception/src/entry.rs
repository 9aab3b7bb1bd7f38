use std::ffi::CStr;
use std::mem;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;

use crate::context::{self, ProxyContext};
use crate::error::ProxyError;
use crate::fatal;

/// Lazily bound slot for one exported entry point.
///
/// Every trampoline owns exactly one of these as a function-local `static`.
/// The real address is looked up on the first call and never changes after
/// that; `calls` only ever grows.
pub struct EntryPoint {
    symbol: &'static str,
    calls: AtomicU64,
    address: OnceLock<usize>,
}

impl EntryPoint {
    /// `symbol` must carry a trailing NUL, e.g. `"glEnable\0"`.
    pub const fn new(symbol: &'static str) -> Self {
        Self {
            symbol,
            calls: AtomicU64::new(0),
            address: OnceLock::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.symbol.trim_end_matches('\0')
    }

    pub fn c_name(&self) -> Option<&'static CStr> {
        CStr::from_bytes_with_nul(self.symbol.as_bytes()).ok()
    }

    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::Relaxed)
    }

    /// The cached real address, `None` until resolved or if resolution failed.
    pub fn address(&self) -> Option<usize> {
        self.address.get().copied().filter(|address| *address != 0)
    }

    /// Resolves against `context` on the first call only. Zero means the
    /// driver does not provide the entry point.
    pub fn resolve_in(&'static self, context: &ProxyContext) -> usize {
        *self.address.get_or_init(|| context.resolve_entry(self))
    }

    /// Counts one invocation and hands back the real function as `F`.
    ///
    /// # Safety
    /// `F` must be the `extern "system"` function pointer type matching the
    /// real entry point's signature.
    pub unsafe fn bind_in<F: Copy>(&'static self, context: &ProxyContext) -> Option<F> {
        assert_eq!(mem::size_of::<F>(), mem::size_of::<usize>());

        let address = self.resolve_in(context);
        if address == 0 {
            return None;
        }

        self.calls.fetch_add(1, Ordering::Relaxed);
        Some(mem::transmute_copy::<usize, F>(&address))
    }

    /// [`EntryPoint::bind_in`] against the process context. A trampoline
    /// whose real export is missing ends the process.
    ///
    /// # Safety
    /// Same contract as [`EntryPoint::bind_in`].
    #[inline]
    pub unsafe fn bind<F: Copy>(&'static self) -> F {
        match self.bind_in(context::current()) {
            Some(real) => real,
            None => fatal::terminate(&ProxyError::MissingEntryPoint(self.name().to_string())),
        }
    }
}
