use std::cell::Cell;
use std::rc::Rc;

use super::debug::{pending_errors, ErrorCategory, GlError};
use super::GraphicsApi;

/// What to do once a wrapped call leaves an error flag behind.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ErrorPolicy {
    /// Panic with the decoded error. GL errors are programming defects
    /// (mismatched attributes, stale handles, dead context).
    Abort,
    /// Log the error and keep it for [`GlContext::take_error`].
    Report,
}

/// Configuration for the checked context.
#[derive(Debug, Clone)]
pub struct GlConfig {
    /// Defaults to `Abort` in debug builds and `Report` in release builds.
    pub error_policy: ErrorPolicy,

    /// Upper bound on error flags popped around a single call.
    ///
    /// A lost context can report errors indefinitely.
    pub drain_limit: usize,
}

impl Default for GlConfig {
    fn default() -> Self {
        Self {
            error_policy: if cfg!(debug_assertions) {
                ErrorPolicy::Abort
            } else {
                ErrorPolicy::Report
            },
            drain_limit: 64,
        }
    }
}

/// The one graphics context every GPU object in this crate is created from.
///
/// All API traffic goes through [`GlContext::call`], which brackets the call
/// with error checks. Objects hold an `Rc` to the context, which keeps them on
/// the thread that owns the GL context.
///
/// The real OpenGL context is owned by the windowing layer; drop every object
/// created here before that context is destroyed.
pub struct GlContext<G: GraphicsApi> {
    api: G,
    config: GlConfig,
    last_error: Cell<Option<GlError>>,
}

impl<G: GraphicsApi> GlContext<G> {
    pub fn new(api: G, config: GlConfig) -> Rc<Self> {
        let ctx = Self {
            api,
            config,
            last_error: Cell::new(None),
        };
        log::info!("using OpenGL {}", ctx.version());
        Rc::new(ctx)
    }

    /// Driver-reported `GL_VERSION` string.
    pub fn version(&self) -> String {
        self.call("get_parameter_string", |gl| gl.version())
    }

    /// Unchecked access to the underlying API.
    pub fn api(&self) -> &G {
        &self.api
    }

    pub fn config(&self) -> &GlConfig {
        &self.config
    }

    /// Runs `f` against the API with error checking around it.
    ///
    /// Stale flags are discarded first so they are never blamed on `call`.
    /// Afterwards the first new error is reported under the configured
    /// [`ErrorPolicy`]; any further flags raised by the same call are logged.
    pub fn call<R>(&self, call: &'static str, f: impl FnOnce(&G) -> R) -> R {
        let limit = self.config.drain_limit;

        let stale = pending_errors(&self.api).take(limit).count();
        if stale > 0 {
            log::warn!("discarded {stale} stale GL error(s) before `{call}`");
        }

        let out = f(&self.api);

        let mut errors = pending_errors(&self.api).take(limit);
        if let Some(category) = errors.next() {
            for extra in errors {
                log::error!("[OpenGL Error] `{call}` also raised {extra}");
            }
            self.report(GlError { call, category });
        }

        out
    }

    /// Returns and clears the last error recorded under [`ErrorPolicy::Report`].
    pub fn take_error(&self) -> Option<GlError> {
        self.last_error.take()
    }

    /// Reports a call rejected before reaching the API (an argument the API
    /// cannot represent) exactly like an error the API raised.
    pub(crate) fn reject(&self, call: &'static str, category: ErrorCategory) {
        self.report(GlError { call, category });
    }

    fn report(&self, err: GlError) {
        log::error!("{err}");
        // A second panic while unwinding (e.g. from a Drop) would abort.
        if self.config.error_policy == ErrorPolicy::Abort && !std::thread::panicking() {
            panic!("{err}");
        }
        self.last_error.set(Some(err));
    }
}
