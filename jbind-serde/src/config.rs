//! Process-wide render configuration
//!
//! One shared resource exists in this crate: the configuration the service
//! functions consult when rendering messages. It is initialized lazily,
//! readable from any number of threads at once, and replaced with a single
//! atomic swap; a reader either sees the old configuration or the new one,
//! never a half-built value.
//!
//! The handle is deliberately coarse. Conversions themselves are pure and
//! take no configuration; only the final rendering step does.
//!
//! # Examples
//!
//! ```rust
//! use jbind_serde::config::{render_config, set_render_config, RenderConfig};
//!
//! set_render_config(RenderConfig::new().pretty(true));
//! assert!(render_config().is_pretty());
//! set_render_config(RenderConfig::new());
//! ```

use std::sync::{Arc, OnceLock, RwLock};
use tracing::debug;

/// Options applied when rendering a message to text or bytes
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    pretty: bool,
}

impl RenderConfig {
    /// Create the default configuration (compact output).
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose between pretty-printed and compact output.
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// True when output is pretty-printed.
    pub fn is_pretty(&self) -> bool {
        self.pretty
    }
}

static CONFIG: OnceLock<RwLock<Arc<RenderConfig>>> = OnceLock::new();

fn cell() -> &'static RwLock<Arc<RenderConfig>> {
    CONFIG.get_or_init(|| RwLock::new(Arc::new(RenderConfig::default())))
}

/// Returns the current configuration.
///
/// The returned handle stays valid even if the configuration is replaced
/// while it is held; replacement affects subsequent calls only.
pub fn render_config() -> Arc<RenderConfig> {
    cell().read().unwrap_or_else(|e| e.into_inner()).clone()
}

/// Replaces the current configuration.
///
/// The swap is atomic with respect to [`render_config`] readers.
pub fn set_render_config(config: RenderConfig) {
    let mut slot = cell().write().unwrap_or_else(|e| e.into_inner());
    *slot = Arc::new(config);
    debug!(pretty = slot.is_pretty(), "render configuration replaced");
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::thread;

    #[test]
    #[serial(render_config)]
    fn replacement_is_visible_to_later_readers() {
        set_render_config(RenderConfig::new().pretty(true));
        assert!(render_config().is_pretty());
        set_render_config(RenderConfig::new());
        assert!(!render_config().is_pretty());
    }

    #[test]
    #[serial(render_config)]
    fn held_handles_outlive_a_swap() {
        set_render_config(RenderConfig::new().pretty(true));
        let held = render_config();
        set_render_config(RenderConfig::new());
        assert!(held.is_pretty());
        assert!(!render_config().is_pretty());
    }

    #[test]
    #[serial(render_config)]
    fn concurrent_readers_always_see_a_complete_value() {
        let readers: Vec<_> = (0..8)
            .map(|_| {
                thread::spawn(|| {
                    for _ in 0..100 {
                        // either configuration is fine; a torn value is not
                        let _ = render_config().is_pretty();
                    }
                })
            })
            .collect();
        for _ in 0..50 {
            set_render_config(RenderConfig::new().pretty(true));
            set_render_config(RenderConfig::new());
        }
        for reader in readers {
            reader.join().unwrap();
        }
    }
}
