pub mod builders;
pub mod fake_invoker;

use std::io::Write;
use std::sync::{Arc, Mutex, Once};
use rhobatch::logging::LOG_ENV_VAR;
use tracing_subscriber::{EnvFilter, fmt};

static INIT: Once = Once::new();

/// Install a test-captured tracing subscriber once per test binary.
///
/// The filter comes from `RHOBATCH_LOG`, then `RUST_LOG`, then "info".
/// Output only shows for failing tests unless run with `--nocapture`.
pub fn init_tracing() {
    INIT.call_once(|| {
        let directives = std::env::var(LOG_ENV_VAR)
            .or_else(|_| std::env::var(EnvFilter::DEFAULT_ENV))
            .unwrap_or_else(|_| "info".to_string());

        let _ = fmt()
            .with_env_filter(EnvFilter::new(directives))
            .with_test_writer()
            .try_init();
    });
}

/// Cloneable in-memory console for capturing runner notices.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, split into lines.
    pub fn lines(&self) -> Vec<String> {
        let bytes = self.0.lock().unwrap().clone();
        String::from_utf8(bytes)
            .expect("console output is UTF-8")
            .lines()
            .map(str::to_string)
            .collect()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
