use std::panic;
use std::sync::OnceLock;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Initialize the tracing subscriber for a binary.
///
/// Filtering comes from `RUST_LOG` (default "info"). When `VM_LOG_DIR` is
/// set, output goes to `<VM_LOG_DIR>/<app>.log` with daily rotation;
/// otherwise it stays on stdout. Calling this twice is harmless.
pub fn init_tracing_subscriber(app_name: &'static str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter);

    let log_dir = std::env::var_os("VM_LOG_DIR").map(std::path::PathBuf::from);
    match log_dir {
        Some(dir) => {
            if let Err(err) = std::fs::create_dir_all(&dir) {
                eprintln!("failed to create VM_LOG_DIR ({err}); logging to stdout");
                let _ = builder.try_init();
                return;
            }
            let appender = tracing_appender::rolling::daily(dir, format!("{app_name}.log"));
            let (non_blocking, guard) = tracing_appender::non_blocking(appender);
            let _ = LOG_GUARD.set(guard);
            let _ = builder.with_writer(non_blocking).with_ansi(false).try_init();
        }
        None => {
            let _ = builder.try_init();
        }
    }
}

/// Route panics through `tracing` with file/line context so they land in the
/// same sink as regular logs. Installed once per process.
pub fn install_tracing_panic_hook(app_name: &'static str) {
    static INSTALLED: OnceLock<()> = OnceLock::new();

    INSTALLED.get_or_init(|| {
        panic::set_hook(Box::new(move |info| {
            let location = info
                .location()
                .map(|loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()))
                .unwrap_or_else(|| "unknown".into());
            let message = info
                .payload()
                .downcast_ref::<&str>()
                .map(|s| (*s).to_string())
                .or_else(|| info.payload().downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "panic payload not string".into());

            tracing::error!(
                application = app_name,
                %location,
                panic_message = %message,
                "panic captured"
            );
        }));
    });
}
