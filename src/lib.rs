//! Two single-pass regex scanners over plain text.
//!
//!   - `phone`: names in front of `(11)DDDD-DDDD` phone numbers, one per line
//!   - `fences`: triple-backtick code blocks with their language tag

pub mod error;
pub mod fences;
pub mod phone;
pub mod settings;
pub mod text;

pub use error::ScanError;
pub use fences::FencedBlock;
pub use phone::PhoneEntry;
pub use settings::Settings;

/// Installs the stderr `fmt` subscriber, filtered by `RUST_LOG` (default `info`).
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
