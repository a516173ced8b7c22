pub mod config;
pub mod mac;
pub mod vendors;

/// Positive-outcome log line; rendered with the `[+]` symbol.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        tracing::info!($($arg)*)
    };
}
