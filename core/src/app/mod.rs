//! Support for binaries built on this crate: environment loading and tracing setup.

#[cfg(feature = "app_env")]
pub mod env;
#[cfg(feature = "app_tracing")]
pub mod tracing;
