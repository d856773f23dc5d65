//! # Keysift - Compression-Signature Triage for Key Material
//!
//! Keysift scans a directory of candidate cryptographic-key files and
//! flags the ones that look synthetic. It never parses key formats;
//! instead it compresses each file with a general-purpose codec and
//! reads the ratio as an entropy proxy: genuine key material is close
//! to maximal entropy and barely compresses, while templated or padded
//! placeholder content compresses well below it.
//!
//! ## Caveat
//!
//! The classification is a probabilistic heuristic, not a proof of
//! authenticity. The boundary ratio is tunable (`--threshold`) and an
//! adversary can engineer a honeypot that resists entropy analysis.
//! Treat verdicts as triage input, not as a security property.
//!
//! ## Quick Start
//!
//! ```bash
//! # Scan a directory of key files with the baseline zlib probe
//! keysift --target ./keys
//!
//! # Use the zstd backend and a stricter boundary
//! keysift --target ./keys --algo zstd --threshold 0.9
//! ```

pub mod analyzer;
pub mod cli;
pub mod codec;

pub use cli::{Cli, Output};

/// Result type alias for keysift operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
