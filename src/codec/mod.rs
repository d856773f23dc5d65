//! Compression backends used as entropy probes.
//!
//! Every backend runs at its strongest setting so the resulting ratio
//! is as sensitive an entropy proxy as the codec allows, and every
//! backend is deterministic: identical input and codec always yield
//! identical output.
//!
//! The optional backends (`zstd`, `brotli`) are Cargo features.
//! Availability is resolved once into a [`CodecRegistry`]; requesting
//! a backend that is not built in substitutes the baseline zlib codec
//! instead of failing the file under analysis.

use std::io::Write;

use anyhow::{Context, Result};
use clap::ValueEnum;
use flate2::Compression;
use flate2::write::ZlibEncoder;

/// Selectable compression backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Codec {
    /// DEFLATE/zlib at level 9. Always available, the baseline probe.
    Zlib,
    /// Zstandard at its maximum level.
    Zstd,
    /// Brotli at quality 11. Strong on text-like input.
    Brotli,
}

impl Codec {
    pub fn as_str(&self) -> &'static str {
        match self {
            Codec::Zlib => "zlib",
            Codec::Zstd => "zstd",
            Codec::Brotli => "brotli",
        }
    }
}

/// Backend availability, resolved once at startup.
#[derive(Debug, Clone)]
pub struct CodecRegistry {
    zstd_available: bool,
    brotli_available: bool,
}

impl CodecRegistry {
    /// Resolve which backends this build carries.
    pub fn resolve() -> Self {
        CodecRegistry {
            zstd_available: cfg!(feature = "zstd"),
            brotli_available: cfg!(feature = "brotli"),
        }
    }

    #[cfg(test)]
    fn with_availability(zstd_available: bool, brotli_available: bool) -> Self {
        CodecRegistry {
            zstd_available,
            brotli_available,
        }
    }

    /// The codec that will actually run for a request. Unavailable
    /// backends map to [`Codec::Zlib`].
    pub fn effective(&self, codec: Codec) -> Codec {
        match codec {
            Codec::Zstd if !self.zstd_available => Codec::Zlib,
            Codec::Brotli if !self.brotli_available => Codec::Zlib,
            other => other,
        }
    }

    /// Compress `data` under the requested codec, falling back to zlib
    /// when the codec is not built in.
    pub fn compress(&self, data: &[u8], codec: Codec) -> Result<Vec<u8>> {
        let effective = self.effective(codec);
        if effective != codec {
            tracing::debug!(
                requested = codec.as_str(),
                substituted = effective.as_str(),
                "backend not built in, substituting baseline codec"
            );
        }
        match effective {
            #[cfg(feature = "zstd")]
            Codec::Zstd => compress_zstd(data),
            #[cfg(feature = "brotli")]
            Codec::Brotli => compress_brotli(data),
            _ => compress_zlib(data),
        }
    }
}

fn compress_zlib(data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(
        Vec::with_capacity(data.len() / 2),
        Compression::best(),
    );
    encoder.write_all(data).context("zlib compression failed")?;
    encoder.finish().context("zlib stream finalization failed")
}

#[cfg(feature = "zstd")]
fn compress_zstd(data: &[u8]) -> Result<Vec<u8>> {
    let level = *zstd::compression_level_range().end();
    zstd::stream::encode_all(data, level).context("zstd compression failed")
}

#[cfg(feature = "brotli")]
fn compress_brotli(data: &[u8]) -> Result<Vec<u8>> {
    use brotli::enc::BrotliEncoderParams;

    let params = BrotliEncoderParams {
        quality: 11,
        ..Default::default()
    };
    let mut out = Vec::with_capacity(data.len() / 2);
    brotli::BrotliCompress(&mut &data[..], &mut out, &params)
        .context("brotli compression failed")?;
    Ok(out)
}
