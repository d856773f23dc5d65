use super::types::Verdict;

/// Default classification boundary.
///
/// Genuine key encodings (RSA/EC material in PEM or DER form) sit near
/// maximal entropy for their byte representation and resist general
/// compression, so their ratio lands near or above 1.0. Templated or
/// padded placeholder content compresses well below it. The boundary
/// is an unvalidated heuristic and stays tunable via the CLI.
pub const DEFAULT_THRESHOLD: f64 = 0.85;

/// Maps a compression ratio to a verdict.
///
/// The boundary itself counts as production: `ratio < threshold` is a
/// honeypot, anything at or above it passes.
pub fn classify(ratio: f64, threshold: f64) -> Verdict {
    if ratio < threshold {
        Verdict::Honeypot
    } else {
        Verdict::Production
    }
}
