use std::fmt;

use log::{debug, warn};

use crate::boundary::{find_boundary, Boundary, TextPolicy};
use crate::pixels::PixelGrid;
use crate::stego::{decode_embedded, decode_raw};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeMode {
    Embedded,
    Raw,
}

impl DecodeMode {
    pub fn name(&self) -> &'static str {
        match self {
            DecodeMode::Embedded => "embedded",
            DecodeMode::Raw => "raw",
        }
    }
}

impl fmt::Display for DecodeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone)]
pub struct Candidate {
    pub mode: DecodeMode,
    pub stream: Vec<u8>,
    pub boundary: Boundary,
}

impl Candidate {
    pub fn new(mode: DecodeMode, stream: Vec<u8>, policy: &TextPolicy) -> Self {
        let boundary = find_boundary(&stream, policy);
        match boundary {
            Boundary::Found { last } => debug!(
                "[{}] payload ends at byte {} of {}",
                mode,
                last,
                stream.len()
            ),
            Boundary::NotFound => warn!(
                "[{}] no run of {}+ text bytes in {} bytes, trimmed output keeps the full stream",
                mode,
                policy.min_run_len.max(1),
                stream.len()
            ),
        }
        Self {
            mode,
            stream,
            boundary,
        }
    }

    pub fn trimmed(&self) -> &[u8] {
        self.boundary.trim(&self.stream)
    }
}

/// Runs both decoders over the same grid and returns `[embedded, raw]`.
///
/// The two modes share nothing but the read-only grid, so they run on the
/// rayon pool side by side.
pub fn decode_candidates(grid: &PixelGrid, policy: &TextPolicy) -> [Candidate; 2] {
    let (embedded, raw) = rayon::join(
        || Candidate::new(DecodeMode::Embedded, decode_embedded(grid), policy),
        || Candidate::new(DecodeMode::Raw, decode_raw(grid), policy),
    );
    [embedded, raw]
}
