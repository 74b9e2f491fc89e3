//! Locates where a recovered script ends and the encoder's random filler begins.
//!
//! The encoder never stores the payload length, so the cut is a guess: the end
//! of the last long run of bytes that look like script text. Random filler
//! rarely produces long printable runs (about 38% of byte values qualify, so a
//! 50-byte run happens with odds near 1e-21), while scripts are made of them.
//! A payload shorter than [`TextPolicy::min_run_len`] is not detected.

/// Tunable knobs for the text-plausibility scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextPolicy {
    /// Shortest span, first to last plausible byte (bridged noise included),
    /// accepted as payload. Zero behaves as one.
    pub min_run_len: usize,
    /// Consecutive implausible bytes a run may swallow before it is closed.
    pub max_noise: usize,
    /// Count 0x80..=0xFF as plausible, for scripts saved as UTF-8.
    pub allow_high_bit: bool,
}

impl Default for TextPolicy {
    fn default() -> Self {
        Self {
            min_run_len: 50,
            max_noise: 0,
            allow_high_bit: false,
        }
    }
}

impl TextPolicy {
    pub fn is_plausible(&self, byte: u8) -> bool {
        is_plausible_text(byte) || (self.allow_high_bit && byte >= 0x80)
    }
}

/// Printable ASCII plus tab, line feed and carriage return.
pub fn is_plausible_text(byte: u8) -> bool {
    matches!(byte, 0x09 | 0x0A | 0x0D | 0x20..=0x7E)
}

/// Outcome of [`find_boundary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// `last` is the inclusive index of the final payload byte.
    Found { last: usize },
    /// No run met the policy; the stream cannot be trimmed with confidence.
    NotFound,
}

impl Boundary {
    pub fn trimmed_len(&self) -> Option<usize> {
        match self {
            Boundary::Found { last } => Some(last + 1),
            Boundary::NotFound => None,
        }
    }

    /// The trimmed view of `stream`. Without a boundary the whole stream is kept.
    pub fn trim<'a>(&self, stream: &'a [u8]) -> &'a [u8] {
        match self.trimmed_len() {
            Some(len) => &stream[..len.min(stream.len())],
            None => stream,
        }
    }
}

/// Scans `stream` forward and returns the end of the last plausible-text run
/// spanning at least `policy.min_run_len` bytes.
pub fn find_boundary(stream: &[u8], policy: &TextPolicy) -> Boundary {
    let min_run = policy.min_run_len.max(1);
    let long_enough = |(first, last): (usize, usize)| last - first + 1 >= min_run;

    let mut found = None;
    // first and last plausible index of the open run
    let mut run: Option<(usize, usize)> = None;
    let mut gap = 0;

    for (i, &byte) in stream.iter().enumerate() {
        if policy.is_plausible(byte) {
            run = Some(match run {
                Some((first, _)) => (first, i),
                None => (i, i),
            });
            gap = 0;
        } else if let Some(open) = run {
            gap += 1;
            if gap > policy.max_noise {
                if long_enough(open) {
                    found = Some(open.1);
                }
                run = None;
                gap = 0;
            }
        }
    }
    if let Some(open) = run {
        if long_enough(open) {
            found = Some(open.1);
        }
    }

    match found {
        Some(last) => Boundary::Found { last },
        None => Boundary::NotFound,
    }
}
