use std::path::PathBuf;

use crate::boundary::TextPolicy;
use crate::pipeline::DecodeMode;

pub const DEFAULT_PREFIX: &str = "decoded";

#[derive(Debug, Clone)]
pub struct DecodeConfig {
    pub image_path: PathBuf,
    pub out_dir: PathBuf,
    pub prefix: String,
    pub policy: TextPolicy,
}

impl DecodeConfig {
    pub fn new<P: Into<PathBuf>>(image_path: P) -> Self {
        Self {
            image_path: image_path.into(),
            out_dir: PathBuf::from("."),
            prefix: DEFAULT_PREFIX.to_string(),
            policy: TextPolicy::default(),
        }
    }

    pub fn full_path(&self, mode: DecodeMode) -> PathBuf {
        self.artifact(mode, "full")
    }

    pub fn trimmed_path(&self, mode: DecodeMode) -> PathBuf {
        self.artifact(mode, "trimmed")
    }

    fn artifact(&self, mode: DecodeMode, kind: &str) -> PathBuf {
        self.out_dir
            .join(format!("{}_{}.{}.txt", self.prefix, mode.name(), kind))
    }
}
