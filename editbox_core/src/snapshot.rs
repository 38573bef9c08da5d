//! Editor snapshot for deterministic replay testing

use crate::{EditMode, Position};

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

/// Complete editor state snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub struct EditSnapshot {
    pub mode: EditMode,
    pub cursor: Position,
    pub lines: Vec<String>,
}

impl EditSnapshot {
    /// Compute a deterministic hash of the snapshot state
    #[cfg(test)]
    pub fn hash(&self) -> u64 {
        use sha2::{Digest, Sha256};

        let mut hasher = Sha256::new();

        hasher.update([self.mode as u8]);

        hasher.update(self.cursor.line.to_le_bytes());
        hasher.update(self.cursor.col.to_le_bytes());

        for line in &self.lines {
            hasher.update(line.as_bytes());
            hasher.update(b"\n");
        }

        let result = hasher.finalize();
        let bytes: [u8; 8] = result[..8].try_into().unwrap();
        u64::from_le_bytes(bytes)
    }
}
