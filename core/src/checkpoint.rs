//! Checkpoint - Save/Restore Generator State
//!
//! Captures one generator's registers as JSON so a stream can be stopped and
//! resumed later, or replayed from an arbitrary point.
//!
//! # Critical Invariants
//!
//! - **Determinism**: a restored generator continues with exactly the values
//!   the original would have produced next
//! - **Integrity**: the stored state hash must match the stored registers
//! - **Kind Matching**: the recorded generator name must match the registers
//! - **Reachable State**: registers no constructor could produce (a zero
//!   xorshift state, an even PCG increment) are rejected

use crate::error::{PrngError, Result};
use crate::registry::{AnyGenerator, GeneratorKind};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Checkpoint format version
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serialized generator state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub version: u32,

    /// Generator name at capture time
    pub kind: GeneratorKind,

    /// Full register state
    pub generator: AnyGenerator,

    /// Number of values drawn before capture (informational)
    pub draws: u64,

    /// SHA256 of the canonical JSON of `generator`
    pub state_hash: String,
}

impl Checkpoint {
    /// Snapshot `generator` after `draws` values
    pub fn capture(generator: &AnyGenerator, draws: u64) -> Result<Self> {
        Ok(Self {
            version: CHECKPOINT_VERSION,
            kind: generator.kind(),
            generator: generator.clone(),
            draws,
            state_hash: compute_state_hash(generator)?,
        })
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse and validate a checkpoint
    pub fn from_json(json: &str) -> Result<Self> {
        let checkpoint: Checkpoint = serde_json::from_str(json)?;
        checkpoint.validate()?;
        Ok(checkpoint)
    }

    /// Check version, kind, registers and hash
    pub fn validate(&self) -> Result<()> {
        if self.version != CHECKPOINT_VERSION {
            return Err(PrngError::CheckpointMismatch(format!(
                "unsupported version {}, expected {}",
                self.version, CHECKPOINT_VERSION
            )));
        }

        let actual_kind = self.generator.kind();
        if actual_kind != self.kind {
            return Err(PrngError::CheckpointMismatch(format!(
                "recorded kind {} but registers belong to {}",
                self.kind, actual_kind
            )));
        }

        if let Some(reason) = self.generator.degenerate_state() {
            return Err(PrngError::CheckpointMismatch(reason));
        }

        let actual_hash = compute_state_hash(&self.generator)?;
        if actual_hash != self.state_hash {
            return Err(PrngError::CheckpointMismatch(format!(
                "state hash mismatch: recorded {}, computed {}",
                self.state_hash, actual_hash
            )));
        }

        Ok(())
    }

    /// Validate and hand back the generator
    pub fn restore(self) -> Result<AnyGenerator> {
        self.validate()?;
        tracing::debug!(generator = %self.kind, draws = self.draws, "restored checkpoint");
        Ok(self.generator)
    }
}

/// Compute deterministic SHA256 hash of a generator's state
///
/// Uses canonical JSON serialization with sorted keys so the hash does not
/// depend on field order.
pub fn compute_state_hash<T: Serialize>(state: &T) -> Result<String> {
    use serde_json::Value;
    use std::collections::BTreeMap;

    let value = serde_json::to_value(state)?;

    // Recursively sort all object keys for canonical representation
    fn canonicalize(value: Value) -> Value {
        match value {
            Value::Object(map) => {
                let sorted: BTreeMap<String, Value> =
                    map.into_iter().map(|(k, v)| (k, canonicalize(v))).collect();
                Value::Object(sorted.into_iter().collect())
            }
            Value::Array(arr) => Value::Array(arr.into_iter().map(canonicalize).collect()),
            other => other,
        }
    }

    let json = serde_json::to_string(&canonicalize(value))?;

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    let result = hasher.finalize();

    Ok(format!("{:x}", result))
}
