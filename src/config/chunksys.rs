use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkSysConfig {
    /// Chebyshev radius, in chunks, kept resident around the player.
    pub render_distance: u32,
}

impl Default for ChunkSysConfig {
    fn default() -> Self {
        Self { render_distance: 2 }
    }
}
