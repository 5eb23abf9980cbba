pub mod block;
pub mod block_pos;
pub mod chunk;
pub mod chunk_coord;
pub mod circuit;
pub mod generator;
pub mod store;
pub mod streaming;

// Re-export commonly used types
pub use block::{BlockKind, BlockType, Power};
pub use block_pos::BlockPos;
pub use chunk::{Chunk, SerializedChunk};
pub use chunk_coord::{ChunkCoord, CHUNK_SIZE};
pub use circuit::{CircuitResolver, Interaction, SignalRule};
pub use generator::{ChunkGenerator, HeightMap};
pub use store::{World, WorldExport};
pub use streaming::StreamingController;
