use crate::utils::error::KeyError;
use crate::world::block_pos::{parse_components, BlockPos};
use glam::{IVec2, Vec3};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Width and depth of a chunk column, in blocks.
pub const CHUNK_SIZE: i32 = 16;

/// Lowest chunk index whose columns all fit in `i32`.
pub const MIN_CHUNK: i32 = i32::MIN / CHUNK_SIZE;
/// Highest chunk index whose columns all fit in `i32`.
pub const MAX_CHUNK: i32 = i32::MAX / CHUNK_SIZE;

/// Column address of a chunk: `(floor(x / 16), floor(z / 16))`.
///
/// Both components stay within `MIN_CHUNK..=MAX_CHUNK`, so every chunk owns
/// exactly the columns its origin covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkCoord(IVec2);

impl Serialize for ChunkCoord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (self.0.x, self.0.y).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ChunkCoord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (x, z) = <(i32, i32)>::deserialize(deserializer)?;
        Ok(ChunkCoord::new(x, z))
    }
}

impl PartialOrd for ChunkCoord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ChunkCoord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .x
            .cmp(&other.0.x)
            .then_with(|| self.0.y.cmp(&other.0.y))
    }
}

impl ChunkCoord {
    /// Out-of-range components are clamped onto the edge chunk.
    pub fn new(x: i32, z: i32) -> Self {
        Self(IVec2::new(
            x.clamp(MIN_CHUNK, MAX_CHUNK),
            z.clamp(MIN_CHUNK, MAX_CHUNK),
        ))
    }

    pub fn x(&self) -> i32 {
        self.0.x
    }

    pub fn z(&self) -> i32 {
        self.0.y
    }

    /// Chunk owning a world column. Uses floor division, so `-1` maps to `-1`.
    pub fn from_block(x: i32, z: i32) -> Self {
        Self::new(x.div_euclid(CHUNK_SIZE), z.div_euclid(CHUNK_SIZE))
    }

    pub fn of(pos: BlockPos) -> Self {
        Self::from_block(pos.x(), pos.z())
    }

    pub fn from_world_pos(pos: Vec3) -> Self {
        let x = (pos.x / CHUNK_SIZE as f32).floor() as i32;
        let z = (pos.z / CHUNK_SIZE as f32).floor() as i32;
        Self::new(x, z)
    }

    /// World (x, z) of the chunk's minimum corner column.
    pub fn origin(&self) -> (i32, i32) {
        (self.0.x * CHUNK_SIZE, self.0.y * CHUNK_SIZE)
    }

    pub fn chebyshev_distance(&self, other: &Self) -> i32 {
        (self.0.x - other.0.x)
            .abs()
            .max((self.0.y - other.0.y).abs())
    }

    /// Every chunk within Chebyshev distance `radius`, row by row. The
    /// window is cut short at the edge of the chunk range.
    pub fn window(&self, radius: i32) -> Vec<Self> {
        let radius = radius.clamp(0, MAX_CHUNK);
        let span = |center: i32| {
            let low = center.saturating_sub(radius).max(MIN_CHUNK);
            let high = center.saturating_add(radius).min(MAX_CHUNK);
            low..=high
        };
        let mut coords = Vec::new();
        for x in span(self.0.x) {
            for z in span(self.0.y) {
                coords.push(Self::new(x, z));
            }
        }
        coords
    }
}

impl Display for ChunkCoord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.0.x, self.0.y)
    }
}

impl FromStr for ChunkCoord {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = parse_components(s, 2)?;
        Ok(Self::new(parts[0], parts[1]))
    }
}

impl From<IVec2> for ChunkCoord {
    fn from(vec: IVec2) -> Self {
        Self::new(vec.x, vec.y)
    }
}

impl From<ChunkCoord> for IVec2 {
    fn from(coord: ChunkCoord) -> Self {
        coord.0
    }
}
