use crate::utils::error::KeyError;
use glam::{IVec3, Vec3};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// The six face-adjacent offsets: ±x, ±y, ±z.
pub const FACE_OFFSETS: [IVec3; 6] = [
    IVec3::new(1, 0, 0),
    IVec3::new(-1, 0, 0),
    IVec3::new(0, 1, 0),
    IVec3::new(0, -1, 0),
    IVec3::new(0, 0, 1),
    IVec3::new(0, 0, -1),
];

/// Absolute world position of a block cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockPos(pub IVec3);

impl BlockPos {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self(IVec3::new(x, y, z))
    }

    pub fn x(&self) -> i32 {
        self.0.x
    }

    pub fn y(&self) -> i32 {
        self.0.y
    }

    pub fn z(&self) -> i32 {
        self.0.z
    }

    /// Cell containing a continuous point.
    pub fn containing(point: Vec3) -> Self {
        Self(point.floor().as_ivec3())
    }

    /// Cell at `delta` from this one, `None` past the edge of the `i32` grid.
    pub fn offset(&self, delta: IVec3) -> Option<Self> {
        Some(Self::new(
            self.0.x.checked_add(delta.x)?,
            self.0.y.checked_add(delta.y)?,
            self.0.z.checked_add(delta.z)?,
        ))
    }

    /// Face-adjacent cells. Cells on the grid edge have fewer than six.
    pub fn face_neighbors(&self) -> impl Iterator<Item = BlockPos> + '_ {
        FACE_OFFSETS.iter().filter_map(move |delta| self.offset(*delta))
    }
}

impl Display for BlockPos {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.0.x, self.0.y, self.0.z)
    }
}

impl FromStr for BlockPos {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = parse_components(s, 3)?;
        Ok(Self::new(parts[0], parts[1], parts[2]))
    }
}

impl From<IVec3> for BlockPos {
    fn from(vec: IVec3) -> Self {
        Self(vec)
    }
}

impl From<(i32, i32, i32)> for BlockPos {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self::new(x, y, z)
    }
}

/// Splits a comma-joined decimal key into exactly `expected` integers.
pub(crate) fn parse_components(key: &str, expected: usize) -> Result<Vec<i32>, KeyError> {
    let parts = key
        .split(',')
        .map(|s| s.parse::<i32>())
        .collect::<Result<Vec<i32>, _>>()
        .map_err(|_| KeyError::MalformedKey(key.to_string()))?;

    if parts.len() != expected {
        return Err(KeyError::WrongArity {
            key: key.to_string(),
            expected,
        });
    }
    Ok(parts)
}
