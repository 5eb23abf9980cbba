use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MobKind {
    Golem,
    Stalker,
}

impl MobKind {
    pub fn max_health(self) -> f32 {
        match self {
            MobKind::Golem => 100.0,
            MobKind::Stalker => 40.0,
        }
    }
}

impl Display for MobKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MobKind::Golem => "golem",
            MobKind::Stalker => "stalker",
        })
    }
}

/// A non-player creature carried in the game snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mob {
    pub id: u32,
    pub kind: MobKind,
    pub position: Vec3,
    pub health: f32,
}

impl Mob {
    /// A fresh mob at full health.
    pub fn new(id: u32, kind: MobKind, position: Vec3) -> Self {
        Self {
            id,
            kind,
            position,
            health: kind.max_health(),
        }
    }
}
