pub mod height;
pub mod terrain;

pub use height::HeightMap;
pub use terrain::ChunkGenerator;
