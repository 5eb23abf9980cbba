pub mod clock;
pub mod weather;

pub use clock::WorldClock;
pub use weather::Weather;
