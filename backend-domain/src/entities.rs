// Domain entities
pub mod config;
pub mod player;
pub mod queries;
pub mod war;
pub mod war_hit;

pub use config::*;
pub use player::*;
pub use queries::*;
pub use war::*;
pub use war_hit::*;
