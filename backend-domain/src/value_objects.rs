// Domain value objects
pub mod identifiers;
pub mod war_timestamp;
pub mod war_type;

pub use identifiers::*;
pub use war_timestamp::*;
pub use war_type::*;
