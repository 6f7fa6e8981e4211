// Domain services
pub mod attack_extractor;
pub mod war_hit_pipeline;
pub mod war_normalizer;

pub use attack_extractor::*;
pub use war_hit_pipeline::*;
pub use war_normalizer::*;

#[cfg(test)]
mod test_support;
