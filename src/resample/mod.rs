mod bootstrap;
mod pairs;
mod permutation;

pub use bootstrap::Bootstrap;
pub use pairs::PairedBootstrap;
pub use permutation::PooledShuffle;
