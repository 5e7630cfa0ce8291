pub mod benchmark;
pub mod error;
pub mod jump;
pub mod lehmer;
pub mod perf_counter;
pub mod rng_core;
pub mod seed;

// Re-export main types
pub use benchmark::Benchmark;
pub use error::{Error, Result};
pub use jump::JUMP;
pub use lehmer::{Generator, MODULUS, MULTIPLIER};
pub use perf_counter::PerfCounter;
