pub mod sample;
pub mod serve;

pub use sample::sample;
pub use serve::serve;
