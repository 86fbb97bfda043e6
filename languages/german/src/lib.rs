pub mod duden;
pub mod dwds;
pub mod normalizer;

pub use duden::Duden;
pub use dwds::Dwds;
pub use normalizer::{Dialect, normalize};

#[cfg(test)]
mod tests;
