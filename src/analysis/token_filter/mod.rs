//! Token filters that rewrite or drop tokens after tokenization.

pub mod lowercase;
pub mod unique;

pub use lowercase::LowercaseFilter;
pub use unique::UniqueFilter;
