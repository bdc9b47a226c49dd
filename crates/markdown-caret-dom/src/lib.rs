pub mod dom;
pub mod mention;
pub mod selection;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use dom::*;
pub use mention::*;
pub use selection::*;
