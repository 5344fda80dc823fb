pub mod progress;
pub mod scorer;
pub mod summary;
