//! Data module - grade file loading

mod loader;

pub use loader::{DataLoader, GradeRecord};
