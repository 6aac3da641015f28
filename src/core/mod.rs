pub mod classifier;

pub use crate::domain::model::{Age, Classification};
