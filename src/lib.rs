pub mod asset;
pub mod restore;
pub mod scene;
pub mod settings;

mod error;

pub use crate::error::Error;
pub use crate::restore::{RestoreOutcome, RestoreReport, Restorer};
