//! Session snapshots: the serde mirror of the canvas UI's JSON state and
//! its conversion into the typed graph model.

pub mod conversion;
pub mod types;

pub use conversion::*;
pub use types::*;
