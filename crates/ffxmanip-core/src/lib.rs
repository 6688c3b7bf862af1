pub mod error;

pub mod catalogue;
pub mod recover;
pub mod seed;
pub mod window;

pub use crate::catalogue::Catalogue;
pub use crate::error::{ManipError, Result};
pub use crate::seed::hash::seed_from_key;
pub use crate::seed::key::encode_key;
