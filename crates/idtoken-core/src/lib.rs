#![allow(clippy::pedantic)]
#![allow(clippy::nursery)]
#![deny(clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc)]

pub mod api;
pub mod constants;
pub mod errors;
pub mod format;
pub mod hints;
pub mod record;

pub use crate::api::*;
pub use crate::constants::*;
pub use crate::errors::*;
pub use crate::format::*;
pub use crate::hints::*;
pub use crate::record::*;
