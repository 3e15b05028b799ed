//! HTML navigation helpers.

mod utils;

pub use utils::*;
