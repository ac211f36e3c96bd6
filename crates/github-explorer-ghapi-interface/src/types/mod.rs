mod common;
mod contents;
mod repositories;

pub use common::*;
pub use contents::*;
pub use repositories::*;
