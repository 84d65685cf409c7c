//! Small helpers shared by the stores and patchers.

pub mod date;
pub mod hash;
pub mod url;
