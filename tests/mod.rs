pub mod convert;
pub mod laws;
