pub mod convert;
pub mod download;
