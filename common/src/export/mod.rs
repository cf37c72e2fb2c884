//! Export core modules shared by the CLI exporters.

#[cfg(feature = "excel")]
pub mod excel_core;
