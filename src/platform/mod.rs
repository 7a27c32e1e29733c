//! Platform integration for delivering toast documents

#[cfg(windows)]
pub mod win32;
