//! Win32 plumbing for locating, loading and inspecting modules.
#![cfg(windows)]

pub mod dialog;
pub mod module;

mod string;
