//! Core engine of the `probe` driver: process attach, pinned cross-process
//! memory access, loaded-module introspection, and the system thread
//! snapshot. Everything here runs at supervisor level; every dereference of
//! target-process memory is wrapped in a fault containment boundary so a
//! dying or hostile target degrades into an error, never a bugcheck.

#![no_std]

mod memory;
pub use memory::*;

mod module;
pub use module::*;

mod process;
pub use process::*;

mod thread;
pub use thread::*;

pub mod error;

pub mod data;
pub use data::*;

pub mod utils;
pub use utils::*;

pub type Result<T> = core::result::Result<T, error::ProbeError>;
