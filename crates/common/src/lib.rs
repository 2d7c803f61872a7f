//! Wire contract between the `probe` driver and its controller.
//!
//! Everything in here is `#[repr(C)]` and fixed-size: requests travel through
//! the IRP system buffer and are overwritten in place, so both sides must
//! agree on the exact layout. The crate also carries the pure algorithms the
//! driver relies on (wide-string comparison, variable-length record
//! iteration, table accounting) so they can be tested off-target.

#![no_std]

pub mod ioctls;
pub mod records;
pub mod structs;
pub mod tables;
pub mod vars;
pub mod wide;
