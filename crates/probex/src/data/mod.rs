#![allow(non_camel_case_types, non_snake_case)]

pub mod externs;
pub use externs::*;

pub mod structs;
pub use structs::*;
