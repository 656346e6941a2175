//! Helpers shared by the binaries. Nothing in the engines prints.

pub mod render;
