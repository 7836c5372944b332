#![deny(unsafe_code)]
//! PNG export boundary for spritegen.
//!
//! [`pixel`] converts a canvas to raw RGBA bytes; [`snapshot`] encodes
//! and writes PNG files, including the collision-avoiding naming scheme
//! (`name.png`, `name_1.png`, `name_2.png`, ...).

pub mod pixel;
pub mod snapshot;
