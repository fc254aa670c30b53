#![doc = include_str!("../README.md")]
//!
//! # Features
//!
//! This crate supports no-std solution. Disable the "std" feature will
//! enable it.
//!
//! ```toml
//! default-features = false
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

pub extern crate nalgebra as na;

pub use crate::{error::*, geo::*, math::*};

mod convert;
mod error;
mod geo;
mod math;
