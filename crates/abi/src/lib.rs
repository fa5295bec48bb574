// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 The hdfspp contributors

//! C ABI definitions for the hdfspp logging facility
//!
//! This crate provides the stable, flat data shapes that cross the boundary
//! between the client library and foreign code consuming its log messages.
//! It defines FFI-safe types, the callback signature and the integer codes
//! external code matches on.

pub mod constants;
pub mod log;

pub use constants::*;
pub use log::*;
