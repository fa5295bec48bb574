// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 The hdfspp contributors

//! Stable severity and component codes
//!
//! These values are part of the public C interface and never change.

use core::ffi::c_int;

/// Severity: very detailed internal operations
pub const HDFSPP_LOG_LEVEL_TRACE: c_int = 0;

/// Severity: details useful for debugging
pub const HDFSPP_LOG_LEVEL_DEBUG: c_int = 1;

/// Severity: high-level lifecycle events
pub const HDFSPP_LOG_LEVEL_INFO: c_int = 2;

/// Severity: unexpected but handled situations
pub const HDFSPP_LOG_LEVEL_WARN: c_int = 3;

/// Severity: failures
pub const HDFSPP_LOG_LEVEL_ERROR: c_int = 4;

/// Component: origin not provided
pub const HDFSPP_LOG_COMPONENT_UNKNOWN: c_int = 1 << 0; // 0x01

/// Component: RPC engine and namenode connection
pub const HDFSPP_LOG_COMPONENT_RPC: c_int = 1 << 1; // 0x02

/// Component: datanode block reader
pub const HDFSPP_LOG_COMPONENT_BLOCKREADER: c_int = 1 << 2; // 0x04

/// Component: open file handles
pub const HDFSPP_LOG_COMPONENT_FILEHANDLE: c_int = 1 << 3; // 0x08

/// Component: filesystem object
pub const HDFSPP_LOG_COMPONENT_FILESYSTEM: c_int = 1 << 4; // 0x10

/// All known component bits
pub const HDFSPP_LOG_COMPONENT_ALL: c_int = HDFSPP_LOG_COMPONENT_UNKNOWN
	| HDFSPP_LOG_COMPONENT_RPC
	| HDFSPP_LOG_COMPONENT_BLOCKREADER
	| HDFSPP_LOG_COMPONENT_FILEHANDLE
	| HDFSPP_LOG_COMPONENT_FILESYSTEM;

/// Check whether `level` is one of the five severity codes
///
/// # Example
/// ```
/// use hdfspp_abi::*;
///
/// assert!(is_valid_level(HDFSPP_LOG_LEVEL_WARN));
/// assert!(!is_valid_level(5));
/// ```
#[inline]
pub const fn is_valid_level(level: c_int) -> bool {
	level >= HDFSPP_LOG_LEVEL_TRACE && level <= HDFSPP_LOG_LEVEL_ERROR
}

/// Check whether `component` names exactly one known component
///
/// # Example
/// ```
/// use hdfspp_abi::*;
///
/// assert!(is_valid_component(HDFSPP_LOG_COMPONENT_RPC));
/// assert!(!is_valid_component(HDFSPP_LOG_COMPONENT_RPC | HDFSPP_LOG_COMPONENT_FILESYSTEM));
/// assert!(!is_valid_component(0));
/// ```
#[inline]
pub const fn is_valid_component(component: c_int) -> bool {
	component > 0 && (component & (component - 1)) == 0 && (component & HDFSPP_LOG_COMPONENT_ALL) != 0
}
