// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 The hdfspp contributors

use thiserror::Error;

/// Errors raised by the configuration surface
///
/// Nothing on the logging path itself returns an error; these only come out
/// of parsing and validation done while setting logging up.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
	#[error("unknown severity '{0}'")]
	UnknownSeverity(String),

	#[error("severity code {0} is out of range")]
	SeverityCode(i32),

	#[error("unknown component '{0}'")]
	UnknownComponent(String),

	#[error("component code {0:#x} does not name a single component")]
	ComponentCode(i32),

	#[error("environment variable {name}: {reason}")]
	Environment {
		name: &'static str,
		reason: String,
	},
}

pub type Result<T> = std::result::Result<T, Error>;
