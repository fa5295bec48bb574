// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 The hdfspp contributors

use std::{fmt, str::FromStr};

use hdfspp_abi::{
	HDFSPP_LOG_LEVEL_DEBUG, HDFSPP_LOG_LEVEL_ERROR, HDFSPP_LOG_LEVEL_INFO, HDFSPP_LOG_LEVEL_TRACE,
	HDFSPP_LOG_LEVEL_WARN,
};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Log severity levels
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(i32)]
pub enum Severity {
	#[default]
	Trace = HDFSPP_LOG_LEVEL_TRACE,
	Debug = HDFSPP_LOG_LEVEL_DEBUG,
	Info = HDFSPP_LOG_LEVEL_INFO,
	#[serde(alias = "warn")]
	Warning = HDFSPP_LOG_LEVEL_WARN,
	Error = HDFSPP_LOG_LEVEL_ERROR,
}

impl Severity {
	/// All severities, lowest first
	pub const ALL: [Severity; 5] =
		[Severity::Trace, Severity::Debug, Severity::Info, Severity::Warning, Severity::Error];

	/// Stable integer code shared with the C interface
	pub const fn code(self) -> i32 {
		self as i32
	}

	pub const fn from_code(code: i32) -> Option<Self> {
		match code {
			HDFSPP_LOG_LEVEL_TRACE => Some(Severity::Trace),
			HDFSPP_LOG_LEVEL_DEBUG => Some(Severity::Debug),
			HDFSPP_LOG_LEVEL_INFO => Some(Severity::Info),
			HDFSPP_LOG_LEVEL_WARN => Some(Severity::Warning),
			HDFSPP_LOG_LEVEL_ERROR => Some(Severity::Error),
			_ => None,
		}
	}

	pub const fn as_str(self) -> &'static str {
		match self {
			Severity::Trace => "TRACE",
			Severity::Debug => "DEBUG",
			Severity::Info => "INFO",
			Severity::Warning => "WARN",
			Severity::Error => "ERROR",
		}
	}

	/// Fixed-width label used by the console backend
	pub const fn label(self) -> &'static str {
		match self {
			Severity::Trace => "[TRACE ]",
			Severity::Debug => "[DEBUG ]",
			Severity::Info => "[INFO  ]",
			Severity::Warning => "[WARN  ]",
			Severity::Error => "[ERROR ]",
		}
	}
}

impl fmt::Display for Severity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl TryFrom<i32> for Severity {
	type Error = Error;

	fn try_from(code: i32) -> Result<Self> {
		Severity::from_code(code).ok_or(Error::SeverityCode(code))
	}
}

impl FromStr for Severity {
	type Err = Error;

	/// Accepts a name in any case (`warn` and `warning` are equivalent) or a
	/// numeric code.
	fn from_str(s: &str) -> Result<Self> {
		let trimmed = s.trim();
		if let Ok(code) = trimmed.parse::<i32>() {
			return Severity::try_from(code);
		}

		match trimmed.to_ascii_lowercase().as_str() {
			"trace" => Ok(Severity::Trace),
			"debug" => Ok(Severity::Debug),
			"info" => Ok(Severity::Info),
			"warn" | "warning" => Ok(Severity::Warning),
			"error" => Ok(Severity::Error),
			_ => Err(Error::UnknownSeverity(s.to_string())),
		}
	}
}
