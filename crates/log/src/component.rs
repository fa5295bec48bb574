// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 The hdfspp contributors

use std::{
	fmt,
	ops::{BitOr, BitOrAssign},
	str::FromStr,
};

use hdfspp_abi::{
	HDFSPP_LOG_COMPONENT_BLOCKREADER, HDFSPP_LOG_COMPONENT_FILEHANDLE, HDFSPP_LOG_COMPONENT_FILESYSTEM,
	HDFSPP_LOG_COMPONENT_RPC, HDFSPP_LOG_COMPONENT_UNKNOWN, is_valid_component,
};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Subsystem a log statement originates from
///
/// Each variant is a distinct power of two so a set of enabled components can
/// be tested with a single bitwise AND.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(i32)]
pub enum Component {
	#[default]
	Unknown = HDFSPP_LOG_COMPONENT_UNKNOWN,
	Rpc = HDFSPP_LOG_COMPONENT_RPC,
	#[serde(alias = "block_reader")]
	BlockReader = HDFSPP_LOG_COMPONENT_BLOCKREADER,
	#[serde(alias = "file_handle")]
	FileHandle = HDFSPP_LOG_COMPONENT_FILEHANDLE,
	#[serde(alias = "file_system")]
	FileSystem = HDFSPP_LOG_COMPONENT_FILESYSTEM,
}

impl Component {
	pub const ALL: [Component; 5] =
		[Component::Unknown, Component::Rpc, Component::BlockReader, Component::FileHandle, Component::FileSystem];

	/// Stable integer code shared with the C interface
	pub const fn code(self) -> i32 {
		self as i32
	}

	#[inline]
	pub const fn bit(self) -> u32 {
		self as u32
	}

	/// Resolve a code naming exactly one component
	pub const fn from_code(code: i32) -> Option<Self> {
		if !is_valid_component(code) {
			return None;
		}
		match code {
			HDFSPP_LOG_COMPONENT_UNKNOWN => Some(Component::Unknown),
			HDFSPP_LOG_COMPONENT_RPC => Some(Component::Rpc),
			HDFSPP_LOG_COMPONENT_BLOCKREADER => Some(Component::BlockReader),
			HDFSPP_LOG_COMPONENT_FILEHANDLE => Some(Component::FileHandle),
			HDFSPP_LOG_COMPONENT_FILESYSTEM => Some(Component::FileSystem),
			_ => None,
		}
	}

	/// Map any code to a component, falling back to [`Component::Unknown`]
	pub const fn from_code_or_unknown(code: i32) -> Self {
		match Component::from_code(code) {
			Some(component) => component,
			None => Component::Unknown,
		}
	}

	pub const fn as_str(self) -> &'static str {
		match self {
			Component::Unknown => "Unknown",
			Component::Rpc => "RPC",
			Component::BlockReader => "BlockReader",
			Component::FileHandle => "FileHandle",
			Component::FileSystem => "FileSystem",
		}
	}

	/// Fixed-width label used by the console backend
	pub const fn label(self) -> &'static str {
		match self {
			Component::Unknown => "[Unknown     ]",
			Component::Rpc => "[RPC         ]",
			Component::BlockReader => "[BlockReader ]",
			Component::FileHandle => "[FileHandle  ]",
			Component::FileSystem => "[FileSystem  ]",
		}
	}
}

impl fmt::Display for Component {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl TryFrom<i32> for Component {
	type Error = Error;

	fn try_from(code: i32) -> Result<Self> {
		Component::from_code(code).ok_or(Error::ComponentCode(code))
	}
}

impl FromStr for Component {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		let normalized: String = s.trim().chars().filter(|c| *c != '_' && *c != '-').collect();
		match normalized.to_ascii_lowercase().as_str() {
			"unknown" => Ok(Component::Unknown),
			"rpc" => Ok(Component::Rpc),
			"blockreader" => Ok(Component::BlockReader),
			"filehandle" => Ok(Component::FileHandle),
			"filesystem" => Ok(Component::FileSystem),
			_ => Err(Error::UnknownComponent(s.to_string())),
		}
	}
}

/// Set of enabled component bits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComponentMask(u32);

impl ComponentMask {
	/// Every bit set, including bits no component uses yet
	pub const ALL: ComponentMask = ComponentMask(u32::MAX);
	pub const NONE: ComponentMask = ComponentMask(0);

	pub const fn from_bits(bits: u32) -> Self {
		Self(bits)
	}

	pub const fn bits(self) -> u32 {
		self.0
	}

	#[inline]
	pub const fn contains(self, component: Component) -> bool {
		self.0 & component.bit() != 0
	}

	#[inline]
	pub const fn with(self, component: Component) -> Self {
		Self(self.0 | component.bit())
	}

	#[inline]
	pub const fn without(self, component: Component) -> Self {
		Self(self.0 & !component.bit())
	}

	/// Known components enabled in this mask
	pub fn components(self) -> impl Iterator<Item = Component> {
		Component::ALL.into_iter().filter(move |c| self.contains(*c))
	}
}

impl Default for ComponentMask {
	fn default() -> Self {
		ComponentMask::ALL
	}
}

impl From<Component> for ComponentMask {
	fn from(component: Component) -> Self {
		ComponentMask(component.bit())
	}
}

impl FromIterator<Component> for ComponentMask {
	fn from_iter<I: IntoIterator<Item = Component>>(iter: I) -> Self {
		iter.into_iter().fold(ComponentMask::NONE, ComponentMask::with)
	}
}

impl BitOr<Component> for ComponentMask {
	type Output = ComponentMask;

	fn bitor(self, rhs: Component) -> ComponentMask {
		self.with(rhs)
	}
}

impl BitOrAssign<Component> for ComponentMask {
	fn bitor_assign(&mut self, rhs: Component) {
		*self = self.with(rhs);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_bits_are_disjoint_powers_of_two() {
		let mut seen = 0u32;
		for component in Component::ALL {
			assert!(component.bit().is_power_of_two());
			assert_eq!(seen & component.bit(), 0);
			seen |= component.bit();
		}
		assert_eq!(seen, 0x1f);
	}

	#[test]
	fn test_codes_round_trip() {
		for component in Component::ALL {
			assert_eq!(Component::from_code(component.code()), Some(component));
		}
		assert_eq!(Component::from_code(0), None);
		assert_eq!(Component::from_code(HDFSPP_LOG_COMPONENT_RPC | HDFSPP_LOG_COMPONENT_FILESYSTEM), None);
		assert_eq!(Component::from_code(1 << 7), None);
		assert_eq!(Component::from_code_or_unknown(1 << 7), Component::Unknown);
		assert_eq!(Component::try_from(3), Err(Error::ComponentCode(3)));
	}

	#[test]
	fn test_labels() {
		for component in Component::ALL {
			assert_eq!(component.label().len(), 14);
		}
		assert_eq!(Component::default().label(), "[Unknown     ]");
		assert_eq!(Component::Rpc.to_string(), "RPC");
	}

	#[test]
	fn test_parse() {
		assert_eq!("RPC".parse::<Component>(), Ok(Component::Rpc));
		assert_eq!("block_reader".parse::<Component>(), Ok(Component::BlockReader));
		assert_eq!("FileHandle".parse::<Component>(), Ok(Component::FileHandle));
		assert_eq!("file-system".parse::<Component>(), Ok(Component::FileSystem));
		assert!(matches!("namenode".parse::<Component>(), Err(Error::UnknownComponent(_))));
	}

	#[test]
	fn test_mask() {
		let mask = ComponentMask::NONE | Component::Rpc | Component::FileSystem;
		assert!(mask.contains(Component::Rpc));
		assert!(!mask.contains(Component::Unknown));
		assert_eq!(mask.components().collect::<Vec<_>>(), vec![Component::Rpc, Component::FileSystem]);

		let all = ComponentMask::default();
		assert!(Component::ALL.iter().all(|c| all.contains(*c)));
		assert!(!all.without(Component::BlockReader).contains(Component::BlockReader));
		assert_eq!(all.without(Component::BlockReader).with(Component::BlockReader), all);

		let collected: ComponentMask = [Component::Unknown, Component::FileHandle].into_iter().collect();
		assert_eq!(collected.bits(), 0x09);
	}
}
