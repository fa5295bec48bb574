// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 The hdfspp contributors

use crate::{Component, ComponentMask, Severity};

/// Gating state attached to an installed backend
///
/// A message passes when its severity is at least the threshold and its
/// component bit is set in the mask. The check is a plain comparison on a
/// `Copy` value so the per-statement cost never includes a dynamic call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gate {
	mask: ComponentMask,
	threshold: Severity,
}

impl Gate {
	/// All components enabled, everything from trace upwards passes
	pub const fn new() -> Self {
		Self {
			mask: ComponentMask::ALL,
			threshold: Severity::Trace,
		}
	}

	pub const fn with_threshold(mut self, threshold: Severity) -> Self {
		self.threshold = threshold;
		self
	}

	pub const fn with_mask(mut self, mask: ComponentMask) -> Self {
		self.mask = mask;
		self
	}

	#[inline]
	pub fn allows(&self, severity: Severity, component: Component) -> bool {
		severity >= self.threshold && self.mask.contains(component)
	}

	pub fn enable(&mut self, component: Component) {
		self.mask = self.mask.with(component);
	}

	pub fn disable(&mut self, component: Component) {
		self.mask = self.mask.without(component);
	}

	pub fn set_threshold(&mut self, threshold: Severity) {
		self.threshold = threshold;
	}

	pub fn set_mask(&mut self, mask: ComponentMask) {
		self.mask = mask;
	}

	pub const fn threshold(&self) -> Severity {
		self.threshold
	}

	pub const fn mask(&self) -> ComponentMask {
		self.mask
	}
}

impl Default for Gate {
	fn default() -> Self {
		Self::new()
	}
}
