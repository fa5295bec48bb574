// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 The hdfspp contributors

use core::{
	ffi::{CStr, c_char, c_int},
	ptr::null,
};

/// FFI-safe snapshot of a single log message
///
/// Field order matches the `LogData` struct of the native client's public C
/// header. The callee can figure out thread id and time itself if it needs
/// them.
///
/// When handed to a [`LogCallbackFFI`], the struct and the text behind `msg`
/// are borrowed: both are only valid until the callback returns. A callee
/// that wants to keep the message must copy it with the host's duplicate
/// function and later dispose of the copy with the matching release function.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct LogDataFFI {
	/// NUL-terminated UTF-8 message text, may be null
	pub msg: *const c_char,
	/// Severity code (`HDFSPP_LOG_LEVEL_*`)
	pub level: c_int,
	/// Component code (`HDFSPP_LOG_COMPONENT_*`)
	pub component: c_int,
}

impl LogDataFFI {
	/// Create an empty record with a null message
	pub const fn empty() -> Self {
		Self {
			msg: null(),
			level: 0,
			component: 0,
		}
	}

	/// Check whether the record carries message text
	pub fn has_message(&self) -> bool {
		!self.msg.is_null()
	}

	/// Borrow the message text
	///
	/// # Safety
	/// `msg` must be null or point to a NUL-terminated string that stays valid
	/// for the returned lifetime.
	pub unsafe fn message(&self) -> Option<&CStr> {
		if self.msg.is_null() {
			None
		} else {
			// SAFETY: caller guarantees msg points to a live NUL-terminated string
			unsafe { Some(CStr::from_ptr(self.msg)) }
		}
	}
}

impl Default for LogDataFFI {
	fn default() -> Self {
		Self::empty()
	}
}

/// Log hook invoked synchronously for every forwarded message
///
/// # Parameters
/// - `data`: Borrowed record, valid only for the duration of the call
///
/// The hook must be reentrant: the library does not guarantee that there
/// won't be concurrent calls from different threads.
pub type LogCallbackFFI = extern "C" fn(data: *mut LogDataFFI);

#[cfg(test)]
mod tests {
	use core::mem::{align_of, size_of};

	use super::*;

	#[test]
	fn test_layout_matches_c_struct() {
		let pointer = size_of::<*const c_char>();
		let expected = (pointer + 2 * size_of::<c_int>()).next_multiple_of(align_of::<*const c_char>());
		assert_eq!(size_of::<LogDataFFI>(), expected);
		assert_eq!(core::mem::offset_of!(LogDataFFI, msg), 0);
		assert_eq!(core::mem::offset_of!(LogDataFFI, level), pointer);
		assert_eq!(core::mem::offset_of!(LogDataFFI, component), pointer + size_of::<c_int>());
	}

	#[test]
	fn test_empty_has_no_message() {
		let data = LogDataFFI::empty();
		assert!(!data.has_message());
		assert!(unsafe { data.message() }.is_none());
	}

	#[test]
	fn test_message_borrows_text() {
		let text = c"block read failed";
		let data = LogDataFFI {
			msg: text.as_ptr(),
			level: crate::HDFSPP_LOG_LEVEL_ERROR,
			component: crate::HDFSPP_LOG_COMPONENT_BLOCKREADER,
		};
		assert_eq!(unsafe { data.message() }, Some(text));
	}

	#[test]
	fn test_nullable_callback_is_pointer_sized() {
		assert_eq!(size_of::<Option<LogCallbackFFI>>(), size_of::<*const ()>());
	}
}
