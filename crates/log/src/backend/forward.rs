// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 The hdfspp contributors

//! Backend forwarding messages to a C function pointer

use std::{
	ffi::CString,
	mem::size_of,
	ptr::{null, null_mut},
};

use hdfspp_abi::{LogCallbackFFI, LogDataFFI};

use super::LogBackend;
use crate::Message;

/// Converts each message into a [`LogDataFFI`] and invokes the registered
/// callback with it, synchronously on the logging thread.
///
/// The record and its text live on this backend's stack frame and are only
/// valid until the callback returns. Callers that need to keep one must use
/// [`ForwardingBackend::duplicate`] and later [`ForwardingBackend::release`].
pub struct ForwardingBackend {
	callback: Option<LogCallbackFFI>,
}

impl ForwardingBackend {
	/// Backend without a callback; every message is dropped until one is set
	pub fn new() -> Self {
		Self {
			callback: None,
		}
	}

	pub fn with_callback(callback: Option<LogCallbackFFI>) -> Self {
		Self {
			callback,
		}
	}

	/// Replace the callback; `None` (a null pointer from C) clears the hook
	pub fn set_callback(&mut self, callback: Option<LogCallbackFFI>) {
		self.callback = callback;
	}

	pub fn callback(&self) -> Option<LogCallbackFFI> {
		self.callback
	}

	/// Create an independently owned copy of `original`
	///
	/// Returns null when `original` is null or when any allocation fails.
	/// The copy must be disposed of with [`ForwardingBackend::release`].
	///
	/// # Safety
	/// `original` must be null or point to a valid [`LogDataFFI`] whose `msg`
	/// is null or a NUL-terminated string.
	pub unsafe fn duplicate(original: *const LogDataFFI) -> *mut LogDataFFI {
		if original.is_null() {
			return null_mut();
		}

		// SAFETY: checked non-null, caller guarantees it points to a valid record
		let original = unsafe { &*original };

		// SAFETY: plain allocation, checked for null below
		let copy = unsafe { libc::malloc(size_of::<LogDataFFI>()) }.cast::<LogDataFFI>();
		if copy.is_null() {
			return null_mut();
		}

		let msg = if original.msg.is_null() {
			null()
		} else {
			// SAFETY: caller guarantees msg is NUL-terminated
			let msg = unsafe { libc::strdup(original.msg) };
			if msg.is_null() {
				// SAFETY: copy came from malloc above and was never handed out
				unsafe { libc::free(copy.cast()) };
				return null_mut();
			}
			msg.cast_const()
		};

		// SAFETY: copy is a fresh allocation large enough for one record
		unsafe {
			copy.write(LogDataFFI {
				msg,
				level: original.level,
				component: original.component,
			});
		}
		copy
	}

	/// Free a record created by [`ForwardingBackend::duplicate`]
	///
	/// A null pointer is ignored. The record's memory is zeroed before it is
	/// freed so a stale pointer reads back a null message rather than the old
	/// text.
	///
	/// # Safety
	/// `data` must be null or a pointer returned by `duplicate` that has not
	/// been released yet.
	pub unsafe fn release(data: *mut LogDataFFI) {
		if data.is_null() {
			return;
		}

		// SAFETY: caller guarantees data came from duplicate and is still live
		unsafe {
			let msg = (*data).msg;
			if !msg.is_null() {
				libc::free(msg.cast_mut().cast());
			}
			data.write_bytes(0, 1);
			libc::free(data.cast());
		}
	}
}

/// NUL-terminated copy of `text`, cut at the first interior NUL the way a C
/// reader would see it
fn c_text(text: &str) -> CString {
	let visible = text.split('\0').next().unwrap_or_default();
	CString::new(visible).unwrap_or_default()
}

impl Default for ForwardingBackend {
	fn default() -> Self {
		Self::new()
	}
}

impl LogBackend for ForwardingBackend {
	fn name(&self) -> &'static str {
		"forwarding"
	}

	fn write(&mut self, message: &Message<'_>) {
		if !message.is_worth_reporting() {
			return;
		}
		let Some(callback) = self.callback else {
			return;
		};

		let text = c_text(message.text());
		let mut data = LogDataFFI {
			msg: text.as_ptr(),
			level: message.severity().code(),
			component: message.component().code(),
		};
		callback(&mut data);
	}
}

#[cfg(test)]
mod tests {
	use std::ffi::CStr;

	use hdfspp_abi::{HDFSPP_LOG_COMPONENT_FILEHANDLE, HDFSPP_LOG_LEVEL_INFO};
	use parking_lot::Mutex;

	use super::*;
	use crate::{Component, LogContext, Severity};

	static SEEN: Mutex<Vec<(i32, i32, String)>> = Mutex::new(Vec::new());

	extern "C" fn record(data: *mut LogDataFFI) {
		let data = unsafe { &*data };
		let text = unsafe { data.message() }.map(|m| m.to_string_lossy().into_owned()).unwrap_or_default();
		SEEN.lock().push((data.level, data.component, text));
	}

	#[test]
	fn test_forwards_and_clears_callback() {
		let context = LogContext::new(Box::new(ForwardingBackend::with_callback(Some(record))));

		context.message(Severity::Info, Component::FileHandle).append("forward-unit-").append(7u32);
		context.install(Box::new(ForwardingBackend::new()));
		context.message(Severity::Info, Component::FileHandle).append("forward-unit-dropped");

		let seen: Vec<_> = SEEN.lock().iter().filter(|(_, _, t)| t.starts_with("forward-unit-")).cloned().collect();
		assert_eq!(
			seen,
			vec![(HDFSPP_LOG_LEVEL_INFO, HDFSPP_LOG_COMPONENT_FILEHANDLE, "forward-unit-7".to_string())]
		);
	}

	#[test]
	fn test_set_callback_replaces_hook() {
		let mut backend = ForwardingBackend::new();
		assert!(backend.callback().is_none());
		backend.set_callback(Some(record));
		assert!(backend.callback().is_some());
		backend.set_callback(None);
		assert!(backend.callback().is_none());
	}

	#[test]
	fn test_interior_nul_truncates() {
		assert_eq!(c_text("visible\0hidden").as_bytes(), b"visible");
		assert_eq!(c_text("\0").as_bytes(), b"");
		assert_eq!(c_text("plain").as_bytes(), b"plain");
	}

	#[test]
	fn test_duplicate_copies_text() {
		let text = c"datanode 10.0.0.7 unreachable";
		let original = LogDataFFI {
			msg: text.as_ptr(),
			level: 4,
			component: 4,
		};

		let copy = unsafe { ForwardingBackend::duplicate(&original) };
		assert!(!copy.is_null());

		let copied = unsafe { &*copy };
		assert_eq!(copied.level, 4);
		assert_eq!(copied.component, 4);
		assert_ne!(copied.msg, original.msg);
		assert_eq!(unsafe { CStr::from_ptr(copied.msg) }, text);

		unsafe { ForwardingBackend::release(copy) };
	}

	#[test]
	fn test_duplicate_without_message() {
		let original = LogDataFFI {
			msg: null(),
			level: 1,
			component: 2,
		};

		let copy = unsafe { ForwardingBackend::duplicate(&original) };
		assert!(!copy.is_null());
		assert!(!unsafe { &*copy }.has_message());
		unsafe { ForwardingBackend::release(copy) };
	}

	#[test]
	fn test_null_is_safe() {
		assert!(unsafe { ForwardingBackend::duplicate(null()) }.is_null());
		unsafe { ForwardingBackend::release(null_mut()) };
	}
}
