// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 The hdfspp contributors

//! Per-statement message builder

use std::{
	ffi::{CStr, c_char},
	fmt::{self, Write as _},
};

use crate::{Component, LogContext, Severity};

/// Value that can be appended to a [`Message`]
pub trait Loggable {
	fn append_to(&self, body: &mut String);
}

/// Accumulates the text of one log statement
///
/// Whether the statement is worth reporting is decided once, when the message
/// is created, and never re-checked afterwards. When it is not, every append
/// is a no-op so disabled statements never pay for formatting. Dropping a
/// message that is worth reporting hands it to its context.
///
/// ```ignore
/// use hdfspp_log::{Component, LogContext, Message, Severity};
///
/// Message::new(LogContext::global(), Severity::Info, Component::FileHandle)
/// 	.origin(self)
/// 	.append("read ")
/// 	.append(bytes_read)
/// 	.append(" bytes");
/// ```
pub struct Message<'a> {
	context: &'a LogContext,
	severity: Severity,
	component: Component,
	worth_reporting: bool,
	body: String,
}

impl<'a> Message<'a> {
	pub fn new(context: &'a LogContext, severity: Severity, component: Component) -> Self {
		let worth_reporting = context.should_log(severity, component);
		Self {
			context,
			severity,
			component,
			worth_reporting,
			body: String::new(),
		}
	}

	/// Message bound to the process-wide default context
	pub fn global(severity: Severity, component: Component) -> Message<'static> {
		Message::new(LogContext::global(), severity, component)
	}

	pub fn append<T: Loggable>(mut self, value: T) -> Self {
		self.push(value);
		self
	}

	pub fn push<T: Loggable>(&mut self, value: T) -> &mut Self {
		if self.worth_reporting {
			value.append_to(&mut self.body);
		}
		self
	}

	/// Append a C string; a null pointer is ignored
	///
	/// # Safety
	/// `text` must be null or point to a NUL-terminated string valid for the
	/// duration of the call.
	pub unsafe fn append_c_str(mut self, text: *const c_char) -> Self {
		if self.worth_reporting && !text.is_null() {
			// SAFETY: caller guarantees text is a live NUL-terminated string
			let text = unsafe { CStr::from_ptr(text) };
			text.append_to(&mut self.body);
		}
		self
	}

	/// Tag the message with the address of the object emitting it
	pub fn origin<T: ?Sized>(self, this: *const T) -> Self {
		self.append("[this=").append(this).append("] ")
	}

	pub fn severity(&self) -> Severity {
		self.severity
	}

	pub fn component(&self) -> Component {
		self.component
	}

	pub fn is_worth_reporting(&self) -> bool {
		self.worth_reporting
	}

	/// Accumulated text, empty when the message is not worth reporting
	pub fn text(&self) -> &str {
		&self.body
	}
}

impl fmt::Write for Message<'_> {
	fn write_str(&mut self, s: &str) -> fmt::Result {
		self.push(s);
		Ok(())
	}
}

impl fmt::Debug for Message<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Message")
			.field("severity", &self.severity)
			.field("component", &self.component)
			.field("worth_reporting", &self.worth_reporting)
			.field("body", &self.body)
			.finish()
	}
}

impl Drop for Message<'_> {
	fn drop(&mut self) {
		if self.worth_reporting {
			self.context.write(self);
		}
	}
}

impl Loggable for str {
	fn append_to(&self, body: &mut String) {
		body.push_str(self);
	}
}

impl Loggable for String {
	fn append_to(&self, body: &mut String) {
		body.push_str(self);
	}
}

impl Loggable for CStr {
	fn append_to(&self, body: &mut String) {
		body.push_str(&self.to_string_lossy());
	}
}

impl Loggable for bool {
	fn append_to(&self, body: &mut String) {
		body.push_str(if *self {
			"true"
		} else {
			"false"
		});
	}
}

impl Loggable for char {
	fn append_to(&self, body: &mut String) {
		body.push(*self);
	}
}

impl Loggable for fmt::Arguments<'_> {
	fn append_to(&self, body: &mut String) {
		let _ = body.write_fmt(*self);
	}
}

macro_rules! impl_loggable_integer {
	($($t:ty),*) => {
		$(
			impl Loggable for $t {
				fn append_to(&self, body: &mut String) {
					let _ = write!(body, "{}", self);
				}
			}
		)*
	};
}

impl_loggable_integer!(i8, i16, i32, i64, u8, u16, u32, u64, isize, usize);

impl<T: ?Sized> Loggable for *const T {
	fn append_to(&self, body: &mut String) {
		let _ = write!(body, "{:#018x}", self.cast::<()>() as usize);
	}
}

impl<T: ?Sized> Loggable for *mut T {
	fn append_to(&self, body: &mut String) {
		self.cast_const().append_to(body);
	}
}

impl<T: Loggable + ?Sized> Loggable for &T {
	fn append_to(&self, body: &mut String) {
		(**self).append_to(body);
	}
}

impl<T: Loggable> Loggable for Option<T> {
	fn append_to(&self, body: &mut String) {
		if let Some(value) = self {
			value.append_to(body);
		}
	}
}
