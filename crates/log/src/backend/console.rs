// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 The hdfspp contributors

//! Console backend writing one line per message

use std::{
	fmt::Write as _,
	io::{self, Write},
	thread,
};

use chrono::Local;
use colored::{ColoredString, Colorize};

use super::LogBackend;
use crate::{Message, Severity};

/// asctime(3) layout without its trailing newline
const TIMESTAMP_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Renders level, component, timestamp and thread id in front of the message
/// body and writes the line to stderr (or a supplied writer).
///
/// Each header part can be switched off independently; all are on by default.
pub struct ConsoleBackend {
	show_level: bool,
	show_component: bool,
	show_timestamp: bool,
	show_thread: bool,
	use_color: bool,
	writer: Box<dyn Write + Send>,
}

impl ConsoleBackend {
	pub fn new() -> Self {
		Self {
			show_level: true,
			show_component: true,
			show_timestamp: true,
			show_thread: true,
			use_color: false,
			writer: Box::new(io::stderr()),
		}
	}

	pub fn with_level(mut self, show: bool) -> Self {
		self.show_level = show;
		self
	}

	pub fn with_component(mut self, show: bool) -> Self {
		self.show_component = show;
		self
	}

	pub fn with_timestamp(mut self, show: bool) -> Self {
		self.show_timestamp = show;
		self
	}

	pub fn with_thread(mut self, show: bool) -> Self {
		self.show_thread = show;
		self
	}

	/// Color the severity label
	pub fn with_color(mut self, use_color: bool) -> Self {
		self.use_color = use_color;
		self
	}

	/// Write to `writer` instead of stderr
	pub fn with_writer<W: Write + Send + 'static>(mut self, writer: W) -> Self {
		self.writer = Box::new(writer);
		self
	}

	pub fn set_show_level(&mut self, show: bool) {
		self.show_level = show;
	}

	pub fn set_show_component(&mut self, show: bool) {
		self.show_component = show;
	}

	pub fn set_show_timestamp(&mut self, show: bool) {
		self.show_timestamp = show;
	}

	pub fn set_show_thread(&mut self, show: bool) {
		self.show_thread = show;
	}

	pub(crate) fn render(&self, message: &Message<'_>) -> String {
		let mut line = String::new();

		if self.show_level {
			if self.use_color {
				let _ = write!(line, "{}", colorize(message.severity()));
			} else {
				line.push_str(message.severity().label());
			}
		}

		if self.show_component {
			line.push_str(message.component().label());
		}

		if self.show_timestamp {
			let _ = write!(line, "[{}]", Local::now().format(TIMESTAMP_FORMAT));
		}

		if self.show_thread {
			let _ = write!(line, "[Thread id = {:?}]", thread::current().id());
		}

		line.push_str("    ");
		line.push_str(message.text());
		line
	}
}

fn colorize(severity: Severity) -> ColoredString {
	let label = severity.label();
	match severity {
		Severity::Trace => label.dimmed(),
		Severity::Debug => label.blue(),
		Severity::Info => label.green(),
		Severity::Warning => label.yellow(),
		Severity::Error => label.red().bold(),
	}
}

impl Default for ConsoleBackend {
	fn default() -> Self {
		Self::new()
	}
}

impl LogBackend for ConsoleBackend {
	fn name(&self) -> &'static str {
		"console"
	}

	fn write(&mut self, message: &Message<'_>) {
		if !message.is_worth_reporting() {
			return;
		}

		let line = self.render(message);
		let _ = writeln!(self.writer, "{}", line);
	}

	fn flush(&mut self) {
		let _ = self.writer.flush();
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;

	use parking_lot::Mutex;

	use super::*;
	use crate::{Component, LogContext};

	#[derive(Clone, Default)]
	struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

	impl SharedBuffer {
		fn contents(&self) -> String {
			String::from_utf8(self.0.lock().clone()).unwrap()
		}
	}

	impl Write for SharedBuffer {
		fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
			self.0.lock().extend_from_slice(buf);
			Ok(buf.len())
		}

		fn flush(&mut self) -> io::Result<()> {
			Ok(())
		}
	}

	fn console(buffer: &SharedBuffer) -> ConsoleBackend {
		ConsoleBackend::new().with_timestamp(false).with_thread(false).with_writer(buffer.clone())
	}

	#[test]
	fn test_renders_level_and_component() {
		let buffer = SharedBuffer::default();
		let context = LogContext::new(Box::new(console(&buffer)));

		context.message(Severity::Error, Component::Rpc).append("connection reset");

		assert_eq!(buffer.contents(), "[ERROR ][RPC         ]    connection reset\n");
	}

	#[test]
	fn test_parts_can_be_hidden() {
		let buffer = SharedBuffer::default();
		let context = LogContext::new(Box::new(console(&buffer).with_level(false).with_component(false)));

		context.message(Severity::Info, Component::FileSystem).append("connected");

		assert_eq!(buffer.contents(), "    connected\n");
	}

	#[test]
	fn test_timestamp_and_thread_order() {
		let buffer = SharedBuffer::default();
		let backend = ConsoleBackend::new().with_writer(buffer.clone());
		let context = LogContext::new(Box::new(backend));

		context.message(Severity::Warning, Component::BlockReader).append("slow datanode");

		let line = buffer.contents();
		assert!(line.starts_with("[WARN  ][BlockReader ]["));
		let thread_at = line.find("[Thread id = ").unwrap();
		let timestamp = &line["[WARN  ][BlockReader ]".len()..thread_at];
		assert!(timestamp.starts_with('[') && timestamp.ends_with(']'));
		assert!(!timestamp.contains('\n'));
		assert!(line.ends_with("]    slow datanode\n"));
	}

	#[test]
	fn test_thread_toggle_is_independent_of_component() {
		let buffer = SharedBuffer::default();
		let backend = ConsoleBackend::new().with_timestamp(false).with_component(false).with_writer(buffer.clone());
		let context = LogContext::new(Box::new(backend));

		context.message(Severity::Debug, Component::Rpc).append("x");

		assert!(buffer.contents().starts_with("[DEBUG ][Thread id = "));
	}

	#[test]
	fn test_color_keeps_label_text() {
		colored::control::set_override(true);
		let buffer = SharedBuffer::default();
		let context = LogContext::new(Box::new(console(&buffer).with_color(true)));

		context.message(Severity::Error, Component::Unknown).append("boom");

		let contents = buffer.contents();
		assert!(contents.contains("[ERROR ]"));
		assert!(contents.contains("\u{1b}["));
		assert!(contents.ends_with("[Unknown     ]    boom\n"));
	}

	#[test]
	fn test_one_line_per_message() {
		let buffer = SharedBuffer::default();
		let context = LogContext::new(Box::new(console(&buffer)));

		for i in 0..3u32 {
			context.message(Severity::Info, Component::FileHandle).append(i);
		}

		assert_eq!(buffer.contents().lines().count(), 3);
	}
}
