// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 The hdfspp contributors

//! Logging macros for convenient usage

/// Log a formatted statement through an explicit context
///
/// The format arguments are only evaluated when the statement passes the
/// context's gate.
#[macro_export]
macro_rules! log_message {
    ($context:expr, $severity:expr, $component:expr, $($arg:tt)+) => {{
        let message = $crate::Message::new($context, $severity, $component);
        if message.is_worth_reporting() {
            message.append(format_args!($($arg)+));
        }
    }};
}

/// Trace level logging through the global context
#[macro_export]
macro_rules! log_trace {
    ($component:expr, $($arg:tt)+) => {
        $crate::log_message!($crate::LogContext::global(), $crate::Severity::Trace, $component, $($arg)+)
    };
}

/// Debug level logging through the global context
#[macro_export]
macro_rules! log_debug {
    ($component:expr, $($arg:tt)+) => {
        $crate::log_message!($crate::LogContext::global(), $crate::Severity::Debug, $component, $($arg)+)
    };
}

/// Info level logging through the global context
#[macro_export]
macro_rules! log_info {
    ($component:expr, $($arg:tt)+) => {
        $crate::log_message!($crate::LogContext::global(), $crate::Severity::Info, $component, $($arg)+)
    };
}

/// Warning level logging through the global context
#[macro_export]
macro_rules! log_warn {
    ($component:expr, $($arg:tt)+) => {
        $crate::log_message!($crate::LogContext::global(), $crate::Severity::Warning, $component, $($arg)+)
    };
}

/// Error level logging through the global context
#[macro_export]
macro_rules! log_error {
    ($component:expr, $($arg:tt)+) => {
        $crate::log_message!($crate::LogContext::global(), $crate::Severity::Error, $component, $($arg)+)
    };
}
