// SPDX-License-Identifier: Apache-2.0 OR MIT
// Logging macros for convenient logging

/// Log a plain record (no call-site context) at an explicit level.
///
/// # Examples
/// ```ignore
/// log_plain!(LogLevel::INFO, "workers online: {}", count);
/// ```
#[macro_export]
macro_rules! log_plain {
    ($level:expr, $($arg:tt)*) => {
        $crate::logging::log($level, format_args!($($arg)*))
    };
}

/// Log a contextual record at an explicit level, capturing the call
/// site's file and line.
///
/// # Examples
/// ```ignore
/// log_msg!(LogLevel::DEBUG2, "frame {} took {}ms", frame, elapsed);
/// ```
#[macro_export]
macro_rules! log_msg {
    ($level:expr, $($arg:tt)*) => {
        $crate::logging::log_at($level, line!(), file!(), format_args!($($arg)*))
    };
}

/// Log a message with critical severity
///
/// # Examples
/// ```ignore
/// log_critical!("device lost: {}", reason);
/// ```
#[macro_export]
macro_rules! log_critical {
    ($($arg:tt)*) => {
        $crate::log_msg!($crate::logging::LogLevel::CRITICAL, $($arg)*)
    };
}

/// Log a message with error severity
///
/// # Examples
/// ```ignore
/// log_error!("failed to open '{}'", path);
/// ```
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::log_msg!($crate::logging::LogLevel::ERROR, $($arg)*)
    };
}

/// Log a message with warning severity
///
/// # Examples
/// ```ignore
/// log_warning!("buffer near capacity");
/// ```
#[macro_export]
macro_rules! log_warning {
    ($($arg:tt)*) => {
        $crate::log_msg!($crate::logging::LogLevel::WARNING, $($arg)*)
    };
}

/// Log a message with info severity
///
/// # Examples
/// ```ignore
/// log_info!("level '{}' loaded", name);
/// ```
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::log_msg!($crate::logging::LogLevel::INFO, $($arg)*)
    };
}

/// Alias of [`log_info!`] kept for call sites that phrase diagnostics
/// as messages rather than severities.
#[macro_export]
macro_rules! log_message {
    ($($arg:tt)*) => {
        $crate::log_msg!($crate::logging::LogLevel::INFO, $($arg)*)
    };
}

/// Log a message with debug1 severity
#[macro_export]
macro_rules! log_debug1 {
    ($($arg:tt)*) => {
        $crate::log_msg!($crate::logging::LogLevel::DEBUG1, $($arg)*)
    };
}

/// Log a message with debug2 severity
#[macro_export]
macro_rules! log_debug2 {
    ($($arg:tt)*) => {
        $crate::log_msg!($crate::logging::LogLevel::DEBUG2, $($arg)*)
    };
}

/// Log a message with debug3 severity
#[macro_export]
macro_rules! log_debug3 {
    ($($arg:tt)*) => {
        $crate::log_msg!($crate::logging::LogLevel::DEBUG3, $($arg)*)
    };
}

/// Log a message with debug4 severity
#[macro_export]
macro_rules! log_debug4 {
    ($($arg:tt)*) => {
        $crate::log_msg!($crate::logging::LogLevel::DEBUG4, $($arg)*)
    };
}

/// Log at the nth debug level (n past INFO on the ordinal scale).
///
/// # Examples
/// ```ignore
/// log_debug_n!(3, "octree split at depth {}", depth);
/// ```
#[macro_export]
macro_rules! log_debug_n {
    ($n:expr, $($arg:tt)*) => {
        $crate::log_msg!(
            $crate::logging::LogLevel::from_raw(
                $crate::logging::LogLevel::INFO.as_u8() as i32 + $n
            ),
            $($arg)*
        )
    };
}

#[cfg(test)]
mod tests {
    use crate::logging::LogLevel;

    #[test]
    fn test_macros_expand() {
        // Compile-and-run smoke test; the lifecycle tests assert output.
        log_plain!(LogLevel::INFO, "plain {}", 1);
        log_msg!(LogLevel::DEBUG3, "contextual {}", 2);
        log_critical!("critical");
        log_error!("error {}", 3);
        log_warning!("warning");
        log_info!("info");
        log_message!("message");
        log_debug1!("d1");
        log_debug2!("d2");
        log_debug3!("d3");
        log_debug4!("d4");
        log_debug_n!(2, "dn {}", 4);
    }
}
