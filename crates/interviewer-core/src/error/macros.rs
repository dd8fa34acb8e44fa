//! Error macros for interviewer

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::InterviewError::invalid_value($context, $value))
    };
}

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::InterviewError::UsageError($msg.to_string()))
    };
}

/// Macro for rejecting a hand-off payload at the boundary
#[macro_export]
macro_rules! bail_snapshot {
    ($($arg:tt)*) => {
        return Err($crate::error::InterviewError::invalid_snapshot(format!($($arg)*)))
    };
}
