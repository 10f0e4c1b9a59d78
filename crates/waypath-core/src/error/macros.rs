//! Early-return helpers for validation code

/// Return `InvalidValue` naming the offending setting and its value.
///
/// Used where grid dimensions, config fields or matrix sizes are checked:
///
/// ```rust,ignore
/// if rows == 0 {
///     bail_invalid!("labyrinth.rows", rows);
/// }
/// ```
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::WaypathError::invalid_value($context, $value))
    };
}

/// Return `UsageError` for a flag combination that can never run, such as a
/// labyrinth start value that only walls hold
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::WaypathError::UsageError($msg.to_string()))
    };
}
