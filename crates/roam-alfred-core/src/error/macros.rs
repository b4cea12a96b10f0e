//! Error macros for roam-alfred

/// Return early with a usage error
#[macro_export]
macro_rules! bail_usage {
    ($($arg:tt)*) => {
        return Err($crate::error::RoamError::UsageError(format!($($arg)*)))
    };
}

/// Map a database error into a failed query
#[macro_export]
macro_rules! map_db_err {
    ($op:expr, $error:expr) => {
        $crate::error::RoamError::query_failed($op, $error)
    };
}
