//! Error macros for tramnet

/// Macro for returning not-found errors
#[macro_export]
macro_rules! bail_not_found {
    ($context:expr, $value:expr) => {
        return Err($crate::error::TramError::not_found($context, $value))
    };
}

/// Macro for returning invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::TramError::invalid_value($context, $value))
    };
}
