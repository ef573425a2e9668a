//! CLI command implementations

pub mod export;
pub mod lambda;
pub mod validate;

use crate::domain::ExporterError;

/// Process exit code for a failed run
///
/// 2 for configuration and input problems, 5 for everything else.
pub fn exit_code(error: &ExporterError) -> i32 {
    match error {
        ExporterError::Configuration(_) | ExporterError::Validation(_) => 2,
        _ => 5,
    }
}
