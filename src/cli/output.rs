//! CLI output: error mapping from domain errors to the stable CLI surface.

use crate::error::PitchError;

/// Single line printed on stderr for a failed command.
pub fn map_error(e: &PitchError) -> String {
    format!("Error: {}", e)
}
