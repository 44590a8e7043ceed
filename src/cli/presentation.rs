//! CLI presentation: text formatting for command results.

use crate::apply::ApplyOutcome;
use std::path::Path;

/// Drop a leading `./` so paths under the default workspace read naturally.
pub fn display_path(path: &Path) -> String {
    path.strip_prefix(".")
        .unwrap_or(path)
        .display()
        .to_string()
}

pub fn format_apply_outcome(outcome: &ApplyOutcome) -> String {
    match outcome {
        ApplyOutcome::Created(path) | ApplyOutcome::Overwritten(path) => {
            format!("✓ Configuration file created at {}", display_path(path))
        }
        ApplyOutcome::Declined(_) => "Operation cancelled.".to_string(),
    }
}
