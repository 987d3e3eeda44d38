use serde::Serialize;

/// A file whose measured size exceeds the configured limit
#[derive(Debug, Clone, Serialize)]
pub struct SizeViolation {
    pub path: String,
    pub size_bytes: u64,
    pub max_bytes: u64,
}

/// Statistics from a checking pass
#[derive(Debug, Default, Serialize)]
pub struct CheckStats {
    pub files_checked: usize,
    pub total_violations: usize,
    pub check_duration_ms: u64,
}

/// Result of one checking pass
///
/// Violations keep the input ordering of the path list, duplicates included.
/// Built fresh on every pass; nothing is persisted between runs.
#[derive(Debug, Serialize)]
pub struct SizeReport {
    pub violations: Vec<SizeViolation>,
    pub stats: CheckStats,
}

impl SizeReport {
    /// Whether the pass found no oversized files
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }
}
