//! Registry summary model.

use serde::Serialize;

/// Aggregate counts shown on the admin dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrySummary {
    pub total_gifts: usize,
    /// Gifts with at least one unit reserved.
    pub reserved_gifts: usize,
    /// Gifts with at least one unit still available.
    pub available_gifts: usize,
    pub total_reservations: usize,
    pub total_reserved_units: i64,
}
