//! Dashboard rollups

/// Raw counts and sums read from the datastore
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BillingSnapshot {
    pub active_consumers: u64,
    pub total_bills: u64,
    pub pending_bills: u64,
    pub paid_bills: u64,
    pub total_revenue: f64,
}

/// Figures shown on the dashboard
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashboardStats {
    pub total_consumers: u64,
    pub total_bills: u64,
    pub total_revenue: f64,
    pub pending_bills: u64,
    /// Percentage of bills that are paid, 2 decimal places
    pub collection_rate: f64,
}

impl From<BillingSnapshot> for DashboardStats {
    fn from(s: BillingSnapshot) -> Self {
        Self {
            total_consumers: s.active_consumers,
            total_bills: s.total_bills,
            total_revenue: s.total_revenue,
            pending_bills: s.pending_bills,
            collection_rate: collection_rate(s.paid_bills, s.total_bills),
        }
    }
}

/// `100 * paid / total`, rounded to 2 decimals; 0 when there are no bills.
pub fn collection_rate(paid_bills: u64, total_bills: u64) -> f64 {
    if total_bills == 0 {
        return 0.0;
    }
    round2(paid_bills as f64 * 100.0 / total_bills as f64)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_rate_without_bills_is_zero() {
        assert_eq!(collection_rate(0, 0), 0.0);
    }

    #[test]
    fn collection_rate_all_paid_is_hundred() {
        assert_eq!(collection_rate(4, 4), 100.0);
    }

    #[test]
    fn collection_rate_is_rounded() {
        assert_eq!(collection_rate(1, 3), 33.33);
        assert_eq!(collection_rate(2, 3), 66.67);
    }

    #[test]
    fn stats_from_snapshot() {
        let stats = DashboardStats::from(BillingSnapshot {
            active_consumers: 3,
            total_bills: 4,
            pending_bills: 3,
            paid_bills: 1,
            total_revenue: 404.25,
        });
        assert_eq!(stats.total_consumers, 3);
        assert_eq!(stats.pending_bills, 3);
        assert_eq!(stats.collection_rate, 25.0);
        assert_eq!(stats.total_revenue, 404.25);
    }
}
