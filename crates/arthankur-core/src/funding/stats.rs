use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::funding::request::{FundingRequest, FundingStatus};
use crate::types::{with_metadata, ComputationOutput, Money};
use crate::ArthankurResult;

/// Request counts per lifecycle state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusOverview {
    pub pending: u32,
    pub in_progress: u32,
    pub approved: u32,
    pub rejected: u32,
}

impl StatusOverview {
    fn record(&mut self, status: FundingStatus) {
        match status {
            FundingStatus::Pending => self.pending += 1,
            FundingStatus::InProgress => self.in_progress += 1,
            FundingStatus::Approved => self.approved += 1,
            FundingStatus::Rejected => self.rejected += 1,
        }
    }
}

/// Dashboard summary over a startup's funding requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FundingStats {
    /// Sum of every request's maximum amount
    pub total_funding_amount: Money,
    /// Requests still pending or in progress
    pub active_requests: u32,
    pub total_interests: u32,
    pub accepted_interests: u32,
    pub status_overview: StatusOverview,
}

/// Fold funding requests into dashboard totals. Order-independent; an empty
/// slice yields all zeros. Records that fail validation are still counted
/// (the backend owns their lifecycle) but each produces a warning.
pub fn aggregate_funding_stats(
    requests: &[FundingRequest],
) -> ArthankurResult<ComputationOutput<FundingStats>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let stats = requests.iter().fold(FundingStats::default(), |mut acc, r| {
        if let Err(e) = r.validate() {
            warnings.push(e.to_string());
        }
        acc.total_funding_amount += r.max_amount;
        if r.status.is_active() {
            acc.active_requests += 1;
        }
        acc.total_interests += r.interests.len() as u32;
        acc.accepted_interests += r.accepted_interests() as u32;
        acc.status_overview.record(r.status);
        acc
    });

    let assumptions = serde_json::json!({
        "request_count": requests.len(),
        "active_statuses": ["pending", "in_progress"],
        "total_uses": "max_amount",
    });

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Funding request summary",
        &assumptions,
        warnings,
        elapsed,
        stats,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::funding::request::{FundingType, Interest, InterestStatus};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn request(id: &str, status: FundingStatus, max: Decimal, interests: usize) -> FundingRequest {
        FundingRequest {
            id: id.to_string(),
            title: format!("Request {id}"),
            funding_type: FundingType::Equity,
            min_amount: Decimal::ZERO,
            max_amount: max,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
            status,
            interests: (0..interests)
                .map(|i| Interest {
                    investor_id: format!("inv-{i}"),
                    message: String::new(),
                    status: InterestStatus::Pending,
                })
                .collect(),
        }
    }

    #[test]
    fn test_empty_input_all_zero() {
        let out = aggregate_funding_stats(&[]).unwrap();
        assert_eq!(out.result, FundingStats::default());
        assert_eq!(out.result.total_funding_amount, Decimal::ZERO);
        assert!(out.warnings.is_empty());
    }

    #[test]
    fn test_pending_approved_approved() {
        let requests = vec![
            request("a", FundingStatus::Pending, dec!(1_000_000), 2),
            request("b", FundingStatus::Approved, dec!(2_500_000), 1),
            request("c", FundingStatus::Approved, dec!(500_000), 0),
        ];
        let out = aggregate_funding_stats(&requests).unwrap();
        let s = &out.result;
        assert_eq!(s.status_overview.approved, 2);
        assert_eq!(s.status_overview.pending, 1);
        assert_eq!(s.active_requests, 1);
        assert_eq!(s.total_interests, 3);
        assert_eq!(s.total_funding_amount, dec!(4_000_000));
    }

    #[test]
    fn test_order_independent() {
        let mut requests = vec![
            request("a", FundingStatus::InProgress, dec!(100), 1),
            request("b", FundingStatus::Rejected, dec!(200), 4),
            request("c", FundingStatus::Pending, dec!(300), 0),
        ];
        let forward = aggregate_funding_stats(&requests).unwrap().result;
        requests.reverse();
        let backward = aggregate_funding_stats(&requests).unwrap().result;
        assert_eq!(forward, backward);
        assert_eq!(forward.active_requests, 2);
    }

    #[test]
    fn test_accepted_interests_counted() {
        let mut r = request("a", FundingStatus::InProgress, dec!(100), 3);
        r.interests[0].status = InterestStatus::Accepted;
        let out = aggregate_funding_stats(&[r]).unwrap();
        assert_eq!(out.result.accepted_interests, 1);
        assert_eq!(out.result.total_interests, 3);
    }

    #[test]
    fn test_invalid_record_counted_with_warning() {
        let mut r = request("bad", FundingStatus::Pending, dec!(100), 0);
        r.min_amount = dec!(500);
        let out = aggregate_funding_stats(&[r]).unwrap();
        assert_eq!(out.result.status_overview.pending, 1);
        assert_eq!(out.warnings.len(), 1);
        assert!(out.warnings[0].contains("bad"));
    }
}
