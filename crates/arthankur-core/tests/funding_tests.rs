use arthankur_core::format::format_inr;
use arthankur_core::funding::request::{FundingRequest, FundingStatus, FundingType};
use arthankur_core::funding::stats::{self, StatusOverview};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

const DASHBOARD_JSON: &str = r#"[
    {
        "id": "65f0c1",
        "title": "Pre-seed for agri-drone pilot",
        "funding_type": "equity",
        "min_amount": 500000,
        "max_amount": 2500000,
        "start_date": "2024-04-01",
        "end_date": "2024-07-31",
        "status": "pending",
        "interests": [
            {"investor_id": "inv-11", "message": "Would like a call", "status": "pending"},
            {"investor_id": "inv-12", "message": "Interested", "status": "accepted"}
        ]
    },
    {
        "id": "65f0c2",
        "title": "Equipment loan",
        "type": "debt",
        "min_amount": 1000000,
        "max_amount": 1500000,
        "start_date": "2024-02-01",
        "end_date": "2024-05-01",
        "status": "approved",
        "interests": []
    },
    {
        "id": "65f0c3",
        "title": "State innovation grant",
        "funding_type": "grant",
        "min_amount": 0,
        "max_amount": 1000000,
        "start_date": "2024-01-15",
        "end_date": "2024-03-15",
        "status": "approved",
        "interests": [
            {"investor_id": "gov-1", "message": "", "status": "accepted"}
        ]
    }
]"#;

fn dashboard_requests() -> Vec<FundingRequest> {
    serde_json::from_str(DASHBOARD_JSON).unwrap()
}

#[test]
fn test_dashboard_summary() {
    let requests = dashboard_requests();
    assert_eq!(requests[1].funding_type, FundingType::Debt);
    assert_eq!(requests[2].funding_type, FundingType::Grant);

    let out = stats::aggregate_funding_stats(&requests).unwrap();
    let s = &out.result;

    assert_eq!(
        s.status_overview,
        StatusOverview {
            pending: 1,
            in_progress: 0,
            approved: 2,
            rejected: 0,
        }
    );
    assert_eq!(s.active_requests, 1);
    assert_eq!(s.total_interests, 3);
    assert_eq!(s.accepted_interests, 2);
    assert_eq!(s.total_funding_amount, dec!(5_000_000));
    assert_eq!(format_inr(s.total_funding_amount), "₹50,00,000");
    assert!(out.warnings.is_empty());
}

#[test]
fn test_dashboard_empty() {
    let out = stats::aggregate_funding_stats(&[]).unwrap();
    assert_eq!(out.result.active_requests, 0);
    assert_eq!(out.result.total_interests, 0);
    assert_eq!(out.result.status_overview, StatusOverview::default());
}

#[test]
fn test_missing_status_defaults_to_pending() {
    let json = r#"{
        "id": "x",
        "title": "Draft",
        "funding_type": "crowdfunding",
        "min_amount": 1000,
        "max_amount": 5000,
        "start_date": "2024-01-01",
        "end_date": "2024-02-01"
    }"#;
    let r: FundingRequest = serde_json::from_str(json).unwrap();
    assert_eq!(r.status, FundingStatus::Pending);
    assert!(r.interests.is_empty());
    let out = stats::aggregate_funding_stats(std::slice::from_ref(&r)).unwrap();
    assert_eq!(out.result.active_requests, 1);
}

#[test]
fn test_unknown_status_rejected_at_parse() {
    let json = r#"{
        "id": "x",
        "title": "Bad",
        "funding_type": "equity",
        "min_amount": 1,
        "max_amount": 2,
        "start_date": "2024-01-01",
        "end_date": "2024-02-01",
        "status": "closed"
    }"#;
    assert!(serde_json::from_str::<FundingRequest>(json).is_err());
}
