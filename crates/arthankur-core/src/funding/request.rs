use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ArthankurError;
use crate::types::Money;
use crate::ArthankurResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FundingType {
    Equity,
    Debt,
    Grant,
    Crowdfunding,
}

/// Funding request lifecycle. Requests start `Pending`; the backend moves
/// them on when an investor's interest is accepted or the owner changes the
/// status. This crate only reads the state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FundingStatus {
    #[default]
    Pending,
    InProgress,
    Approved,
    Rejected,
}

impl FundingStatus {
    /// Still open to investors.
    pub fn is_active(self) -> bool {
        matches!(self, FundingStatus::Pending | FundingStatus::InProgress)
    }
}

impl std::fmt::Display for FundingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FundingStatus::Pending => write!(f, "pending"),
            FundingStatus::InProgress => write!(f, "in_progress"),
            FundingStatus::Approved => write!(f, "approved"),
            FundingStatus::Rejected => write!(f, "rejected"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterestStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

/// An investor's expression of interest in a funding request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interest {
    pub investor_id: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: InterestStatus,
}

/// A startup's request for funding, as returned by the marketplace backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundingRequest {
    pub id: String,
    pub title: String,
    #[serde(rename = "type", alias = "funding_type")]
    pub funding_type: FundingType,
    pub min_amount: Money,
    pub max_amount: Money,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub status: FundingStatus,
    #[serde(default)]
    pub interests: Vec<Interest>,
}

impl FundingRequest {
    pub fn validate(&self) -> ArthankurResult<()> {
        if self.min_amount < Decimal::ZERO {
            return Err(ArthankurError::InvalidInput {
                field: "min_amount".into(),
                reason: format!("Request '{}': minimum amount cannot be negative.", self.id),
            });
        }
        if self.min_amount > self.max_amount {
            return Err(ArthankurError::InvalidInput {
                field: "max_amount".into(),
                reason: format!(
                    "Request '{}': maximum amount {} is below minimum {}.",
                    self.id, self.max_amount, self.min_amount
                ),
            });
        }
        if self.start_date > self.end_date {
            return Err(ArthankurError::InvalidInput {
                field: "end_date".into(),
                reason: format!(
                    "Request '{}': end date {} precedes start date {}.",
                    self.id, self.end_date, self.start_date
                ),
            });
        }
        Ok(())
    }

    pub fn accepted_interests(&self) -> usize {
        self.interests
            .iter()
            .filter(|i| i.status == InterestStatus::Accepted)
            .count()
    }
}
