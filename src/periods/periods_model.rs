use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One of the two half-month dues within a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quincena {
    Q1,
    Q2,
}

impl Quincena {
    pub fn as_str(&self) -> &'static str {
        match self {
            Quincena::Q1 => "Q1",
            Quincena::Q2 => "Q2",
        }
    }
}

impl fmt::Display for Quincena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One calendar month's pair of bi-weekly dues for a saver.
///
/// Created only by the period generator. Month identifiers within a saver are
/// strictly increasing and contiguous by calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsPeriod {
    pub id: String,
    pub saver_id: String,
    /// First day of the calendar month this period covers. Immutable.
    pub month: NaiveDate,
    pub label: String,
    pub q1_paid: bool,
    pub q1_penalty: Decimal,
    pub q1_penalty_paid: bool,
    pub q2_paid: bool,
    pub q2_penalty: Decimal,
    pub q2_penalty_paid: bool,
    pub is_locked: bool,
}

impl SavingsPeriod {
    /// Fresh period for the given month: both tracks unpaid, no penalties,
    /// unlocked.
    pub fn new(saver_id: &str, month: NaiveDate) -> Self {
        SavingsPeriod {
            id: uuid::Uuid::new_v4().to_string(),
            saver_id: saver_id.to_string(),
            month,
            label: month.format("%B %Y").to_string(),
            q1_paid: false,
            q1_penalty: Decimal::ZERO,
            q1_penalty_paid: false,
            q2_paid: false,
            q2_penalty: Decimal::ZERO,
            q2_penalty_paid: false,
            is_locked: false,
        }
    }

    /// Both dues paid. A settled period unlocks its successor.
    pub fn is_settled(&self) -> bool {
        self.q1_paid && self.q2_paid
    }

    pub fn due_paid(&self, quincena: Quincena) -> bool {
        match quincena {
            Quincena::Q1 => self.q1_paid,
            Quincena::Q2 => self.q2_paid,
        }
    }

    pub fn penalty(&self, quincena: Quincena) -> Decimal {
        match quincena {
            Quincena::Q1 => self.q1_penalty,
            Quincena::Q2 => self.q2_penalty,
        }
    }

    pub fn penalty_paid(&self, quincena: Quincena) -> bool {
        match quincena {
            Quincena::Q1 => self.q1_penalty_paid,
            Quincena::Q2 => self.q2_penalty_paid,
        }
    }

    /// A zero penalty means "none assessed" and is inert.
    pub fn has_unpaid_penalty(&self, quincena: Quincena) -> bool {
        self.penalty(quincena) > Decimal::ZERO && !self.penalty_paid(quincena)
    }

    /// Any nonzero penalty still unpaid on either track.
    pub fn has_open_issues(&self) -> bool {
        self.has_unpaid_penalty(Quincena::Q1) || self.has_unpaid_penalty(Quincena::Q2)
    }
}
