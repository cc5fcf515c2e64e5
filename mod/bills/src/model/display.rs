use billed_store::Bill;
use tracing::warn;

use crate::format;

/// A bill projected for rendering: locale-formatted date and status label
/// alongside the raw values the table sorts and tests assert on.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayBill {
    pub id: String,
    pub expense_type: String,
    pub name: String,
    pub amount: f64,

    /// Canonical `YYYY-MM-DD`, kept for chronological ordering.
    pub date: String,

    /// Locale-rendered date; falls back to the raw value when the record's
    /// date cannot be parsed, rather than failing the whole list.
    pub formatted_date: String,

    pub status_label: String,
    pub file_url: Option<String>,
    pub file_name: Option<String>,
}

impl DisplayBill {
    pub fn project(bill: Bill) -> Self {
        let formatted_date = match format::format_date(&bill.date) {
            Ok(formatted) => formatted,
            Err(err) => {
                warn!(id = %bill.id, date = %bill.date, %err, "keeping unformatted date");
                bill.date.clone()
            }
        };
        Self {
            formatted_date,
            status_label: format::format_status(&bill.status),
            id: bill.id,
            expense_type: bill.expense_type,
            name: bill.name,
            amount: bill.amount,
            date: bill.date,
            file_url: bill.file_url,
            file_name: bill.file_name,
        }
    }
}
