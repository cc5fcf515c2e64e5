use serde::{Deserialize, Serialize};

/// Position of a bill in the validation workflow.
///
/// The wire may carry labels outside the known set; `Other` keeps the raw
/// label so one bad record never poisons a whole list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Pending,
    Accepted,
    Refused,
    #[serde(untagged)]
    Other(String),
}

impl Status {
    pub fn as_str(&self) -> &str {
        match self {
            Status::Pending => "pending",
            Status::Accepted => "accepted",
            Status::Refused => "refused",
            Status::Other(raw) => raw,
        }
    }
}

/// One expense-report record, as stored and returned by the remote API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    /// Opaque unique identifier, assigned by the store on create.
    pub id: String,

    /// Owning employee's address.
    pub email: String,

    /// Expense category label.
    #[serde(rename = "type")]
    pub expense_type: String,

    /// Short description.
    pub name: String,

    pub amount: f64,

    /// Canonical `YYYY-MM-DD`; string comparison is chronological.
    pub date: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pct: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commentary: Option<String>,

    /// Uploaded justification file. `file_url` and `file_name` are both
    /// present or both absent, and immutable once set.
    #[serde(rename = "fileUrl", default, skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,

    #[serde(rename = "fileName", default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,

    pub status: Status,
}

/// Input for creating a bill. Same shape as [`Bill`] minus the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBill {
    pub email: String,

    #[serde(rename = "type")]
    pub expense_type: String,

    pub name: String,
    pub amount: f64,
    pub date: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pct: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commentary: Option<String>,

    #[serde(rename = "fileUrl", default, skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,

    #[serde(rename = "fileName", default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,

    pub status: Status,
}

/// Result of uploading a justification file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredFile {
    #[serde(rename = "fileUrl")]
    pub file_url: String,

    #[serde(rename = "fileName")]
    pub file_name: String,

    pub key: String,
}

/// A file as handed over by the browser's file input.
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub file_name: String,
    pub content: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_roundtrips_known_labels() {
        let s: Status = serde_json::from_str("\"pending\"").unwrap();
        assert_eq!(s, Status::Pending);
        assert_eq!(serde_json::to_string(&Status::Refused).unwrap(), "\"refused\"");
    }

    #[test]
    fn status_keeps_unknown_label() {
        let s: Status = serde_json::from_str("\"archived\"").unwrap();
        assert_eq!(s, Status::Other("archived".into()));
        assert_eq!(s.as_str(), "archived");
    }

    #[test]
    fn bill_uses_wire_field_names() {
        let json = serde_json::json!({
            "id": "abc",
            "email": "a@a",
            "type": "Transports",
            "name": "test1",
            "amount": 100.0,
            "date": "2001-01-01",
            "fileUrl": "https://storage.test/f.jpg",
            "fileName": "f.jpg",
            "status": "refused"
        });
        let bill: Bill = serde_json::from_value(json).unwrap();
        assert_eq!(bill.expense_type, "Transports");
        assert_eq!(bill.file_url.as_deref(), Some("https://storage.test/f.jpg"));
        assert!(bill.vat.is_none());

        let back = serde_json::to_value(&bill).unwrap();
        assert_eq!(back["type"], "Transports");
        assert_eq!(back["fileName"], "f.jpg");
        assert!(back.get("vat").is_none());
    }
}
