//! Data models for the visitor form

use serde::Serialize;

/// Identifies one input of the visit request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
    FullName,
    Organization,
    VisitPurpose,
    VisitDuration,
    Recipient,
    RoomNumber,
    ResponsiblePerson,
}

impl FieldId {
    /// Stable key used for element ids and log fields
    pub fn key(self) -> &'static str {
        match self {
            FieldId::FullName => "fullName",
            FieldId::Organization => "organization",
            FieldId::VisitPurpose => "visitPurpose",
            FieldId::VisitDuration => "visitDuration",
            FieldId::Recipient => "recipient",
            FieldId::RoomNumber => "roomNumber",
            FieldId::ResponsiblePerson => "responsiblePerson",
        }
    }
}

/// A person a visitor can be sent to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recipient {
    pub id: &'static str,
    pub name: &'static str,
}

/// Closed, ordered list of valid recipients, compiled in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecipientDirectory {
    entries: &'static [Recipient],
}

impl RecipientDirectory {
    pub const fn new(entries: &'static [Recipient]) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &'static [Recipient] {
        self.entries
    }

    pub fn get(&self, id: &str) -> Option<&'static Recipient> {
        self.entries.iter().find(|r| r.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn display_name(&self, id: &str) -> Option<&'static str> {
        self.get(id).map(|r| r.name)
    }
}

/// Recipients offered by the standard form
pub const RECIPIENTS: RecipientDirectory = RecipientDirectory::new(&[
    Recipient { id: "1", name: "Иванов И.И." },
    Recipient { id: "2", name: "Петров П.П." },
    Recipient { id: "3", name: "Сидоров С.С." },
    Recipient { id: "4", name: "Кузнецов К.К." },
    Recipient { id: "5", name: "Смирнов С.М." },
]);

/// Employees offered by the material form
pub const EMPLOYEES: RecipientDirectory = RecipientDirectory::new(&[
    Recipient { id: "1", name: "Иван Иванов" },
    Recipient { id: "2", name: "Мария Смирнова" },
    Recipient { id: "3", name: "Петр Петров" },
]);

/// Validated snapshot handed to the security desk
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitRequest {
    pub full_name: String,
    pub organization: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visit_purpose: Option<String>,
    pub visit_duration: String,
    pub recipient: String,
    pub room_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responsible_person: Option<String>,
}

/// Transient notification shown at the top of the window
#[derive(Debug, Clone)]
pub struct Toast {
    pub id: String,
    pub title: &'static str,
    pub description: &'static str,
    pub timestamp: String,
}

impl Toast {
    pub fn success(title: &'static str, description: &'static str) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title,
            description,
            timestamp: chrono::Local::now().format("%H:%M").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_directory_ids_are_unique() {
        for directory in [RECIPIENTS, EMPLOYEES] {
            let ids: HashSet<_> = directory.entries().iter().map(|r| r.id).collect();
            assert_eq!(ids.len(), directory.entries().len());
        }
    }

    #[test]
    fn test_directory_lookup() {
        assert!(RECIPIENTS.contains("2"));
        assert_eq!(RECIPIENTS.display_name("2"), Some("Петров П.П."));
        assert_eq!(EMPLOYEES.display_name("2"), Some("Мария Смирнова"));
        assert!(!RECIPIENTS.contains(""));
        assert!(!RECIPIENTS.contains("6"));
        assert!(!EMPLOYEES.contains("4"));
    }

    #[test]
    fn test_visit_request_serializes_camel_case() {
        let request = VisitRequest {
            full_name: "Иван Иванов".into(),
            organization: "ООО Ромашка".into(),
            visit_purpose: None,
            visit_duration: "1 час".into(),
            recipient: "2".into(),
            room_number: "305".into(),
            responsible_person: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["fullName"], "Иван Иванов");
        assert_eq!(json["visitDuration"], "1 час");
        assert_eq!(json["roomNumber"], "305");
        assert!(json.get("visitPurpose").is_none());
        assert!(json.get("responsiblePerson").is_none());
        assert_eq!(json.as_object().unwrap().len(), 5);
    }

    #[test]
    fn test_toast_ids_differ() {
        let a = Toast::success("t", "d");
        let b = Toast::success("t", "d");
        assert_ne!(a.id, b.id);
    }
}
