//! Render model for the display region.
//!
//! The dashboard draws exactly what `RecordView::render` returns; nothing
//! about the list is kept between fetches.

use crate::record::{Record, RecordId};

/// text shown when the service has no records
pub const EMPTY_MESSAGE: &str = "No Records Found.";

/// what the display region shows after a list fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordView {
    /// empty or non-array response
    Empty,
    /// one entry per record, in response order
    Entries(Vec<RecordEntry>),
}

/// one rendered record with its delete target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordEntry {
    /// id the delete control is bound to
    pub id: RecordId,
    /// shown in bold
    pub name: String,
    /// "(30 yrs, F) - Flu"
    pub details: String,
}

impl RecordView {
    pub fn render(records: &[Record]) -> Self {
        if records.is_empty() {
            return Self::Empty;
        }
        Self::Entries(records.iter().map(RecordEntry::from).collect())
    }

    pub fn entries(&self) -> &[RecordEntry] {
        match self {
            Self::Empty => &[],
            Self::Entries(entries) => entries,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl From<&Record> for RecordEntry {
    fn from(record: &Record) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            details: format!("({} yrs, {}) - {}", record.age, record.gender, record.disease),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::parse_record_list;

    fn record(id: RecordId, name: &str, age: &str, gender: &str, disease: &str) -> Record {
        Record {
            id,
            name: name.to_string(),
            age: age.into(),
            gender: gender.to_string(),
            disease: disease.to_string(),
        }
    }

    #[test]
    fn test_single_record() {
        let body = r#"[{"id":1,"name":"Ann","age":"30","gender":"F","disease":"Flu"}]"#;
        let view = RecordView::render(&parse_record_list(body).unwrap());

        assert_eq!(view.entries().len(), 1);
        let entry = &view.entries()[0];
        assert_eq!(entry.id, 1);
        assert_eq!(entry.name, "Ann");
        assert_eq!(entry.details, "(30 yrs, F) - Flu");
    }

    #[test]
    fn test_one_entry_per_record_in_order() {
        let records = vec![
            record(5, "Eve", "51", "F", "Asthma"),
            record(2, "Bob", "12", "M", "Measles"),
            record(9, "Cy", "77", "X", "Gout"),
        ];
        let view = RecordView::render(&records);
        let entries = view.entries();

        assert_eq!(entries.len(), records.len());
        for (entry, record) in entries.iter().zip(&records) {
            assert_eq!(entry.id, record.id);
            assert_eq!(entry.name, record.name);
            assert_eq!(
                entry.details,
                format!("({} yrs, {}) - {}", record.age, record.gender, record.disease)
            );
        }
    }

    #[test]
    fn test_empty_and_non_array_render_empty() {
        for body in ["[]", "{}", "null", "42"] {
            let view = RecordView::render(&parse_record_list(body).unwrap());
            assert!(view.is_empty());
            assert!(view.entries().is_empty());
        }
        assert_eq!(EMPTY_MESSAGE, "No Records Found.");
    }

    #[test]
    fn test_render_is_idempotent() {
        let records = vec![record(1, "Ann", "30", "F", "Flu"), record(2, "Bo", "4", "M", "Pox")];
        assert_eq!(RecordView::render(&records), RecordView::render(&records));
    }

    #[test]
    fn test_duplicate_names_keep_distinct_ids() {
        let records = vec![record(1, "Ann", "30", "F", "Flu"), record(2, "Ann", "30", "F", "Flu")];
        let view = RecordView::render(&records);
        let ids: Vec<RecordId> = view.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(view.entries()[0].details, view.entries()[1].details);
    }
}
