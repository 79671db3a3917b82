//! Typed input for creating a record.

use crate::error::ValidationError;

/// oldest accepted age
const MAX_AGE: u32 = 150;

/// raw field values as read from the add form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecordForm {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub disease: String,
}

/// validated input for `POST /add`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecordInput {
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub disease: String,
}

impl NewRecordInput {
    /// Validate raw form values.
    ///
    /// Fields are trimmed and must be non-empty. Age must be plain digits
    /// without a sign or leading zeros, no greater than 150, so the number
    /// sent is exactly the text typed. Fields are checked in form order so
    /// the first problem the user sees is the topmost one.
    pub fn parse(raw: &RawRecordForm) -> Result<Self, ValidationError> {
        let name = required("name", &raw.name)?;
        let age_text = required("age", &raw.age)?;
        let age = parse_age(&age_text)?;
        let gender = required("gender", &raw.gender)?;
        let disease = required("disease", &raw.disease)?;

        Ok(Self { name, age, gender, disease })
    }
}

fn parse_age(text: &str) -> Result<u32, ValidationError> {
    let canonical =
        text.bytes().all(|b| b.is_ascii_digit()) && (text == "0" || !text.starts_with('0'));
    let age: u32 = match text.parse() {
        Ok(age) if canonical => age,
        _ => return Err(ValidationError::InvalidAge { value: text.to_string() }),
    };
    if age > MAX_AGE {
        return Err(ValidationError::AgeOutOfRange { age });
    }
    Ok(age)
}

fn required(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::MissingField { field })
    } else {
        Ok(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(name: &str, age: &str, gender: &str, disease: &str) -> RawRecordForm {
        RawRecordForm {
            name: name.to_string(),
            age: age.to_string(),
            gender: gender.to_string(),
            disease: disease.to_string(),
        }
    }

    #[test]
    fn test_valid_input() {
        let input = NewRecordInput::parse(&raw("Ann", "30", "F", "Flu")).unwrap();
        assert_eq!(input.name, "Ann");
        assert_eq!(input.age, 30);
        assert_eq!(input.gender, "F");
        assert_eq!(input.disease, "Flu");
    }

    #[test]
    fn test_fields_are_trimmed() {
        let input = NewRecordInput::parse(&raw("  Ann Lee ", " 30 ", " F", "Flu ")).unwrap();
        assert_eq!(input.name, "Ann Lee");
        assert_eq!(input.age, 30);
        assert_eq!(input.gender, "F");
        assert_eq!(input.disease, "Flu");
    }

    #[test]
    fn test_missing_fields() {
        assert_eq!(
            NewRecordInput::parse(&raw("", "30", "F", "Flu")),
            Err(ValidationError::MissingField { field: "name" })
        );
        assert_eq!(
            NewRecordInput::parse(&raw("Ann", "   ", "F", "Flu")),
            Err(ValidationError::MissingField { field: "age" })
        );
        assert_eq!(
            NewRecordInput::parse(&raw("Ann", "30", "", "Flu")),
            Err(ValidationError::MissingField { field: "gender" })
        );
        assert_eq!(
            NewRecordInput::parse(&raw("Ann", "30", "F", "")),
            Err(ValidationError::MissingField { field: "disease" })
        );
    }

    #[test]
    fn test_first_missing_field_wins() {
        assert_eq!(
            NewRecordInput::parse(&RawRecordForm::default()),
            Err(ValidationError::MissingField { field: "name" })
        );
    }

    #[test]
    fn test_invalid_age() {
        for bad in ["thirty", "-1", "30.5", "1e2", "+30", "+030", "030", "00"] {
            assert_eq!(
                NewRecordInput::parse(&raw("Ann", bad, "F", "Flu")),
                Err(ValidationError::InvalidAge { value: bad.to_string() })
            );
        }
    }

    #[test]
    fn test_age_bounds() {
        assert_eq!(NewRecordInput::parse(&raw("Ann", "0", "F", "Flu")).unwrap().age, 0);
        assert_eq!(NewRecordInput::parse(&raw("Ann", "150", "F", "Flu")).unwrap().age, 150);
        assert_eq!(
            NewRecordInput::parse(&raw("Ann", "151", "F", "Flu")),
            Err(ValidationError::AgeOutOfRange { age: 151 })
        );
    }
}
