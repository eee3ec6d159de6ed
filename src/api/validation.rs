use super::{ApiError, EntryPayload};
use crate::db::EntryFields;

const MAX_TEXT_LEN: usize = 255;

pub fn validate_id(id: i32, resource: &str) -> Result<i32, ApiError> {
    if id <= 0 {
        return Err(ApiError::validation(format!(
            "Invalid {} ID: {}. ID must be a positive integer",
            resource, id
        )));
    }
    Ok(id)
}

pub fn validate_label(label: Option<&str>) -> Result<&str, ApiError> {
    let label = label.map(str::trim).unwrap_or_default();
    if label.is_empty() {
        return Err(ApiError::validation("label: This field is required."));
    }

    if label.chars().count() > MAX_TEXT_LEN {
        return Err(ApiError::validation(format!(
            "label: Ensure this field has no more than {MAX_TEXT_LEN} characters."
        )));
    }

    Ok(label)
}

fn required_text(value: Option<String>, field: &str) -> Result<String, ApiError> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ApiError::validation(format!(
            "{field}: This field is required."
        ))),
    }
}

fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn required<T>(value: Option<T>, field: &str) -> Result<T, ApiError> {
    value.ok_or_else(|| ApiError::validation(format!("{field}: This field is required.")))
}

/// Checks an entry body and turns it into storable fields.
///
/// Text fields are trimmed; blank optional text is stored as absent.
pub fn validate_entry_payload(payload: EntryPayload) -> Result<EntryFields, ApiError> {
    let whiskey = required_text(payload.whiskey, "whiskey")?;
    if whiskey.chars().count() > MAX_TEXT_LEN {
        return Err(ApiError::validation(format!(
            "whiskey: Ensure this field has no more than {MAX_TEXT_LEN} characters."
        )));
    }

    let proof = required(payload.proof, "proof")?;
    if !proof.is_finite() || !(0.0..=200.0).contains(&proof) {
        return Err(ApiError::validation(format!(
            "proof: {proof} is not between 0 and 200."
        )));
    }

    if let Some(age) = payload.age_in_years
        && (!age.is_finite() || age < 0.0)
    {
        return Err(ApiError::validation(format!(
            "age_in_years: {age} cannot be negative."
        )));
    }

    let type_id = validate_id(required(payload.type_id, "type_id")?, "type")?;
    let rating_id = validate_id(required(payload.rating_id, "rating_id")?, "rating")?;
    let color_id = payload
        .color_id
        .map(|id| validate_id(id, "color"))
        .transpose()?;

    Ok(EntryFields {
        whiskey,
        type_id,
        country: required_text(payload.country, "country")?,
        part_of_country: optional_text(payload.part_of_country),
        age_in_years: payload.age_in_years,
        proof,
        color_id,
        mash_bill: optional_text(payload.mash_bill),
        maturation_details: optional_text(payload.maturation_details),
        nose: required_text(payload.nose, "nose")?,
        palate: required_text(payload.palate, "palate")?,
        finish: required_text(payload.finish, "finish")?,
        rating_id,
        notes: optional_text(payload.notes),
        image_url: optional_text(payload.image_url),
        published: payload.published.unwrap_or(false),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> EntryPayload {
        EntryPayload {
            whiskey: Some("  Springbank 10 ".to_string()),
            type_id: Some(7),
            country: Some("Scotland".to_string()),
            part_of_country: Some("Campbeltown".to_string()),
            age_in_years: Some(10.0),
            proof: Some(92.0),
            color_id: Some(10),
            mash_bill: Some(String::new()),
            nose: Some("brine".to_string()),
            palate: Some("oily".to_string()),
            finish: Some("medium".to_string()),
            rating_id: Some(5),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_payload() {
        let fields = validate_entry_payload(payload()).unwrap();
        assert_eq!(fields.whiskey, "Springbank 10");
        assert_eq!(fields.type_id, 7);
        assert_eq!(fields.color_id, Some(10));
        assert!(fields.mash_bill.is_none());
        assert!(!fields.published);
    }

    #[test]
    fn test_missing_required_field() {
        let mut p = payload();
        p.nose = None;
        let err = validate_entry_payload(p).unwrap_err();
        assert!(err.to_string().contains("nose"));

        let mut p = payload();
        p.rating_id = None;
        assert!(validate_entry_payload(p).is_err());
    }

    #[test]
    fn test_blank_required_text() {
        let mut p = payload();
        p.country = Some("   ".to_string());
        assert!(validate_entry_payload(p).is_err());
    }

    #[test]
    fn test_out_of_range_numbers() {
        let mut p = payload();
        p.proof = Some(250.0);
        assert!(validate_entry_payload(p).is_err());

        let mut p = payload();
        p.age_in_years = Some(-1.0);
        assert!(validate_entry_payload(p).is_err());

        let mut p = payload();
        p.type_id = Some(0);
        assert!(validate_entry_payload(p).is_err());
    }

    #[test]
    fn test_validate_label() {
        assert_eq!(validate_label(Some(" Rye ")).unwrap(), "Rye");
        assert!(validate_label(Some("")).is_err());
        assert!(validate_label(None).is_err());
    }

    #[test]
    fn test_length_limit_counts_characters() {
        let mut p = payload();
        p.whiskey = Some("é".repeat(MAX_TEXT_LEN));
        assert!(validate_entry_payload(p).is_ok());

        let mut p = payload();
        p.whiskey = Some("é".repeat(MAX_TEXT_LEN + 1));
        assert!(validate_entry_payload(p).is_err());

        assert!(validate_label(Some(&"ü".repeat(MAX_TEXT_LEN))).is_ok());
        assert!(validate_label(Some(&"ü".repeat(MAX_TEXT_LEN + 1))).is_err());
    }
}
