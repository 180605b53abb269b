use rustrict::CensorStr;
use validator::ValidationError;

pub fn validate_label(label: &str) -> Result<(), ValidationError> {
    if label.trim().is_empty() {
        return Err(ValidationError::new("empty_label"));
    }
    if label.is_inappropriate() {
        return Err(ValidationError::new("inappropriate_label"));
    }
    Ok(())
}

pub fn validate_weight(weight: f64) -> Result<(), ValidationError> {
    if !weight.is_finite() || weight <= 0.0 {
        return Err(ValidationError::new("weight_not_positive"));
    }
    Ok(())
}
