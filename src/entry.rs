use serde::{Serialize, Deserialize};

use crate::error::WheelError;
use crate::validation;

/// Weight assigned when the caller leaves it unspecified.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// One selectable item on the wheel.
///
/// `id` is an opaque key chosen by the caller; it stays stable for the life
/// of the wheel instance. `label` and `color` are presentation only and never
/// enter the selection math.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Entry {
    pub id: String,
    pub label: String,
    pub weight: f64,
    pub color: Option<String>,
}

impl Entry {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        weight: f64,
    ) -> Result<Self, WheelError> {
        let label = label.into();
        validation::validate_label(&label)
            .map_err(|e| WheelError::InvalidEntry(e.code.to_string()))?;
        validation::validate_weight(weight)
            .map_err(|e| WheelError::InvalidEntry(e.code.to_string()))?;
        Ok(Self {
            id: id.into(),
            label: label.trim().to_string(),
            weight,
            color: None,
        })
    }

    /// Builds an entry from the free-text `"Label*Weight"` convention.
    ///
    /// The text is split on the first `*`; both halves are trimmed. The
    /// weight parses as an integer: a value that parses but is not positive
    /// is rejected, while malformed or absent weight text falls back to 1.
    pub fn from_text(id: impl Into<String>, text: &str) -> Result<Self, WheelError> {
        let (label, weight) = match text.split_once('*') {
            Some((label, weight_text)) => {
                let weight = match weight_text.trim().parse::<i64>() {
                    Ok(parsed) if parsed <= 0 => {
                        return Err(WheelError::InvalidEntry("weight_not_positive".to_string()));
                    }
                    Ok(parsed) => parsed as f64,
                    Err(_) => DEFAULT_WEIGHT,
                };
                (label.trim(), weight)
            }
            None => (text.trim(), DEFAULT_WEIGHT),
        };
        Self::new(id, label, weight)
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}
