use crate::shared::patch_field::PatchField;

//
// ──────────────────────────────────────────────────────────
// Text field validation shared by topic, post and comment payloads
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("{0} cannot be empty")]
    Empty(&'static str),

    #[error("{field} must not exceed {max} characters")]
    TooLong { field: &'static str, max: usize },
}

impl FieldError {
    /// Machine-readable code, e.g. `EMPTY_TITLE` or `TITLE_TOO_LONG`.
    pub fn code(&self) -> String {
        match self {
            FieldError::Missing(field) => format!("MISSING_{}", field.to_uppercase()),
            FieldError::Empty(field) => format!("EMPTY_{}", field.to_uppercase()),
            FieldError::TooLong { field, .. } => format!("{}_TOO_LONG", field.to_uppercase()),
        }
    }
}

/// A request body that could not be turned into input at all. Update use cases
/// receive it as `Err` and report it only after resolution and ownership pass.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BodyError {
    #[error("{0}")]
    Malformed(String),

    #[error("{0}")]
    FileTooLarge(String),
}

/// Trims `raw` and enforces non-emptiness plus an optional character limit.
pub fn clean_text(field: &'static str, raw: &str, max: Option<usize>) -> Result<String, FieldError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(FieldError::Empty(field));
    }

    if let Some(max) = max {
        if trimmed.chars().count() > max {
            return Err(FieldError::TooLong { field, max });
        }
    }

    Ok(trimmed.to_string())
}

/// Create / full update: the field must be present.
pub fn required_text(
    field: &'static str,
    value: PatchField<String>,
    max: Option<usize>,
) -> Result<String, FieldError> {
    match value {
        PatchField::Value(raw) => clean_text(field, &raw, max),
        PatchField::Unset | PatchField::Null => Err(FieldError::Missing(field)),
    }
}

/// Partial update: absent means "keep", null is rejected for non-nullable text.
pub fn optional_text(
    field: &'static str,
    value: PatchField<String>,
    max: Option<usize>,
) -> Result<Option<String>, FieldError> {
    match value {
        PatchField::Unset => Ok(None),
        PatchField::Null => Err(FieldError::Empty(field)),
        PatchField::Value(raw) => clean_text(field, &raw, max).map(Some),
    }
}

/// PUT replaces every writable field, PATCH only the supplied ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateMode {
    Full,
    Partial,
}

/// `None` means "keep the stored value".
pub fn text_for_update(
    field: &'static str,
    value: PatchField<String>,
    max: Option<usize>,
    mode: UpdateMode,
) -> Result<Option<String>, FieldError> {
    match mode {
        UpdateMode::Full => required_text(field, value, max).map(Some),
        UpdateMode::Partial => optional_text(field, value, max),
    }
}
