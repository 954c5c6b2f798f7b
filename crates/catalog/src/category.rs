use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use codeflix_core::{
    CategoryId, Clock, DomainError, DomainResult, Entity, IdGenerator, SystemClock,
    UuidV7Generator,
};

/// Minimum name length, in UTF-16 code units.
pub const NAME_MIN_LEN: usize = 3;
/// Maximum name length, in UTF-16 code units.
pub const NAME_MAX_LEN: usize = 255;

pub const NAME_EMPTY_MESSAGE: &str = "Name should not be empty or null";
pub const NAME_TOO_SHORT_MESSAGE: &str = "Name should not be less than 3 characteres";
pub const NAME_TOO_LONG_MESSAGE: &str = "Name should not be greater than 255 characteres";
pub const DESCRIPTION_NULL_MESSAGE: &str = "Description should not be null";

/// Input for creating a category.
///
/// `name` and `description` are nullable so that untrusted input (e.g. JSON
/// with explicit `null`s) reaches validation unchanged. A missing `is_active`
/// means active.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewCategory {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

impl NewCategory {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            description: Some(description.into()),
            is_active: None,
        }
    }

    pub fn with_is_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }
}

/// Entity: Category.
///
/// Always valid once constructed; there are no mutators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Category {
    id: CategoryId,
    name: String,
    description: String,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl Category {
    /// Create an active category using the system clock and UUIDv7 ids.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> DomainResult<Self> {
        Self::create(NewCategory::new(name, description))
    }

    pub fn with_active(
        name: impl Into<String>,
        description: impl Into<String>,
        is_active: bool,
    ) -> DomainResult<Self> {
        Self::create(NewCategory::new(name, description).with_is_active(is_active))
    }

    pub fn create(input: NewCategory) -> DomainResult<Self> {
        Self::create_with(input, &SystemClock, &UuidV7Generator)
    }

    /// Create a category with injected time and id sources.
    ///
    /// The id and timestamp are taken before validation runs. On failure the
    /// first violated rule is returned and nothing is built.
    pub fn create_with(
        input: NewCategory,
        clock: &dyn Clock,
        ids: &dyn IdGenerator,
    ) -> DomainResult<Self> {
        let id = CategoryId::generate(ids);
        let created_at = clock.now();
        let NewCategory {
            name,
            description,
            is_active,
        } = input;

        let name = check_name(name)?;
        let description = check_description(description)?;

        let category = Self {
            id,
            name,
            description,
            is_active: is_active.unwrap_or(true),
            created_at,
        };

        tracing::trace!(
            category_id = %category.id,
            is_active = category.is_active,
            "category created"
        );

        Ok(category)
    }

    pub fn id_typed(&self) -> CategoryId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Re-run the validation rules against the current state.
    pub fn validate(&self) -> DomainResult<()> {
        validate_category_fields(Some(self.name.as_str()), Some(self.description.as_str()))
    }
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Validate candidate category fields.
///
/// Rules run in a fixed order and the first failure is returned:
/// blank name, short name, long name, missing description.
pub fn validate_category_fields(name: Option<&str>, description: Option<&str>) -> DomainResult<()> {
    check_name(name)?;
    check_description(description)?;
    Ok(())
}

fn check_name<S: AsRef<str>>(name: Option<S>) -> DomainResult<S> {
    let Some(name) = name else {
        return Err(DomainError::entity_validation(NAME_EMPTY_MESSAGE));
    };

    let value = name.as_ref();
    if value.trim().is_empty() {
        return Err(DomainError::entity_validation(NAME_EMPTY_MESSAGE));
    }

    // UTF-16 code units of the untrimmed value.
    let len = value.encode_utf16().count();
    if len < NAME_MIN_LEN {
        return Err(DomainError::entity_validation(NAME_TOO_SHORT_MESSAGE));
    }
    if len > NAME_MAX_LEN {
        return Err(DomainError::entity_validation(NAME_TOO_LONG_MESSAGE));
    }

    Ok(name)
}

fn check_description<S: AsRef<str>>(description: Option<S>) -> DomainResult<S> {
    description.ok_or_else(|| DomainError::entity_validation(DESCRIPTION_NULL_MESSAGE))
}
