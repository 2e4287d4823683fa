use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::category::errors::CategoryNameError;
use crate::domain::user::models::UserId;

/// Category unique identifier value object.
///
/// Wraps the database-assigned integer key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CategoryId(pub i64);

impl CategoryId {
    /// Get identifier as a plain integer.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Category aggregate entity.
#[derive(Debug, Clone)]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
    pub description: Option<String>,
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Category name value object with validation.
///
/// Ensures name is non-empty after trimming and within 100 character limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryName(String);

impl CategoryName {
    const MAX_LENGTH: usize = 100;

    /// Create a new validated category name.
    ///
    /// Surrounding whitespace is trimmed before validation.
    ///
    /// # Arguments
    /// * `name` - Raw category name string
    ///
    /// # Returns
    /// Validated CategoryName value object
    ///
    /// # Errors
    /// * `Empty` - Name is empty or whitespace only
    /// * `TooLong` - Name exceeds 100 characters
    pub fn new(name: String) -> Result<Self, CategoryNameError> {
        let name = name.trim().to_string();
        let length = name.len();
        if length == 0 {
            Err(CategoryNameError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(CategoryNameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(name))
        }
    }

    /// Get name as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to create a category.
#[derive(Debug)]
pub struct CreateCategoryCommand {
    pub name: CategoryName,
    pub description: Option<String>,
}

/// Command to update an existing category with optional validated fields.
///
/// All fields are optional to support partial updates.
/// Only provided fields will be updated.
#[derive(Debug)]
pub struct UpdateCategoryCommand {
    pub name: Option<CategoryName>,
    pub description: Option<String>,
}

/// Fields of a category ready for insertion.
#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: CategoryName,
    pub description: Option<String>,
    pub created_by: UserId,
}

/// Filter and paging parameters for category listing.
#[derive(Debug, Clone)]
pub struct CategoryQuery {
    /// Case-insensitive substring filter on the name
    pub name: Option<String>,
    /// 1-based page number
    pub page: i64,
    /// Items per page
    pub per_page: i64,
}

impl CategoryQuery {
    const MAX_PER_PAGE: i64 = 100;

    /// Build a query with page and size clamped to sane bounds.
    ///
    /// # Arguments
    /// * `name` - Optional name filter
    /// * `page` - Requested page, floored at 1
    /// * `per_page` - Requested page size, clamped to 1..=100
    pub fn new(name: Option<String>, page: i64, per_page: i64) -> Self {
        Self {
            name,
            page: page.max(1),
            per_page: per_page.clamp(1, Self::MAX_PER_PAGE),
        }
    }

    /// Row offset for the requested page.
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.per_page
    }
}

/// One page of categories together with the unfiltered-out total.
#[derive(Debug, Clone)]
pub struct CategoryPage {
    pub categories: Vec<Category>,
    pub total_items: i64,
}
