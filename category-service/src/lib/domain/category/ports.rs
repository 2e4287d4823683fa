use async_trait::async_trait;

use super::models::Category;
use super::models::CategoryId;
use super::models::CategoryPage;
use super::models::CategoryQuery;
use super::models::CreateCategoryCommand;
use super::models::NewCategory;
use super::models::UpdateCategoryCommand;
use crate::domain::category::errors::CategoryError;
use crate::domain::user::models::UserId;

/// Port for category domain service operations.
#[async_trait]
pub trait CategoryServicePort: Send + Sync + 'static {
    /// Create a new category owned by the given user.
    ///
    /// # Arguments
    /// * `command` - Validated create command
    /// * `created_by` - User creating the category
    ///
    /// # Returns
    /// Created category entity
    ///
    /// # Errors
    /// * `NameAlreadyExists` - Category name already taken
    /// * `DatabaseError` - Database operation failed
    async fn create_category(
        &self,
        command: CreateCategoryCommand,
        created_by: UserId,
    ) -> Result<Category, CategoryError>;

    /// Retrieve category by unique identifier.
    ///
    /// # Arguments
    /// * `id` - Category ID to find
    ///
    /// # Returns
    /// Category entity
    ///
    /// # Errors
    /// * `NotFound` - Category does not exist
    /// * `DatabaseError` - Database operation failed
    async fn get_category(&self, id: CategoryId) -> Result<Category, CategoryError>;

    /// List categories matching the query, one page at a time.
    ///
    /// # Arguments
    /// * `query` - Name filter and paging parameters
    ///
    /// # Returns
    /// Page of categories plus the total match count
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_categories(&self, query: CategoryQuery) -> Result<CategoryPage, CategoryError>;

    /// Update an existing category with optional fields.
    ///
    /// # Arguments
    /// * `id` - Category ID to update
    /// * `command` - Command with optional name and description
    ///
    /// # Returns
    /// Updated category entity
    ///
    /// # Errors
    /// * `NotFound` - Category does not exist
    /// * `NameAlreadyExists` - New name is already taken
    /// * `DatabaseError` - Database operation failed
    async fn update_category(
        &self,
        id: CategoryId,
        command: UpdateCategoryCommand,
    ) -> Result<Category, CategoryError>;

    /// Delete an existing category.
    ///
    /// # Arguments
    /// * `id` - Category ID to delete
    ///
    /// # Errors
    /// * `NotFound` - Category does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete_category(&self, id: CategoryId) -> Result<(), CategoryError>;
}

/// Persistence operations for category aggregate.
#[async_trait]
pub trait CategoryRepository: Send + Sync + 'static {
    /// Persist new category to storage.
    ///
    /// # Arguments
    /// * `new_category` - Category fields to insert
    ///
    /// # Returns
    /// Created category entity with storage-assigned id
    ///
    /// # Errors
    /// * `NameAlreadyExists` - Category name already taken
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, new_category: NewCategory) -> Result<Category, CategoryError>;

    /// Retrieve category by identifier.
    ///
    /// # Arguments
    /// * `id` - Category ID
    ///
    /// # Returns
    /// Optional category entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: CategoryId) -> Result<Option<Category>, CategoryError>;

    /// Retrieve one page of categories matching the query.
    ///
    /// # Arguments
    /// * `query` - Name filter and paging parameters
    ///
    /// # Returns
    /// Matching categories in name order plus the total match count
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_page(&self, query: &CategoryQuery) -> Result<CategoryPage, CategoryError>;

    /// Update existing category in storage.
    ///
    /// # Arguments
    /// * `category` - Category entity with updated fields
    ///
    /// # Returns
    /// Updated category entity with fresh `updated_at`
    ///
    /// # Errors
    /// * `NotFound` - Category does not exist
    /// * `NameAlreadyExists` - New name is already taken
    /// * `DatabaseError` - Database operation failed
    async fn update(&self, category: Category) -> Result<Category, CategoryError>;

    /// Remove category from storage.
    ///
    /// # Arguments
    /// * `id` - Category ID to delete
    ///
    /// # Errors
    /// * `NotFound` - Category does not exist
    /// * `DatabaseError` - Database operation failed
    async fn delete(&self, id: CategoryId) -> Result<(), CategoryError>;
}
