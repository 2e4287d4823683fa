use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::models::Category;
use crate::domain::category::models::CategoryId;
use crate::domain::category::models::CategoryPage;
use crate::domain::category::models::CategoryQuery;
use crate::domain::category::models::CreateCategoryCommand;
use crate::domain::category::models::NewCategory;
use crate::domain::category::models::UpdateCategoryCommand;
use crate::domain::category::ports::CategoryRepository;
use crate::domain::category::ports::CategoryServicePort;
use crate::domain::user::models::UserId;

/// Domain service implementation for category operations.
///
/// Concrete implementation of CategoryServicePort with dependency injection.
pub struct CategoryService<CR>
where
    CR: CategoryRepository,
{
    repository: Arc<CR>,
}

impl<CR> CategoryService<CR>
where
    CR: CategoryRepository,
{
    /// Create a new category service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Category persistence implementation
    pub fn new(repository: Arc<CR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<CR> CategoryServicePort for CategoryService<CR>
where
    CR: CategoryRepository,
{
    async fn create_category(
        &self,
        command: CreateCategoryCommand,
        created_by: UserId,
    ) -> Result<Category, CategoryError> {
        let new_category = NewCategory {
            name: command.name,
            description: command.description,
            created_by,
        };

        let category = self.repository.create(new_category).await?;

        tracing::info!(category_id = %category.id, created_by = %created_by, "Category created");

        Ok(category)
    }

    async fn get_category(&self, id: CategoryId) -> Result<Category, CategoryError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(CategoryError::NotFound(id))
    }

    async fn list_categories(&self, query: CategoryQuery) -> Result<CategoryPage, CategoryError> {
        self.repository.find_page(&query).await
    }

    async fn update_category(
        &self,
        id: CategoryId,
        command: UpdateCategoryCommand,
    ) -> Result<Category, CategoryError> {
        let mut category = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(CategoryError::NotFound(id))?;

        if let Some(new_name) = command.name {
            category.name = new_name;
        }

        if let Some(new_description) = command.description {
            category.description = Some(new_description);
        }

        self.repository.update(category).await
    }

    async fn delete_category(&self, id: CategoryId) -> Result<(), CategoryError> {
        self.repository.delete(id).await
    }
}
