use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::models::Category;
use crate::domain::category::models::CategoryId;
use crate::domain::category::models::CategoryName;
use crate::domain::category::models::CategoryPage;
use crate::domain::category::models::CategoryQuery;
use crate::domain::category::models::NewCategory;
use crate::domain::category::ports::CategoryRepository;
use crate::domain::user::models::UserId;

pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Raw row shape; converted back into domain types on the way out.
#[derive(sqlx::FromRow)]
struct CategoryRow {
    id: i64,
    name: String,
    description: Option<String>,
    created_by: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl CategoryRow {
    fn try_into_category(self) -> Result<Category, CategoryError> {
        Ok(Category {
            id: CategoryId(self.id),
            name: CategoryName::new(self.name)?,
            description: self.description,
            created_by: UserId(self.created_by),
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn create(&self, new_category: NewCategory) -> Result<Category, CategoryError> {
        let row = sqlx::query_as::<_, CategoryRow>(
            r#"
            INSERT INTO categories (name, description, created_by)
            VALUES ($1, $2, $3)
            RETURNING id, name, description, created_by, created_at, updated_at
            "#,
        )
        .bind(new_category.name.as_str())
        .bind(&new_category.description)
        .bind(new_category.created_by.as_i64())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation()
                    && db_err.constraint() == Some("categories_name_key")
                {
                    return CategoryError::NameAlreadyExists(
                        new_category.name.as_str().to_string(),
                    );
                }
            }
            CategoryError::DatabaseError(e.to_string())
        })?;

        row.try_into_category()
    }

    async fn find_by_id(&self, id: CategoryId) -> Result<Option<Category>, CategoryError> {
        let row = sqlx::query_as::<_, CategoryRow>(
            r#"
            SELECT id, name, description, created_by, created_at, updated_at
            FROM categories
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CategoryError::DatabaseError(e.to_string()))?;

        row.map(CategoryRow::try_into_category).transpose()
    }

    async fn find_page(&self, query: &CategoryQuery) -> Result<CategoryPage, CategoryError> {
        let rows = sqlx::query_as::<_, CategoryRow>(
            r#"
            SELECT id, name, description, created_by, created_at, updated_at
            FROM categories
            WHERE $1::TEXT IS NULL OR name ILIKE '%' || $1 || '%'
            ORDER BY name
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(query.name.as_deref())
        .bind(query.per_page)
        .bind(query.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CategoryError::DatabaseError(e.to_string()))?;

        let total_items = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM categories
            WHERE $1::TEXT IS NULL OR name ILIKE '%' || $1 || '%'
            "#,
        )
        .bind(query.name.as_deref())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| CategoryError::DatabaseError(e.to_string()))?;

        let categories = rows
            .into_iter()
            .map(CategoryRow::try_into_category)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CategoryPage {
            categories,
            total_items,
        })
    }

    async fn update(&self, category: Category) -> Result<Category, CategoryError> {
        let row = sqlx::query_as::<_, CategoryRow>(
            r#"
            UPDATE categories
            SET name = $2, description = $3, updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, description, created_by, created_at, updated_at
            "#,
        )
        .bind(category.id.as_i64())
        .bind(category.name.as_str())
        .bind(&category.description)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation()
                    && db_err.constraint() == Some("categories_name_key")
                {
                    return CategoryError::NameAlreadyExists(category.name.as_str().to_string());
                }
            }
            CategoryError::DatabaseError(e.to_string())
        })?;

        match row {
            Some(r) => r.try_into_category(),
            None => Err(CategoryError::NotFound(category.id)),
        }
    }

    async fn delete(&self, id: CategoryId) -> Result<(), CategoryError> {
        let result = sqlx::query(
            r#"
            DELETE FROM categories
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .execute(&self.pool)
        .await
        .map_err(|e| CategoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(CategoryError::NotFound(id));
        }

        Ok(())
    }
}
