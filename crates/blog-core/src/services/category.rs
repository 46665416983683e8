use std::sync::Arc;

use blog_shared::dto::CategoryResponse;

use super::missing_as;
use crate::domain::CategoryInput;
use crate::error::{DomainError, DomainResult};
use crate::ports::CategoryRepository;

/// Category use cases.
pub struct CategoryService {
    categories: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(categories: Arc<dyn CategoryRepository>) -> Self {
        Self { categories }
    }

    pub async fn list_categories(&self) -> DomainResult<Vec<CategoryResponse>> {
        let categories = self.categories.find_all().await?;
        Ok(categories.into_iter().map(Into::into).collect())
    }

    pub async fn get_category(&self, id: i64) -> DomainResult<CategoryResponse> {
        self.categories
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| DomainError::category_not_found(id))
    }

    pub async fn create_category(&self, input: CategoryInput) -> DomainResult<CategoryResponse> {
        let category = self.categories.insert(input).await?;
        tracing::debug!(category_id = category.id, "Category created");
        Ok(category.into())
    }

    pub async fn update_category(
        &self,
        id: i64,
        input: CategoryInput,
    ) -> DomainResult<CategoryResponse> {
        let mut category = self
            .categories
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::category_not_found(id))?;

        category.apply(input);

        let updated = self
            .categories
            .update(category)
            .await
            .map_err(|e| missing_as(e, DomainError::category_not_found(id)))?;
        Ok(updated.into())
    }

    /// Removes the category together with its posts and their comments.
    pub async fn delete_category(&self, id: i64) -> DomainResult<()> {
        self.categories
            .delete(id)
            .await
            .map_err(|e| missing_as(e, DomainError::category_not_found(id)))?;
        tracing::debug!(category_id = id, "Category deleted");
        Ok(())
    }
}
