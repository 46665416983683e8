//! SeaORM repository implementations.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, Order, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use blog_core::domain::{
    Category, CategoryInput, Comment, NewComment, NewPost, Post, PostWithCategory,
};
use blog_core::error::RepoError;
use blog_core::pagination::{PageRequest, PostSortField, SortDirection};
use blog_core::ports::{CategoryRepository, CommentRepository, PostRepository};

use super::entity::category::{self, Entity as CategoryEntity};
use super::entity::comment::{self, Entity as CommentEntity};
use super::entity::post::{self, Entity as PostEntity};
use super::sea_base::{SeaBaseRepository, map_db_err};

/// SeaORM category repository.
pub type SeaCategoryRepository = SeaBaseRepository<CategoryEntity>;

/// SeaORM post repository.
pub type SeaPostRepository = SeaBaseRepository<PostEntity>;

/// SeaORM comment repository.
pub type SeaCommentRepository = SeaBaseRepository<CommentEntity>;

#[async_trait]
impl CategoryRepository for SeaCategoryRepository {
    async fn find_all(&self) -> Result<Vec<Category>, RepoError> {
        let result = CategoryEntity::find()
            .order_by_asc(category::Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, input: CategoryInput) -> Result<Category, RepoError> {
        let model = category::ActiveModel::from(input)
            .insert(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.into())
    }

    async fn update(&self, category: Category) -> Result<Category, RepoError> {
        let model = category::ActiveModel::from(category)
            .update(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.into())
    }
}

/// Join a post row with the category SeaORM loaded alongside it.
fn with_category(
    (post, category): (post::Model, Option<category::Model>),
) -> Result<PostWithCategory, RepoError> {
    let category = category.ok_or_else(|| {
        RepoError::Constraint(format!(
            "post {} references missing category {}",
            post.id, post.category_id
        ))
    })?;

    Ok(PostWithCategory {
        post: post.into(),
        category: category.into(),
    })
}

fn sort_column(field: PostSortField) -> post::Column {
    match field {
        PostSortField::Id => post::Column::Id,
        PostSortField::Title => post::Column::Title,
        PostSortField::Author => post::Column::Author,
        PostSortField::CreatedAt => post::Column::CreatedAt,
        PostSortField::UpdatedAt => post::Column::UpdatedAt,
    }
}

fn sort_order(direction: SortDirection) -> Order {
    match direction {
        SortDirection::Asc => Order::Asc,
        SortDirection::Desc => Order::Desc,
    }
}

#[async_trait]
impl PostRepository for SeaPostRepository {
    async fn find_with_category(&self, id: i64) -> Result<Option<PostWithCategory>, RepoError> {
        let row = PostEntity::find_by_id(id)
            .find_also_related(CategoryEntity)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        row.map(with_category).transpose()
    }

    async fn find_page(
        &self,
        request: &PageRequest,
    ) -> Result<(u64, Vec<PostWithCategory>), RepoError> {
        tracing::debug!(
            page = request.page,
            size = request.size,
            sort = %request.sort.field,
            "Loading page of posts"
        );

        let total = PostEntity::find()
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        let rows = PostEntity::find()
            .find_also_related(CategoryEntity)
            .order_by(sort_column(request.sort.field), sort_order(request.sort.direction))
            .order_by(post::Column::Id, sort_order(request.sort.direction))
            .offset(request.offset())
            .limit(request.size)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let items = rows
            .into_iter()
            .map(with_category)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((total, items))
    }

    async fn find_by_category_id(
        &self,
        category_id: i64,
    ) -> Result<Vec<PostWithCategory>, RepoError> {
        let rows = PostEntity::find()
            .filter(post::Column::CategoryId.eq(category_id))
            .find_also_related(CategoryEntity)
            .order_by_asc(post::Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        rows.into_iter().map(with_category).collect()
    }

    async fn insert(&self, post: NewPost) -> Result<Post, RepoError> {
        let model = post::ActiveModel::from(post)
            .insert(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.into())
    }

    async fn update(&self, post: Post) -> Result<Post, RepoError> {
        let model = post::ActiveModel::from(post)
            .update(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.into())
    }
}

#[async_trait]
impl CommentRepository for SeaCommentRepository {
    async fn find_by_post_id(&self, post_id: i64) -> Result<Vec<Comment>, RepoError> {
        let result = CommentEntity::find()
            .filter(comment::Column::PostId.eq(post_id))
            .order_by_asc(comment::Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, comment: NewComment) -> Result<Comment, RepoError> {
        let model = comment::ActiveModel::from(comment)
            .insert(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.into())
    }

    async fn update(&self, comment: Comment) -> Result<Comment, RepoError> {
        let model = comment::ActiveModel::from(comment)
            .update(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.into())
    }
}
