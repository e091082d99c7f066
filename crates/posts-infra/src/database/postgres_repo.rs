//! PostgreSQL repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, SqlErr,
};

use posts_core::domain::{NewPost, Post};
use posts_core::error::RepoError;
use posts_core::ports::PostRepository;

use super::entity::post::{self, ActiveModel, Entity as PostEntity};

/// PostgreSQL post repository.
pub struct PostgresPostRepository {
    db: DbConn,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

fn query_error(e: DbErr) -> RepoError {
    match e {
        DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => RepoError::NotFound,
        DbErr::Conn(err) => RepoError::Connection(err.to_string()),
        DbErr::ConnectionAcquire(err) => RepoError::Connection(err.to_string()),
        other => match other.sql_err() {
            Some(
                SqlErr::UniqueConstraintViolation(_) | SqlErr::ForeignKeyConstraintViolation(_),
            ) => RepoError::Constraint(other.to_string()),
            _ => RepoError::Query(other.to_string()),
        },
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn create(&self, post: NewPost) -> Result<Post, RepoError> {
        let model = ActiveModel::from(post)
            .insert(&self.db)
            .await
            .map_err(query_error)?;

        tracing::debug!(post_id = model.id, author_id = model.author_id, "Post inserted");
        Ok(model.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
        let result = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.map(Into::into))
    }

    async fn list_all(&self) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .order_by_asc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn list_by_author(&self, author_id: i64) -> Result<Vec<Post>, RepoError> {
        let result = PostEntity::find()
            .filter(post::Column::AuthorId.eq(author_id))
            .order_by_asc(post::Column::Id)
            .all(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn update(&self, post: Post) -> Result<Post, RepoError> {
        let model = ActiveModel::from(post)
            .update(&self.db)
            .await
            .map_err(query_error)?;

        Ok(model.into())
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        let result = PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(query_error)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        PostEntity::find()
            .count(&self.db)
            .await
            .map_err(query_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_errors_map_to_not_found() {
        assert!(matches!(
            query_error(DbErr::RecordNotFound("post".into())),
            RepoError::NotFound
        ));
        assert!(matches!(
            query_error(DbErr::RecordNotUpdated),
            RepoError::NotFound
        ));
    }

    #[test]
    fn test_message_text_does_not_make_a_constraint_error() {
        let err = query_error(DbErr::Custom(
            "column \"unique_views\" does not exist".into(),
        ));
        assert!(matches!(err, RepoError::Query(_)), "got {err:?}");

        let err = query_error(DbErr::Custom("duplicate key value".into()));
        assert!(matches!(err, RepoError::Query(_)), "got {err:?}");
    }
}
