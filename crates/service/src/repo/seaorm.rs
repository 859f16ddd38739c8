use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use models::book::{self, BookDraft};
use models::stock::{self, StockDraft};

use crate::errors::ServiceError;
use crate::repository::CrudRepository;

/// `books` table.
pub struct SeaOrmBookRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmBookRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait::async_trait]
impl CrudRepository for SeaOrmBookRepository {
    type Record = book::Model;

    async fn insert(&self, draft: BookDraft) -> Result<book::Model, ServiceError> {
        Ok(draft.into_active_model().insert(&self.db).await?)
    }

    async fn find(&self, id: &i32) -> Result<Option<book::Model>, ServiceError> {
        Ok(book::Entity::find_by_id(*id).one(&self.db).await?)
    }

    async fn list(&self) -> Result<Vec<book::Model>, ServiceError> {
        Ok(book::Entity::find().order_by_asc(book::Column::Id).all(&self.db).await?)
    }

    async fn replace(&self, id: &i32, draft: BookDraft) -> Result<u64, ServiceError> {
        let res = book::Entity::update_many()
            .col_expr(book::Column::Name, Expr::value(draft.name))
            .col_expr(book::Column::Author, Expr::value(draft.author))
            .col_expr(book::Column::Publication, Expr::value(draft.publication))
            .filter(book::Column::Id.eq(*id))
            .exec(&self.db)
            .await?;
        Ok(res.rows_affected)
    }

    async fn delete(&self, id: &i32) -> Result<u64, ServiceError> {
        Ok(book::Entity::delete_by_id(*id).exec(&self.db).await?.rows_affected)
    }
}

/// `stocks` table.
pub struct SeaOrmStockRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmStockRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait::async_trait]
impl CrudRepository for SeaOrmStockRepository {
    type Record = stock::Model;

    async fn insert(&self, draft: StockDraft) -> Result<stock::Model, ServiceError> {
        Ok(draft.into_active_model().insert(&self.db).await?)
    }

    async fn find(&self, id: &i32) -> Result<Option<stock::Model>, ServiceError> {
        Ok(stock::Entity::find_by_id(*id).one(&self.db).await?)
    }

    async fn list(&self) -> Result<Vec<stock::Model>, ServiceError> {
        Ok(stock::Entity::find().order_by_asc(stock::Column::Id).all(&self.db).await?)
    }

    async fn replace(&self, id: &i32, draft: StockDraft) -> Result<u64, ServiceError> {
        let res = stock::Entity::update_many()
            .col_expr(stock::Column::Name, Expr::value(draft.name))
            .col_expr(stock::Column::Price, Expr::value(draft.price))
            .col_expr(stock::Column::Company, Expr::value(draft.company))
            .filter(stock::Column::Id.eq(*id))
            .exec(&self.db)
            .await?;
        Ok(res.rows_affected)
    }

    async fn delete(&self, id: &i32) -> Result<u64, ServiceError> {
        Ok(stock::Entity::delete_by_id(*id).exec(&self.db).await?.rows_affected)
    }
}
