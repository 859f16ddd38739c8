use sea_orm::{entity::prelude::*, NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::resource::Resource;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "books")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub author: String,
    pub publication: String,
}

pub type Book = Model;

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Request body for creating or replacing a book.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BookDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub name: String,
    pub author: String,
    pub publication: String,
}

impl BookDraft {
    /// Insertable form; the key is left for the database to assign.
    pub fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id: NotSet,
            name: Set(self.name),
            author: Set(self.author),
            publication: Set(self.publication),
        }
    }
}

impl Resource for Model {
    type Id = i32;
    type Draft = BookDraft;
    const KIND: &'static str = "book";

    fn id(&self) -> &i32 { &self.id }

    fn draft_id(draft: &BookDraft) -> Option<&i32> { draft.id.as_ref() }

    fn from_draft(id: i32, draft: BookDraft) -> Self {
        Self { id, name: draft.name, author: draft.author, publication: draft.publication }
    }
}
