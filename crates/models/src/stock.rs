use sea_orm::{entity::prelude::*, NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::resource::Resource;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "stocks")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "stockid")]
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub company: String,
}

pub type Stock = Model;

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StockDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub name: String,
    pub price: f64,
    pub company: String,
}

impl StockDraft {
    pub fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id: NotSet,
            name: Set(self.name),
            price: Set(self.price),
            company: Set(self.company),
        }
    }
}

impl Resource for Model {
    type Id = i32;
    type Draft = StockDraft;
    const KIND: &'static str = "stock";

    fn id(&self) -> &i32 { &self.id }

    fn draft_id(draft: &StockDraft) -> Option<&i32> { draft.id.as_ref() }

    fn from_draft(id: i32, draft: StockDraft) -> Self {
        Self { id, name: draft.name, price: draft.price, company: draft.company }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::Iterable;

    #[test]
    fn draft_accepts_body_without_id() {
        let draft: StockDraft = serde_json::from_str(r#"{"name":"Widget","price":9.99,"company":"Acme"}"#).unwrap();
        assert_eq!(draft.id, None);
        let stock = Stock::from_draft(5, draft);
        assert_eq!(stock.id, 5);
        assert_eq!(stock.price, 9.99);
    }

    #[test]
    fn stock_has_no_relations() {
        assert_eq!(Relation::iter().count(), 0);
    }

    #[test]
    fn draft_requires_every_field() {
        assert!(serde_json::from_str::<StockDraft>(r#"{"name":"Widget","company":"Acme"}"#).is_err());
    }
}
