use mongodb::bson::{doc, oid::ObjectId, Document};
use serde::{Deserialize, Serialize};

use crate::{mongo::DocumentRecord, resource::Resource, DocumentId};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: DocumentId,
    pub name: String,
    pub gender: String,
    pub age: i32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<DocumentId>,
    pub name: String,
    pub gender: String,
    pub age: i32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UserDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub gender: String,
    pub age: i32,
}

impl Resource for User {
    type Id = DocumentId;
    type Draft = UserDraft;
    const KIND: &'static str = "user";

    fn id(&self) -> &DocumentId { &self.id }

    fn draft_id(draft: &UserDraft) -> Option<&DocumentId> { draft.id.as_ref() }

    fn from_draft(id: DocumentId, draft: UserDraft) -> Self {
        Self { id, name: draft.name, gender: draft.gender, age: draft.age }
    }
}

impl DocumentRecord for User {
    type Document = UserDocument;
    const COLLECTION: &'static str = "users";

    fn to_document(id: ObjectId, draft: &UserDraft) -> UserDocument {
        UserDocument { id, name: draft.name.clone(), gender: draft.gender.clone(), age: draft.age }
    }

    fn from_document(doc: UserDocument) -> Self {
        Self { id: doc.id.into(), name: doc.name, gender: doc.gender, age: doc.age }
    }

    fn replacement(draft: &UserDraft) -> Document {
        doc! { "name": draft.name.clone(), "gender": draft.gender.clone(), "age": draft.age }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson;

    #[test]
    fn document_round_trips_through_bson_with_underscore_id() {
        let oid = ObjectId::new();
        let draft = UserDraft { id: None, name: "Ada".into(), gender: "female".into(), age: 36 };
        let stored = bson::to_document(&User::to_document(oid, &draft)).unwrap();
        assert_eq!(stored.get_object_id("_id").unwrap(), oid);
        assert_eq!(stored.get_i32("age").unwrap(), 36);

        let user = User::from_document(bson::from_document(stored).unwrap());
        assert_eq!(user.id.object_id(), oid);
        assert_eq!(user.name, "Ada");
    }

    #[test]
    fn replacement_sets_every_scalar_field_but_not_the_id() {
        let draft = UserDraft { id: Some(DocumentId::new()), name: "Ada".into(), gender: "female".into(), age: 37 };
        let set = User::replacement(&draft);
        assert_eq!(set, doc! { "name": "Ada", "gender": "female", "age": 37 });
        assert!(!set.contains_key("_id"));
    }

    #[test]
    fn json_uses_hex_id() {
        let user = User::from_draft(DocumentId::new(), UserDraft { id: None, name: "Bo".into(), gender: "m".into(), age: 20 });
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["id"], serde_json::Value::String(user.id.to_string()));
    }
}
