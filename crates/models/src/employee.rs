use mongodb::bson::{doc, oid::ObjectId, Document};
use serde::{Deserialize, Serialize};

use crate::{mongo::DocumentRecord, resource::Resource, DocumentId};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: DocumentId,
    pub name: String,
    pub salary: f64,
    pub age: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EmployeeDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<DocumentId>,
    pub name: String,
    pub salary: f64,
    pub age: f64,
}

/// Stored form in the `employees` collection.
#[derive(Debug, Serialize, Deserialize)]
pub struct EmployeeDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    pub salary: f64,
    pub age: f64,
}

impl Resource for Employee {
    type Id = DocumentId;
    type Draft = EmployeeDraft;
    const KIND: &'static str = "employee";

    fn id(&self) -> &DocumentId { &self.id }

    fn draft_id(draft: &EmployeeDraft) -> Option<&DocumentId> { draft.id.as_ref() }

    fn from_draft(id: DocumentId, draft: EmployeeDraft) -> Self {
        Self { id, name: draft.name, salary: draft.salary, age: draft.age }
    }
}

impl DocumentRecord for Employee {
    type Document = EmployeeDocument;
    const COLLECTION: &'static str = "employees";

    fn to_document(id: ObjectId, draft: &EmployeeDraft) -> EmployeeDocument {
        EmployeeDocument { id, name: draft.name.clone(), salary: draft.salary, age: draft.age }
    }

    fn from_document(doc: EmployeeDocument) -> Self {
        Self { id: doc.id.into(), name: doc.name, salary: doc.salary, age: doc.age }
    }

    fn replacement(draft: &EmployeeDraft) -> Document {
        doc! { "name": draft.name.clone(), "salary": draft.salary, "age": draft.age }
    }
}
