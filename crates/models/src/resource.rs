//! The shape every CRUD record shares.
//!
//! A record is a flat value with a store-assigned identifier. Clients send a
//! *draft* (the scalar fields, optionally echoing an id) and get records back.

use std::fmt;

use serde::{de::DeserializeOwned, Serialize};

/// Identifier of a record, parsed from a URL path segment.
pub trait RecordId:
    Clone + PartialEq + fmt::Display + fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Parse a path segment. The error is a human readable reason.
    fn parse(raw: &str) -> Result<Self, String>;

    /// Allocate a fresh id for stores that do not assign one themselves.
    /// `seq` is a 1-based counter kept by the caller.
    fn mint(seq: u64) -> Self;
}

impl RecordId for i32 {
    fn parse(raw: &str) -> Result<Self, String> {
        raw.parse::<i32>()
            .map_err(|e| format!("'{raw}' is not a numeric id: {e}"))
    }

    fn mint(seq: u64) -> Self {
        i32::try_from(seq).unwrap_or(i32::MAX)
    }
}

pub trait Resource: Serialize + Clone + fmt::Debug + Send + Sync + 'static {
    type Id: RecordId;
    type Draft: Serialize + DeserializeOwned + Clone + fmt::Debug + Send + Sync + 'static;

    /// Lowercase singular name used in messages and logs.
    const KIND: &'static str;

    fn id(&self) -> &Self::Id;

    /// The id a client put in the body, if any.
    fn draft_id(draft: &Self::Draft) -> Option<&Self::Id>;

    /// Build the stored form of `draft` under `id`. The draft's own id is ignored.
    fn from_draft(id: Self::Id, draft: Self::Draft) -> Self;
}

pub type IdOf<R> = <R as Resource>::Id;
pub type DraftOf<R> = <R as Resource>::Draft;
