//! Data model for the three remote collections.
//!
//! Field names follow the remote service's JSON exactly; the mixed-case
//! wire names (`userId`, `postId`, `catchPhrase`) are mapped via serde
//! renames so Rust code stays snake_case.

use serde::{Deserialize, Serialize};

/// Geographic coordinates as the service reports them (string-encoded).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Geo {
    pub lat: String,
    pub lng: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
    pub geo: Geo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    pub catch_phrase: String,
    pub bs: String,
}

/// A user account. Read-only from the store's perspective.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub address: Address,
    pub phone: String,
    pub website: String,
    pub company: Company,
}

/// A post authored by a user. Created and deleted through actions.
///
/// `user_id` should reference an existing `User`, but the store does not
/// enforce referential integrity; consumers treat a dangling reference as
/// "not found" (see [`crate::select`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub body: String,
    pub user_id: u64,
}

/// A post without an id yet — the create payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDraft {
    pub title: String,
    pub body: String,
    pub user_id: u64,
}

impl PostDraft {
    pub fn new(title: impl Into<String>, body: impl Into<String>, user_id: u64) -> Self {
        PostDraft {
            title: title.into(),
            body: body.into(),
            user_id,
        }
    }

    /// Promote the draft to a full `Post` under a locally assigned id.
    pub fn with_id(self, id: u64) -> Post {
        Post {
            id,
            title: self.title,
            body: self.body,
            user_id: self.user_id,
        }
    }
}

/// A comment on a post. Read-only from the store's perspective.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: u64,
    pub post_id: u64,
    pub name: String,
    pub email: String,
    pub body: String,
}
