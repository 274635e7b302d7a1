//! Shared test fixtures: sample collections and a programmable stub gateway.
#![allow(dead_code)]

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use feedstore::{
    Address, Comment, Company, Gateway, GatewayError, Geo, Post, PostDraft, User,
};

pub fn user(id: u64, name: &str) -> User {
    User {
        id,
        name: name.to_string(),
        username: name.to_lowercase(),
        email: format!("{}@example.com", name.to_lowercase()),
        address: Address {
            street: "Kulas Light".to_string(),
            suite: "Apt. 556".to_string(),
            city: "Gwenborough".to_string(),
            zipcode: "92998-3874".to_string(),
            geo: Geo {
                lat: "-37.3159".to_string(),
                lng: "81.1496".to_string(),
            },
        },
        phone: "1-770-736-8031".to_string(),
        website: "hildegard.org".to_string(),
        company: Company {
            name: "Romaguera-Crona".to_string(),
            catch_phrase: "Multi-layered client-server neural-net".to_string(),
            bs: "harness real-time e-markets".to_string(),
        },
    }
}

pub fn post(id: u64, user_id: u64) -> Post {
    PostDraft::new(format!("title {id}"), format!("body {id}"), user_id).with_id(id)
}

pub fn comment(id: u64, post_id: u64) -> Comment {
    Comment {
        id,
        post_id,
        name: format!("comment {id}"),
        email: "commenter@example.com".to_string(),
        body: "well said".to_string(),
    }
}

fn stub_failure(endpoint: &str) -> GatewayError {
    GatewayError::Status {
        status: 500,
        url: format!("stub:{endpoint}"),
    }
}

/// Programmable in-memory gateway. Builder-style setup: seed collections,
/// mark endpoints as failing, optionally delay `create_post` to widen race
/// windows. Records every call it receives.
#[derive(Default)]
pub struct StubGateway {
    users: Vec<User>,
    posts: Vec<Post>,
    comments: Vec<Comment>,
    fail_users: bool,
    fail_posts: bool,
    fail_comments: bool,
    fail_create: bool,
    fail_delete: bool,
    create_delay: Option<Duration>,
    calls: Mutex<Vec<String>>,
}

impl StubGateway {
    pub fn new() -> Self {
        StubGateway::default()
    }

    pub fn users(mut self, users: Vec<User>) -> Self {
        self.users = users;
        self
    }

    pub fn posts(mut self, posts: Vec<Post>) -> Self {
        self.posts = posts;
        self
    }

    pub fn comments(mut self, comments: Vec<Comment>) -> Self {
        self.comments = comments;
        self
    }

    pub fn fail_users(mut self) -> Self {
        self.fail_users = true;
        self
    }

    pub fn fail_posts(mut self) -> Self {
        self.fail_posts = true;
        self
    }

    pub fn fail_comments(mut self) -> Self {
        self.fail_comments = true;
        self
    }

    pub fn fail_create(mut self) -> Self {
        self.fail_create = true;
        self
    }

    pub fn fail_delete(mut self) -> Self {
        self.fail_delete = true;
        self
    }

    pub fn create_delay(mut self, delay: Duration) -> Self {
        self.create_delay = Some(delay);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl Gateway for StubGateway {
    async fn fetch_users(&self) -> Result<Vec<User>, GatewayError> {
        self.record("GET users".to_string());
        if self.fail_users {
            return Err(stub_failure("users"));
        }
        Ok(self.users.clone())
    }

    async fn fetch_posts(&self) -> Result<Vec<Post>, GatewayError> {
        self.record("GET posts".to_string());
        if self.fail_posts {
            return Err(stub_failure("posts"));
        }
        Ok(self.posts.clone())
    }

    async fn fetch_comments(&self) -> Result<Vec<Comment>, GatewayError> {
        self.record("GET comments".to_string());
        if self.fail_comments {
            return Err(stub_failure("comments"));
        }
        Ok(self.comments.clone())
    }

    async fn create_post(&self, draft: &PostDraft) -> Result<(), GatewayError> {
        self.record(format!("POST posts userId={}", draft.user_id));
        if let Some(delay) = self.create_delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail_create {
            return Err(stub_failure("posts"));
        }
        Ok(())
    }

    async fn delete_post(&self, post_id: u64) -> Result<(), GatewayError> {
        self.record(format!("DELETE posts/{post_id}"));
        if self.fail_delete {
            return Err(stub_failure("posts"));
        }
        Ok(())
    }
}
