//! Wire DTOs for the REST backend boundary.
//!
//! DESIGN
//! ======
//! Only the shapes this console depends on are typed strictly. The cached
//! user profile keeps unknown fields in `extra` so a round-trip through
//! storage does not drop data the backend sent.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::state::session::is_usable_token;

/// Authenticated console user as returned by the sign-in endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Backend identifier. Accepts JSON strings or integers.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Role label assigned by the backend (e.g. `"admin"`).
    #[serde(default)]
    pub user_type: Option<String>,
    /// Remaining profile fields, preserved verbatim.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl User {
    /// Minimal user with only an identifier and email.
    pub fn new(id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            first_name: None,
            last_name: None,
            email: Some(email.into()),
            user_type: None,
            extra: BTreeMap::new(),
        }
    }

    /// Full name when known, else email, else the identifier.
    pub fn display_name(&self) -> String {
        let full = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if !full.is_empty() {
            return full;
        }
        self.email.clone().unwrap_or_else(|| self.id.clone())
    }
}

/// Body for `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Successful sign-in payload.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SignInResponse {
    #[serde(alias = "access_token", deserialize_with = "deserialize_token")]
    pub token: String,
    pub user: User,
}

/// Body for `POST /auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignUpRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Body for `POST /auth/password-reset`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PasswordResetRequest {
    pub email: String,
}

/// Generic acknowledgement body (`{"message": "..."}`), tolerant of extra fields.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: Option<String>,
}

/// Content entities managed by the console.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Resource {
    News,
    Blogs,
    Testimonials,
    Alumni,
    Teams,
    Faqs,
    Subjects,
    ExamRoutines,
}

impl Resource {
    pub const ALL: [Resource; 8] = [
        Self::News,
        Self::Blogs,
        Self::Testimonials,
        Self::Alumni,
        Self::Teams,
        Self::Faqs,
        Self::Subjects,
        Self::ExamRoutines,
    ];

    /// URL slug shared by the console route and the API collection.
    pub fn slug(self) -> &'static str {
        match self {
            Self::News => "news",
            Self::Blogs => "blogs",
            Self::Testimonials => "testimonials",
            Self::Alumni => "alumni",
            Self::Teams => "teams",
            Self::Faqs => "faqs",
            Self::Subjects => "subjects",
            Self::ExamRoutines => "exam-routines",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::News => "News",
            Self::Blogs => "Blogs",
            Self::Testimonials => "Testimonials",
            Self::Alumni => "Alumni",
            Self::Teams => "Teams",
            Self::Faqs => "FAQs",
            Self::Subjects => "Subjects",
            Self::ExamRoutines => "Exam Routines",
        }
    }

    /// API collection endpoint, relative to the base URL.
    pub fn endpoint(self) -> String {
        format!("/{}", self.slug())
    }

    /// Console route for the resource list screen.
    pub fn route(self) -> String {
        format!("/{}", self.slug())
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.slug() == slug)
    }
}

/// List envelope returned by collection endpoints (`{"data": [...]}`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    #[serde(default)]
    pub data: Vec<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    /// Page size, when the backend reports it.
    #[serde(default, alias = "limit", skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u64>,
}

impl Listing {
    /// Best-effort human title for a listed item.
    pub fn item_title(item: &serde_json::Value) -> String {
        ["title", "name", "question", "subject_name"]
            .iter()
            .find_map(|key| item.get(*key).and_then(serde_json::Value::as_str))
            .map_or_else(|| item.get("id").map_or_else(|| "untitled".to_owned(), ToString::to_string), str::to_owned)
    }
}

fn deserialize_token<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let token = String::deserialize(deserializer)?;
    if is_usable_token(&token) { Ok(token) } else { Err(D::Error::custom("blank token")) }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) if n.is_i64() || n.is_u64() => Ok(n.to_string()),
        _ => Err(D::Error::custom("expected string or integer id")),
    }
}
