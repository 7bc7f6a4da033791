//! Wire types for the Notion REST API.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{ExternalRecord, Submission};

/// Body of `POST /databases/{id}/query`.
#[derive(Debug, Clone, Serialize)]
pub struct QueryRequest {
    pub sorts: Vec<Sort>,
}

impl QueryRequest {
    /// Query sorted ascending by the `name` property.
    pub fn by_name() -> Self {
        Self {
            sorts: vec![Sort {
                property: "name".to_string(),
                direction: SortDirection::Ascending,
            }],
        }
    }
}

/// A single sort directive.
#[derive(Debug, Clone, Serialize)]
pub struct Sort {
    pub property: String,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
}

/// Response of a database query.
///
/// Individual results stay untyped; see [`ExternalRecord`].
#[derive(Debug, Clone, Deserialize)]
pub struct QueryResponse {
    pub results: Vec<ExternalRecord>,
    #[serde(default)]
    pub has_more: bool,
}

/// Body of `POST /pages`.
#[derive(Debug, Clone, Serialize)]
pub struct CreatePageRequest {
    pub parent: Parent,
    pub properties: SubmissionProperties,
}

impl CreatePageRequest {
    /// Builds the page creation body for `submission` under `database_id`.
    pub fn for_submission(database_id: &str, submission: &Submission) -> Self {
        Self {
            parent: Parent {
                database_id: database_id.to_string(),
            },
            properties: SubmissionProperties {
                email: TitleProperty {
                    title: vec![RichText::plain(&submission.email)],
                },
                link: RichTextProperty {
                    rich_text: vec![RichText::plain(&submission.link)],
                },
                twitter: RichTextProperty {
                    rich_text: submission
                        .twitter
                        .as_deref()
                        .map(RichText::plain)
                        .into_iter()
                        .collect(),
                },
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Parent {
    pub database_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmissionProperties {
    pub email: TitleProperty,
    pub link: RichTextProperty,
    pub twitter: RichTextProperty,
}

#[derive(Debug, Clone, Serialize)]
pub struct TitleProperty {
    pub title: Vec<RichText>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RichTextProperty {
    pub rich_text: Vec<RichText>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RichText {
    pub text: TextContent,
}

impl RichText {
    pub fn plain(content: &str) -> Self {
        Self {
            text: TextContent {
                content: content.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TextContent {
    pub content: String,
}
