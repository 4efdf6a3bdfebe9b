//! Named-operation dispatch over JSON requests.
//!
//! A request is `{ "operation": "<name>", "arguments": { ... } }`; a missing
//! `arguments` member means "no arguments". The response envelope is
//! `{ "data": <payload or null>, "errors": [<fault>...] }`, where `errors`
//! only ever carries request-level faults.

use crate::api::BlogApi;
use crate::error::{ApiError, ApiFault, ApiResult};
use crate::types::{
    AllCommentsInput, AllPostsInput, CreateAuthorInput, CreateCommentInput, CreatePostInput,
    IdInput, UpdateAuthorInput, UpdatePostInput,
};
use inkwell_core::Caller;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Instant;

/// Every operation exposed by the surface.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "operation", content = "arguments", rename_all = "camelCase")]
pub enum ApiRequest {
    AllPosts(AllPostsInput),
    Post(IdInput),
    AllComments(AllCommentsInput),
    CreateAuthor(CreateAuthorInput),
    UpdateAuthor(UpdateAuthorInput),
    CreatePost(CreatePostInput),
    UpdatePost(UpdatePostInput),
    DeletePost(IdInput),
    CreateComment(CreateCommentInput),
}

impl ApiRequest {
    /// Parses a JSON request body.
    pub fn from_json(body: &str) -> ApiResult<Self> {
        let mut value: Value = serde_json::from_str(body)?;
        if let Value::Object(fields) = &mut value {
            fields
                .entry("arguments")
                .or_insert_with(|| Value::Object(Default::default()));
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Wire name of the operation, used in logs.
    pub fn operation(&self) -> &'static str {
        match self {
            Self::AllPosts(_) => "allPosts",
            Self::Post(_) => "post",
            Self::AllComments(_) => "allComments",
            Self::CreateAuthor(_) => "createAuthor",
            Self::UpdateAuthor(_) => "updateAuthor",
            Self::CreatePost(_) => "createPost",
            Self::UpdatePost(_) => "updatePost",
            Self::DeletePost(_) => "deletePost",
            Self::CreateComment(_) => "createComment",
        }
    }

    pub fn is_mutation(&self) -> bool {
        !matches!(
            self,
            Self::AllPosts(_) | Self::Post(_) | Self::AllComments(_)
        )
    }
}

/// Response envelope returned to transport callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse {
    pub data: Option<Value>,
    pub errors: Vec<ApiFault>,
}

impl ApiResponse {
    fn from_result(result: ApiResult<Value>) -> Self {
        match result {
            Ok(data) => Self {
                data: Some(data),
                errors: Vec::new(),
            },
            Err(err) => Self {
                data: None,
                errors: vec![ApiFault::from(&err)],
            },
        }
    }

    pub fn is_fault(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn to_json_string(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|err| internal_fault_json(&format!("failed to encode response: {err}")))
    }
}

fn internal_fault_json(message: &str) -> String {
    json!({
        "data": null,
        "errors": [{ "code": "INTERNAL", "message": message }],
    })
    .to_string()
}

impl BlogApi<'_> {
    /// Executes one parsed request and serializes its payload.
    pub fn execute(&self, caller: Caller, request: ApiRequest) -> ApiResult<Value> {
        let operation = request.operation();
        let kind = if request.is_mutation() {
            "mutation"
        } else {
            "query"
        };
        let started_at = Instant::now();
        let result = self.dispatch(caller, request);

        match &result {
            Ok(_) => info!(
                "event=api_request module=api status=ok operation={operation} kind={kind} authenticated={} duration_ms={}",
                caller.is_authenticated(),
                started_at.elapsed().as_millis()
            ),
            Err(err) => warn!(
                "event=api_request module=api status=error operation={operation} kind={kind} authenticated={} duration_ms={} error_code={}",
                caller.is_authenticated(),
                started_at.elapsed().as_millis(),
                err.code()
            ),
        }
        result
    }

    /// Parses, executes, and wraps a JSON request. Never panics.
    pub fn handle_json(&self, caller: Caller, body: &str) -> ApiResponse {
        ApiResponse::from_result(
            ApiRequest::from_json(body).and_then(|request| self.execute(caller, request)),
        )
    }

    fn dispatch(&self, caller: Caller, request: ApiRequest) -> ApiResult<Value> {
        let value = match request {
            ApiRequest::AllPosts(filter) => serde_json::to_value(self.all_posts(filter)?),
            ApiRequest::Post(input) => serde_json::to_value(self.post(input.id)?),
            ApiRequest::AllComments(input) => {
                serde_json::to_value(self.all_comments(input.post_id)?)
            }
            ApiRequest::CreateAuthor(input) => {
                serde_json::to_value(self.create_author(caller, input)?)
            }
            ApiRequest::UpdateAuthor(input) => {
                serde_json::to_value(self.update_author(caller, input)?)
            }
            ApiRequest::CreatePost(input) => serde_json::to_value(self.create_post(caller, input)?),
            ApiRequest::UpdatePost(input) => serde_json::to_value(self.update_post(caller, input)?),
            ApiRequest::DeletePost(input) => {
                serde_json::to_value(self.delete_post(caller, input.id)?)
            }
            ApiRequest::CreateComment(input) => {
                serde_json::to_value(self.create_comment(caller, input)?)
            }
        };
        value.map_err(|err| ApiError::Internal(format!("failed to serialize response: {err}")))
    }
}
