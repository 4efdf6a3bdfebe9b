//! Query and mutation resolvers.
//!
//! # Responsibility
//! - Run the authorization check for each mutation, then call the service.
//! - Convert service outcomes into `{ entity, errors }` payloads.
//!
//! # Invariants
//! - Authorization failures are returned as `Err(ApiError)` and abort the
//!   request before any store mutation.
//! - Validation failures are returned as `Ok(payload)` with a non-empty
//!   `errors` list and a null entity.
//! - Reads require no authentication.

use crate::error::{in_band_message, ApiError, ApiResult};
use crate::types::{
    AllPostsInput, AuthorPayload, CommentNode, CommentPayload, CreateAuthorInput,
    CreateCommentInput, CreatePostInput, DeletePayload, PostNode, PostPayload, UpdateAuthorInput,
    UpdatePostInput,
};
use inkwell_core::auth::{require_author_owner, require_authenticated, require_post_owner};
use inkwell_core::{
    AuthorPatch, AuthorRepository, AuthorService, Caller, CommentService, NewAuthor, NewPost, Post,
    PostId, PostPatch, PostService, ServiceError, SqliteAuthorRepository,
    SqliteCommentRepository, SqlitePostRepository,
};
use rusqlite::Connection;

/// Resolver set bound to one migrated connection.
pub struct BlogApi<'conn> {
    conn: &'conn Connection,
}

impl<'conn> BlogApi<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Lists posts matching every provided filter, ordered by id.
    pub fn all_posts(&self, filter: AllPostsInput) -> ApiResult<Vec<PostNode>> {
        let posts = self.posts()?.list_posts(filter.into())?;
        let authors = self.author_repo()?;
        posts
            .into_iter()
            .map(|post| post_node(&authors, post))
            .collect()
    }

    /// Looks up one post; a missing post is a request-level `NotFound`.
    pub fn post(&self, id: PostId) -> ApiResult<PostNode> {
        match self.posts()?.get_post(id) {
            Ok(post) => post_node(&self.author_repo()?, post),
            Err(err @ ServiceError::PostNotFound(_)) => Err(ApiError::NotFound(err.to_string())),
            Err(err) => Err(ApiError::Internal(err.to_string())),
        }
    }

    /// Lists comments of a post; unknown posts yield an empty list.
    pub fn all_comments(&self, post_id: PostId) -> ApiResult<Vec<CommentNode>> {
        let comments = self.comments()?.list_comments(post_id)?;
        Ok(comments.into_iter().map(CommentNode::from).collect())
    }

    /// Creates an author owned by the calling user.
    pub fn create_author(
        &self,
        caller: Caller,
        input: CreateAuthorInput,
    ) -> ApiResult<AuthorPayload> {
        let user_id = require_authenticated(caller, "create an author")?;
        let created = self.authors()?.create_author(NewAuthor {
            name: input.name,
            email: input.email,
            bio: input.bio,
            user_id: Some(user_id),
        });

        Ok(match created {
            Ok(author) => AuthorPayload {
                author: Some(author.into()),
                errors: Vec::new(),
            },
            Err(err) => AuthorPayload {
                author: None,
                errors: vec![in_band_message(err)?],
            },
        })
    }

    pub fn update_author(
        &self,
        caller: Caller,
        input: UpdateAuthorInput,
    ) -> ApiResult<AuthorPayload> {
        require_authenticated(caller, "update an author")?;
        let updated = self.authors()?.update_author(
            input.id,
            AuthorPatch {
                name: input.name,
                email: input.email,
                bio: input.bio,
            },
        );

        Ok(match updated {
            Ok(author) => AuthorPayload {
                author: Some(author.into()),
                errors: Vec::new(),
            },
            Err(err) => AuthorPayload {
                author: None,
                errors: vec![in_band_message(err)?],
            },
        })
    }

    /// Creates a post; the caller must own the target author.
    pub fn create_post(&self, caller: Caller, input: CreatePostInput) -> ApiResult<PostPayload> {
        let authors = self.author_repo()?;
        require_author_owner(
            caller,
            &authors,
            input.author_id,
            "create posts for this author",
        )?;

        let created = self.posts()?.create_post(NewPost {
            title: input.title,
            content: input.content,
            author_id: input.author_id,
        });
        self.post_payload(&authors, created)
    }

    /// Updates a post; the caller must own the post's author.
    pub fn update_post(&self, caller: Caller, input: UpdatePostInput) -> ApiResult<PostPayload> {
        let posts = self.post_repo()?;
        require_post_owner(caller, &posts, input.id, "update this post")?;

        let updated = PostService::new(posts).update_post(
            input.id,
            PostPatch {
                title: input.title,
                content: input.content,
            },
        );
        self.post_payload(&self.author_repo()?, updated)
    }

    /// Deletes a post and its comments; the caller must own the post's author.
    pub fn delete_post(&self, caller: Caller, id: PostId) -> ApiResult<DeletePayload> {
        let posts = self.post_repo()?;
        require_post_owner(caller, &posts, id, "delete this post")?;

        Ok(match PostService::new(posts).delete_post(id) {
            Ok(success) => DeletePayload {
                success,
                errors: Vec::new(),
            },
            Err(err) => DeletePayload {
                success: false,
                errors: vec![in_band_message(err)?],
            },
        })
    }

    /// Adds a comment; any authenticated caller may comment.
    pub fn create_comment(
        &self,
        caller: Caller,
        input: CreateCommentInput,
    ) -> ApiResult<CommentPayload> {
        require_authenticated(caller, "create a comment")?;

        Ok(
            match self.comments()?.create_comment(input.post_id, &input.content) {
                Ok(comment) => CommentPayload {
                    comment: Some(comment.into()),
                    errors: Vec::new(),
                },
                Err(err) => CommentPayload {
                    comment: None,
                    errors: vec![in_band_message(err)?],
                },
            },
        )
    }

    fn post_payload(
        &self,
        authors: &SqliteAuthorRepository<'_>,
        outcome: Result<Post, ServiceError>,
    ) -> ApiResult<PostPayload> {
        Ok(match outcome {
            Ok(post) => PostPayload {
                post: Some(post_node(authors, post)?),
                errors: Vec::new(),
            },
            Err(err) => PostPayload {
                post: None,
                errors: vec![in_band_message(err)?],
            },
        })
    }

    fn author_repo(&self) -> ApiResult<SqliteAuthorRepository<'conn>> {
        Ok(SqliteAuthorRepository::try_new(self.conn)?)
    }

    fn post_repo(&self) -> ApiResult<SqlitePostRepository<'conn>> {
        Ok(SqlitePostRepository::try_new(self.conn)?)
    }

    fn authors(&self) -> ApiResult<AuthorService<SqliteAuthorRepository<'conn>>> {
        Ok(AuthorService::new(self.author_repo()?))
    }

    fn posts(&self) -> ApiResult<PostService<SqlitePostRepository<'conn>>> {
        Ok(PostService::new(self.post_repo()?))
    }

    fn comments(&self) -> ApiResult<CommentService<SqliteCommentRepository<'conn>>> {
        Ok(CommentService::new(SqliteCommentRepository::try_new(
            self.conn,
        )?))
    }
}

fn post_node<R: AuthorRepository>(authors: &R, post: Post) -> ApiResult<PostNode> {
    let author = authors.get_author(post.author_id)?.ok_or_else(|| {
        ApiError::Internal(format!(
            "post {} references missing author {}",
            post.id, post.author_id
        ))
    })?;
    Ok(PostNode::new(post, author))
}
