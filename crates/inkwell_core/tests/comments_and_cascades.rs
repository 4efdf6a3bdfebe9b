use inkwell_core::db::open_db_in_memory;
use inkwell_core::{
    AuthorService, CommentService, NewAuthor, NewPost, Post, PostService, ServiceError,
    SqliteAuthorRepository, SqliteCommentRepository, SqlitePostRepository, SqliteUserRepository,
    UserService,
};
use rusqlite::{params, Connection};

fn seed_post(conn: &Connection, user_id: Option<i64>, title: &str) -> Post {
    let authors = AuthorService::new(SqliteAuthorRepository::try_new(conn).unwrap());
    let author = authors
        .create_author(NewAuthor {
            name: "Ada".to_string(),
            email: format!("{title}@x.com"),
            bio: None,
            user_id,
        })
        .unwrap();
    let posts = PostService::new(SqlitePostRepository::try_new(conn).unwrap());
    posts
        .create_post(NewPost {
            title: title.to_string(),
            content: "content".to_string(),
            author_id: author.id,
        })
        .unwrap()
}

fn comment_service(conn: &Connection) -> CommentService<SqliteCommentRepository<'_>> {
    CommentService::new(SqliteCommentRepository::try_new(conn).unwrap())
}

fn count(conn: &Connection, table: &str) -> i64 {
    conn.query_row(&format!("SELECT COUNT(*) FROM {table};"), [], |row| {
        row.get(0)
    })
    .unwrap()
}

#[test]
fn create_comment_stamps_parent_post_with_comment_time() {
    let conn = open_db_in_memory().unwrap();
    let post = seed_post(&conn, None, "P");
    conn.execute(
        "UPDATE posts SET last_updated = 0, updated_at = 0 WHERE id = ?1;",
        params![post.id],
    )
    .unwrap();

    let comment = comment_service(&conn)
        .create_comment(post.id, "nice post")
        .unwrap();

    let posts = PostService::new(SqlitePostRepository::try_new(&conn).unwrap());
    let reloaded = posts.get_post(post.id).unwrap();
    assert!(comment.created_at > 0);
    assert_eq!(reloaded.last_updated, comment.created_at);
    assert_eq!(reloaded.updated_at, comment.created_at);
    assert_eq!(reloaded.created_at, post.created_at);
}

#[test]
fn create_comment_on_missing_post_fails_and_writes_nothing() {
    let conn = open_db_in_memory().unwrap();

    let err = comment_service(&conn)
        .create_comment(404, "orphan")
        .unwrap_err();

    assert!(matches!(err, ServiceError::PostNotFound(404)));
    assert_eq!(count(&conn, "comments"), 0);
}

#[test]
fn failed_parent_touch_rolls_back_comment_insert() {
    let conn = open_db_in_memory().unwrap();
    let post = seed_post(&conn, None, "P");
    conn.execute_batch(
        "CREATE TRIGGER freeze_post_timestamps
         BEFORE UPDATE OF last_updated ON posts
         BEGIN
            SELECT RAISE(ABORT, 'post timestamps are frozen');
         END;",
    )
    .unwrap();

    let err = comment_service(&conn)
        .create_comment(post.id, "never stored")
        .unwrap_err();

    assert!(matches!(err, ServiceError::Repo(_)));
    assert!(!err.is_validation());
    assert_eq!(count(&conn, "comments"), 0);
    let posts = PostService::new(SqlitePostRepository::try_new(&conn).unwrap());
    assert_eq!(posts.get_post(post.id).unwrap(), post);
}

#[test]
fn list_comments_is_empty_for_unknown_or_uncommented_posts() {
    let conn = open_db_in_memory().unwrap();
    let post = seed_post(&conn, None, "P");
    let service = comment_service(&conn);

    assert!(service.list_comments(post.id).unwrap().is_empty());
    assert!(service.list_comments(9_999).unwrap().is_empty());

    let first = service.create_comment(post.id, "first").unwrap();
    let second = service.create_comment(post.id, "second").unwrap();
    assert_eq!(service.list_comments(post.id).unwrap(), vec![first, second]);
}

#[test]
fn deleting_post_cascades_to_comments() {
    let conn = open_db_in_memory().unwrap();
    let post = seed_post(&conn, None, "P");
    let comments = comment_service(&conn);
    comments.create_comment(post.id, "one").unwrap();
    comments.create_comment(post.id, "two").unwrap();

    let posts = PostService::new(SqlitePostRepository::try_new(&conn).unwrap());
    posts.delete_post(post.id).unwrap();

    assert!(comments.list_comments(post.id).unwrap().is_empty());
    assert_eq!(count(&conn, "comments"), 0);
}

#[test]
fn deleting_user_cascades_through_authors_posts_and_comments() {
    let conn = open_db_in_memory().unwrap();
    let users = UserService::new(SqliteUserRepository::try_new(&conn).unwrap());
    let owner = users.create_user("owner").unwrap();
    let bystander = users.create_user("bystander").unwrap();
    let owned = seed_post(&conn, Some(owner.id), "owned");
    let other = seed_post(&conn, Some(bystander.id), "other");
    comment_service(&conn).create_comment(owned.id, "c").unwrap();

    assert!(users.delete_user(owner.id).unwrap());

    assert_eq!(count(&conn, "authors"), 1);
    assert_eq!(count(&conn, "comments"), 0);
    let posts = PostService::new(SqlitePostRepository::try_new(&conn).unwrap());
    assert!(posts.get_post(owned.id).is_err());
    assert_eq!(posts.get_post(other.id).unwrap(), other);
}

#[test]
fn create_user_rejects_blank_and_duplicate_usernames() {
    let conn = open_db_in_memory().unwrap();
    let users = UserService::new(SqliteUserRepository::try_new(&conn).unwrap());

    let user = users.create_user("  ada ").unwrap();
    assert_eq!(user.username, "ada");
    assert_eq!(users.get_user(user.id).unwrap(), Some(user));

    assert!(matches!(
        users.create_user("   ").unwrap_err(),
        ServiceError::BlankField("username")
    ));
    assert!(matches!(
        users.create_user("ada").unwrap_err(),
        ServiceError::DuplicateUsername
    ));
    assert!(matches!(
        users.delete_user(999).unwrap_err(),
        ServiceError::UserNotFound(999)
    ));
}

#[test]
fn repositories_refuse_unmigrated_connections() {
    let conn = Connection::open_in_memory().unwrap();
    assert!(SqlitePostRepository::try_new(&conn).is_err());
    assert!(SqliteCommentRepository::try_new(&conn).is_err());
}
