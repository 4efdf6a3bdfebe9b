use inkwell_core::db::open_db_in_memory;
use inkwell_core::{
    AuthorPatch, AuthorService, NewAuthor, ServiceError, SqliteAuthorRepository,
    SqliteUserRepository, UserService,
};
use rusqlite::Connection;

fn new_author(email: &str, user_id: Option<i64>) -> NewAuthor {
    NewAuthor {
        name: "Ada".to_string(),
        email: email.to_string(),
        bio: Some("writes things".to_string()),
        user_id,
    }
}

fn author_service(conn: &Connection) -> AuthorService<SqliteAuthorRepository<'_>> {
    AuthorService::new(SqliteAuthorRepository::try_new(conn).unwrap())
}

#[test]
fn create_author_rejects_duplicate_email_and_accepts_a_different_one() {
    let conn = open_db_in_memory().unwrap();
    let service = author_service(&conn);

    let first = service.create_author(new_author("a@x.com", None)).unwrap();
    assert_eq!(first.email, "a@x.com");

    let err = service
        .create_author(new_author("a@x.com", None))
        .unwrap_err();
    assert!(matches!(err, ServiceError::DuplicateEmail));
    assert!(err.is_validation());

    let second = service.create_author(new_author("b@x.com", None)).unwrap();
    assert_ne!(first.id, second.id);
}

#[test]
fn create_author_with_unknown_user_fails_with_user_not_found() {
    let conn = open_db_in_memory().unwrap();
    let service = author_service(&conn);

    let err = service
        .create_author(new_author("a@x.com", Some(404)))
        .unwrap_err();
    assert!(matches!(err, ServiceError::UserNotFound(404)));
    assert_eq!(err.to_string(), "User not found.");

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM authors;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 0);
}

#[test]
fn create_author_links_existing_user_and_drops_empty_bio() {
    let conn = open_db_in_memory().unwrap();
    let users = UserService::new(SqliteUserRepository::try_new(&conn).unwrap());
    let user = users.create_user("ada").unwrap();
    let service = author_service(&conn);

    let mut input = new_author("a@x.com", Some(user.id));
    input.bio = Some(String::new());
    let author = service.create_author(input).unwrap();

    assert_eq!(author.user_id, Some(user.id));
    assert_eq!(author.bio, None);
    assert_eq!(service.get_author(author.id).unwrap(), Some(author));
}

#[test]
fn update_author_applies_only_provided_fields() {
    let conn = open_db_in_memory().unwrap();
    let service = author_service(&conn);
    let author = service.create_author(new_author("a@x.com", None)).unwrap();

    let updated = service
        .update_author(
            author.id,
            AuthorPatch {
                name: Some("Ada L.".to_string()),
                ..AuthorPatch::default()
            },
        )
        .unwrap();

    assert_eq!(updated.name, "Ada L.");
    assert_eq!(updated.email, "a@x.com");
    assert_eq!(updated.bio.as_deref(), Some("writes things"));
}

#[test]
fn update_author_treats_empty_strings_as_not_provided() {
    let conn = open_db_in_memory().unwrap();
    let service = author_service(&conn);
    let author = service.create_author(new_author("a@x.com", None)).unwrap();

    let updated = service
        .update_author(
            author.id,
            AuthorPatch {
                name: Some(String::new()),
                email: Some(String::new()),
                bio: Some(String::new()),
            },
        )
        .unwrap();

    assert_eq!(updated, author);
}

#[test]
fn update_author_email_collision_excludes_self() {
    let conn = open_db_in_memory().unwrap();
    let service = author_service(&conn);
    let first = service.create_author(new_author("a@x.com", None)).unwrap();
    service.create_author(new_author("b@x.com", None)).unwrap();

    let same = service
        .update_author(
            first.id,
            AuthorPatch {
                email: Some("a@x.com".to_string()),
                ..AuthorPatch::default()
            },
        )
        .unwrap();
    assert_eq!(same.email, "a@x.com");

    let err = service
        .update_author(
            first.id,
            AuthorPatch {
                email: Some("b@x.com".to_string()),
                ..AuthorPatch::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, ServiceError::DuplicateEmail));
    let reloaded = service.get_author(first.id).unwrap().unwrap();
    assert_eq!(reloaded.email, "a@x.com");
}

#[test]
fn update_missing_author_fails_with_author_not_found() {
    let conn = open_db_in_memory().unwrap();
    let service = author_service(&conn);

    let err = service
        .update_author(9, AuthorPatch::default())
        .unwrap_err();
    assert!(matches!(err, ServiceError::AuthorNotFound(9)));
}
