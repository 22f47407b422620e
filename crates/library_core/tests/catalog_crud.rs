use library_core::db::open_db_in_memory;
use library_core::{
    Author, AuthorDraft, Book, BookDraft, Category, CategoryDraft, Deleted, EntityKind,
    RepoError, Repository, SqliteAuthorRepository, SqliteBookRepository,
    SqliteCategoryRepository, UpdateOutcome,
};
use std::collections::HashSet;

fn sample_book(title: &str) -> BookDraft {
    BookDraft {
        author_id: 1,
        category_id: 2,
        title: title.to_string(),
        pages: 320,
    }
}

#[test]
fn list_on_empty_table_returns_empty_vec() {
    let conn = open_db_in_memory().unwrap();

    assert!(SqliteAuthorRepository::new(&conn).list_all().unwrap().is_empty());
    assert!(SqliteCategoryRepository::new(&conn).list_all().unwrap().is_empty());
    assert!(SqliteBookRepository::new(&conn).list_all().unwrap().is_empty());
}

#[test]
fn create_assigns_id_and_get_reads_it_back() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteAuthorRepository::new(&conn);

    let created = repo.create(AuthorDraft::new("Ada")).unwrap();
    assert_eq!(
        created,
        Author {
            id: 1,
            name: "Ada".to_string()
        }
    );

    let loaded = repo.get_by_id(created.id).unwrap();
    assert_eq!(loaded, created);
}

#[test]
fn created_ids_are_never_reused_after_delete() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCategoryRepository::new(&conn);

    let first = repo.create(CategoryDraft::new("Poetry")).unwrap();
    repo.delete_by_id(first.id).unwrap();
    let second = repo.create(CategoryDraft::new("Drama")).unwrap();

    assert!(second.id > first.id);
}

#[test]
fn get_missing_id_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBookRepository::new(&conn);

    let err = repo.get_by_id(42).unwrap_err();
    assert!(matches!(
        err,
        RepoError::NotFound {
            kind: EntityKind::Book,
            id: 42
        }
    ));
    assert!(err.is_not_found());
}

#[test]
fn book_create_does_not_check_author_or_category() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBookRepository::new(&conn);

    let created = repo
        .create(BookDraft {
            author_id: 999,
            category_id: 888,
            title: "Orphan".to_string(),
            pages: 10,
        })
        .unwrap();

    let loaded = repo.get_by_id(created.id).unwrap();
    assert_eq!(loaded.author_id, 999);
    assert_eq!(loaded.category_id, 888);
}

#[test]
fn update_existing_book_overwrites_all_fields() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBookRepository::new(&conn);
    let created = repo.create(sample_book("Draft title")).unwrap();

    let outcome = repo
        .update(
            created.id,
            BookDraft {
                author_id: 7,
                category_id: 8,
                title: "Final title".to_string(),
                pages: 512,
            },
        )
        .unwrap();

    let expected = Book {
        id: created.id,
        author_id: 7,
        category_id: 8,
        title: "Final title".to_string(),
        pages: 512,
    };
    assert_eq!(outcome, UpdateOutcome::Updated(expected.clone()));
    assert_eq!(repo.get_by_id(created.id).unwrap(), expected);
}

#[test]
fn update_missing_id_reports_not_found_outcome() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteAuthorRepository::new(&conn);

    let outcome = repo.update(5, AuthorDraft::new("Nobody")).unwrap();
    assert_eq!(outcome, UpdateOutcome::NotFound);
    assert!(repo.list_all().unwrap().is_empty());
}

#[test]
fn delete_is_idempotent_and_reports_removed_rows() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteAuthorRepository::new(&conn);
    let created = repo.create(AuthorDraft::new("Grace")).unwrap();

    assert_eq!(repo.delete_by_id(created.id).unwrap(), Deleted { removed: 1 });
    assert_eq!(repo.delete_by_id(created.id).unwrap(), Deleted { removed: 0 });
    assert!(repo.get_by_id(created.id).unwrap_err().is_not_found());
}

#[test]
fn delete_missing_id_leaves_other_rows_untouched() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCategoryRepository::new(&conn);
    let kept = repo.create(CategoryDraft::new("History")).unwrap();

    assert_eq!(repo.delete_by_id(kept.id + 100).unwrap(), Deleted { removed: 0 });
    assert_eq!(repo.list_all().unwrap(), vec![kept]);
}

#[test]
fn list_reflects_exactly_the_live_records() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBookRepository::new(&conn);

    let a = repo.create(sample_book("A")).unwrap();
    let b = repo.create(sample_book("B")).unwrap();
    let c = repo.create(sample_book("C")).unwrap();
    repo.delete_by_id(b.id).unwrap();

    let ids = repo
        .list_all()
        .unwrap()
        .into_iter()
        .map(|book| book.id)
        .collect::<HashSet<_>>();
    assert_eq!(ids, HashSet::from([a.id, c.id]));
}

#[test]
fn entity_kinds_use_separate_id_namespaces() {
    let conn = open_db_in_memory().unwrap();

    let author = SqliteAuthorRepository::new(&conn)
        .create(AuthorDraft::new("Ada"))
        .unwrap();
    let category = SqliteCategoryRepository::new(&conn)
        .create(CategoryDraft::new("Science"))
        .unwrap();

    assert_eq!(author.id, 1);
    assert_eq!(category.id, 1);
    assert!(SqliteBookRepository::new(&conn).get_by_id(1).is_err());
}

#[test]
fn undecodable_row_surfaces_as_invalid_data() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO book (author_id, category_id, title, pages) VALUES (1, 1, 'Bad', 'many');",
        [],
    )
    .unwrap();

    let err = SqliteBookRepository::new(&conn).list_all().unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)), "{err}");
}

#[test]
fn records_serialize_with_snake_case_wire_names() {
    let category = Category {
        id: 3,
        name: "Essays".to_string(),
    };
    assert_eq!(
        serde_json::to_value(&category).unwrap(),
        serde_json::json!({"id": 3, "name": "Essays"})
    );

    let book: Book = serde_json::from_value(serde_json::json!({
        "id": 1,
        "author_id": 2,
        "category_id": 3,
        "title": "Dune",
        "pages": 412
    }))
    .unwrap();
    assert_eq!(book.author_id, 2);
    assert_eq!(book.category_id, 3);
}

#[test]
fn drafts_ignore_id_and_require_every_field() {
    let draft: AuthorDraft = serde_json::from_str(r#"{"id": 77, "name": "Ada"}"#).unwrap();
    assert_eq!(draft, AuthorDraft::new("Ada"));

    assert!(serde_json::from_str::<BookDraft>(r#"{"title": "No pages"}"#).is_err());
}
