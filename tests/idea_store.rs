use idealog::Database;
use tempfile::tempdir;

#[test]
fn add_search_list_delete_walkthrough() {
    let dir = tempdir().unwrap();
    let db = Database::new(dir.path().join("ideas.db")).unwrap();

    let novel = db.add("Write a novel", Some(""), Some("writing")).unwrap();
    let rust = db
        .add("Learn Rust", Some("via book"), Some("programming,learning"))
        .unwrap();
    assert_eq!(novel, 1);
    assert!(rust > novel);

    let found = db.search("learning").unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, rust);
    assert_eq!(found[0].text, "Learn Rust");

    let all = db.list_all().unwrap();
    assert_eq!(
        all.iter().map(|i| i.id).collect::<Vec<_>>(),
        vec![novel, rust]
    );
    assert_eq!(all[0].description, None);

    assert!(db.delete(1).unwrap());
    assert!(!db.delete(1).unwrap());
    assert_eq!(db.list_all().unwrap().len(), 1);
}

#[test]
fn store_survives_reopen_and_export_matches_contents() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("ideas.db");
    let export_path = dir.path().join("ideas_export.csv");

    {
        let db = Database::new(&db_path).unwrap();
        db.add("Plant a garden", None, Some("outdoors")).unwrap();
        db.add("Multi\nline idea", Some("with, commas"), None).unwrap();
    }

    let db = Database::new(&db_path).unwrap();
    db.initialize().unwrap();
    let ideas = db.list_all().unwrap();
    assert_eq!(ideas.len(), 2);

    assert!(db.export(&export_path));

    let mut reader = csv::Reader::from_path(&export_path).unwrap();
    assert_eq!(
        reader.headers().unwrap().iter().collect::<Vec<_>>(),
        ["ID", "Texte", "Description", "Tags", "Date"]
    );
    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), ideas.len());
    assert_eq!(&rows[1][1], "Multi\nline idea");
    assert_eq!(&rows[1][2], "with, commas");
    assert_eq!(&rows[0][0], ideas[0].id.to_string());
    assert_eq!(&rows[0][4], ideas[0].created_at);
}
