use structload::utils::testing_utils::{MemoryDb, ResultSet};
use structload::{LoadError, LoadResult, Value, query, query_fields};

const PEOPLE_QUERY: &str = "SELECT id AS Person_id, name AS Person_name FROM people;";

#[derive(Debug, Default, PartialEq)]
struct Person {
    id: u64,
    name: String,
}

query_fields!(Person {
    id => "Person_id",
    name => "Person_name",
});

fn people_rows() -> Vec<Vec<Value>> {
    vec![
        vec![Value::Int(1), Value::text("Alice")],
        vec![Value::Int(2), Value::text("Bob")],
        vec![Value::Int(3), Value::text("Charlie")],
    ]
}

fn db_with(set: ResultSet) -> MemoryDb {
    let mut db = MemoryDb::new();
    db.register(PEOPLE_QUERY, set);
    db
}

#[test]
fn test_exhaustion_is_not_an_error() -> LoadResult<()> {
    let db = db_with(ResultSet::new(&["Person_id", "Person_name"], people_rows()));
    let mut rows = query(&db, PEOPLE_QUERY, &[])?;

    let mut count = 0;
    while rows.next() {
        let mut person = Person::default();
        rows.scan(&mut [&mut person])?;
        count += 1;
    }

    assert_eq!(count, 3);
    assert_eq!(rows.err(), None);

    // Exhaustion closed the rows already; closing again is fine.
    rows.close()?;
    assert_eq!(rows.err(), None);
    Ok(())
}

#[test]
fn test_iteration_error_is_sticky() -> LoadResult<()> {
    let db = db_with(ResultSet::new(&["Person_id", "Person_name"], people_rows()).fail_after(2));
    let mut rows = query(&db, PEOPLE_QUERY, &[])?;

    let mut loaded = Vec::new();
    while rows.next() {
        let mut person = Person::default();
        rows.scan(&mut [&mut person])?;
        loaded.push(person);
    }

    assert_eq!(loaded.len(), 2);

    let first = rows.err().cloned();
    assert!(matches!(first, Some(LoadError::Engine(_))));

    // The recorded error never changes, and the cursor stays put.
    assert!(!rows.next());
    assert_eq!(rows.err().cloned(), first);

    rows.close()?;
    assert_eq!(rows.err().cloned(), first);
    Ok(())
}

#[test]
fn test_close_before_reading() -> LoadResult<()> {
    let db = db_with(ResultSet::new(&["Person_id", "Person_name"], people_rows()));
    let mut rows = query(&db, PEOPLE_QUERY, &[])?;

    rows.close()?;
    rows.close()?;

    assert_eq!(rows.err(), None);
    assert!(!rows.next());
    Ok(())
}

#[test]
fn test_failed_load_blocks_further_rows() {
    // The second row delivers text where Person_id expects an integer.
    let set = ResultSet::new(
        &["Person_id", "Person_name"],
        vec![
            vec![Value::Int(1), Value::text("Alice")],
            vec![Value::text("two"), Value::text("Bob")],
            vec![Value::Int(3), Value::text("Charlie")],
        ],
    );
    let db = db_with(set);
    let mut rows = query(&db, PEOPLE_QUERY, &[]).unwrap();

    assert!(rows.next());
    let mut person = Person::default();
    rows.scan(&mut [&mut person]).unwrap();
    assert_eq!(person, Person { id: 1, name: "Alice".to_string() });

    assert!(rows.next());
    let mut person = Person::default();
    let err = rows.scan(&mut [&mut person]).unwrap_err();
    assert!(matches!(err, LoadError::TypeMismatch(_)));

    // The row-load error is recorded; the third row is unreachable.
    assert!(!rows.next());
    assert_eq!(rows.err(), Some(&err));
}
