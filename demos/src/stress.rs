use std::time::Instant;

use rand::Rng;

use structload::utils::testing_utils::{MemoryDb, ResultSet};
use structload::{LoadResult, Value, query, query_fields};

const NUM_ROWS: usize = 100_000;
const NUM_ITERATIONS: usize = 3;

const EVENTS_QUERY: &str = "
    SELECT
        events.id      AS Event_id,
        events.kind    AS Event_kind,
        events.payload AS Event_payload
    FROM events;
";

#[derive(Debug, Default)]
struct Event {
    id: u64,
    kind: u32,
    payload: String,
}

query_fields!(Event {
    id => "Event_id",
    kind => "Event_kind",
    payload => "Event_payload",
});

fn seed_db() -> MemoryDb {
    let mut rng = rand::rng();

    let rows = (0..NUM_ROWS)
        .map(|i| {
            vec![
                Value::int(i as i64),
                Value::int(rng.random_range(0..16)),
                Value::text(format!("payload-{}", rng.random_range(0..1_000_000))),
            ]
        })
        .collect();

    let mut db = MemoryDb::new();
    db.register(
        EVENTS_QUERY,
        ResultSet::new(&["Event_id", "Event_kind", "Event_payload"], rows),
    );
    db
}

fn run_iteration(db: &MemoryDb) -> LoadResult<(usize, f64)> {
    let start = Instant::now();

    let mut rows = query(db, EVENTS_QUERY, &[])?;

    let mut loaded = 0usize;
    while rows.next() {
        let mut event = Event::default();
        rows.scan(&mut [&mut event])?;
        loaded += 1;
    }

    if let Some(err) = rows.err() {
        return Err(err.clone());
    }
    rows.close()?;

    let rows_per_second = loaded as f64 / start.elapsed().as_secs_f64();
    Ok((loaded, rows_per_second))
}

fn main() {
    println!("Seeding {} rows...", NUM_ROWS);
    let db = seed_db();

    for i in 0..NUM_ITERATIONS {
        let (loaded, rows_per_second) = run_iteration(&db).expect("bulk load failed");
        println!(
            "Iteration {} of {}: loaded {} rows ({:.0} rows/sec)",
            i + 1,
            NUM_ITERATIONS,
            loaded,
            rows_per_second
        );
    }
}
