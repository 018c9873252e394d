use structload::utils::testing_utils::{MemoryDb, ResultSet};
use structload::{LoadResult, Value, query, query_fields};

const USERS_QUERY: &str = "
    SELECT
        users.id            AS User_id,
        users.login         AS User_login,
        user_emails.id      AS UserEmail_id,
        user_emails.user_id AS UserEmail_user_id,
        user_emails.email   AS UserEmail_email
    FROM users
    JOIN user_emails
        ON user_emails.user_id = users.id
    WHERE login = ?;
";

/// A row from the `users` table.
#[derive(Debug, Default)]
struct User {
    id: u64,
    login: String,
}

query_fields!(User {
    id => "User_id",
    login => "User_login",
});

/// A row from the `user_emails` table.
#[derive(Debug, Default)]
struct UserEmail {
    id: u64,
    user_id: u64,
    email: String,
}

query_fields!(UserEmail {
    id => "UserEmail_id",
    user_id => "UserEmail_user_id",
    email => "UserEmail_email",
});

fn find_users_by_login_with_email(
    db: &MemoryDb,
    logins: &[&str],
) -> LoadResult<Vec<(User, UserEmail)>> {
    let args: Vec<Value> = logins.iter().map(|login| Value::text(*login)).collect();

    let mut rows = query(db, USERS_QUERY, &args)?;

    let mut users = Vec::with_capacity(logins.len());
    while rows.next() {
        let mut user = User::default();
        let mut email = UserEmail::default();

        rows.load(&mut [&mut user, &mut email])?;
        users.push((user, email));
    }

    if let Some(err) = rows.err() {
        return Err(err.clone());
    }
    rows.close()?;

    Ok(users)
}

/// Stands in for a live connection; a real deployment would implement
/// `Executor` over its database driver instead.
fn connect() -> MemoryDb {
    let mut db = MemoryDb::new();
    db.register(
        USERS_QUERY,
        ResultSet::new(
            &[
                "User_id",
                "User_login",
                "UserEmail_id",
                "UserEmail_user_id",
                "UserEmail_email",
            ],
            vec![
                vec![
                    Value::Int(1),
                    Value::text("userone"),
                    Value::Int(11),
                    Value::Int(1),
                    Value::text("one@example.com"),
                ],
                vec![
                    Value::Int(2),
                    Value::text("usertwo"),
                    Value::Int(12),
                    Value::Int(2),
                    Value::text("two@example.com"),
                ],
                vec![
                    Value::Int(3),
                    Value::text("userthree"),
                    Value::Int(13),
                    Value::Int(3),
                    Value::text("three@example.com"),
                ],
            ],
        ),
    );
    db
}

fn main() {
    let db = connect();

    let users = find_users_by_login_with_email(&db, &["userone", "usertwo", "userthree"])
        .expect("loading users failed");

    for (user, email) in &users {
        println!("{}: {}", user.login, email.email);
    }
}
