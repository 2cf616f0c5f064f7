mod car_repository;
mod client_repository;
mod models;
mod sales_order_repository;

use crate::constants::IN_MEMORY_DATABASE;
use crate::errors::Error;
use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

pub use car_repository::*;
pub use client_repository::*;
pub use models::*;
pub use sales_order_repository::*;

/// Tables backing the three resources. Orders keep plain integer references
/// to cars and clients.
const SCHEMA_SQL: &str = "
CREATE TABLE IF NOT EXISTS cars (
    car_id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
    brand TEXT NOT NULL,
    model TEXT NOT NULL,
    year INTEGER NOT NULL,
    color TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS clients (
    client_id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
    name TEXT NOT NULL,
    cpf TEXT NOT NULL,
    phone TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS sales_orders (
    order_id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
    car_id INTEGER NOT NULL,
    client_id INTEGER NOT NULL,
    order_date DATE NOT NULL,
    order_value DOUBLE NOT NULL
);
";

/// Creates the dealership tables when they do not exist yet
pub fn initialize_schema(conn: &mut SqliteConnection) -> Result<(), Error> {
    conn.batch_execute(SCHEMA_SQL)?;
    debug!("Database schema ready");
    Ok(())
}

/// Per-connection SQLite settings applied when the pool opens a connection.
///
/// Writers wait up to `busy_timeout` for the database lock instead of
/// failing with `SQLITE_BUSY`, and file databases use the WAL journal so
/// readers do not block the writer.
#[derive(Debug, Clone)]
struct ConnectionPragmas {
    busy_timeout: Duration,
    wal: bool,
}

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionPragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        let mut pragmas = format!("PRAGMA busy_timeout = {};", self.busy_timeout.as_millis());
        if self.wal {
            pragmas.push_str(" PRAGMA journal_mode = WAL;");
        }
        conn.batch_execute(&pragmas)
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Shared handle on the SQLite connection pool
#[derive(Clone, Debug)]
pub struct Database {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl Database {
    /// Opens a pool on `db_path` and makes sure the schema exists.
    ///
    /// An in-memory database lives only as long as its connection, so it is
    /// served by a single connection that is never recycled.
    pub fn new(db_path: &str, pool_size: u32, connection_timeout: Duration) -> Result<Self, Error> {
        let manager = ConnectionManager::<SqliteConnection>::new(db_path);
        let in_memory = db_path == IN_MEMORY_DATABASE;
        let builder = Pool::builder()
            .connection_timeout(connection_timeout)
            .connection_customizer(Box::new(ConnectionPragmas {
                busy_timeout: connection_timeout,
                wal: !in_memory,
            }));

        let builder = if in_memory {
            builder.max_size(1).idle_timeout(None).max_lifetime(None)
        } else {
            builder.max_size(pool_size.max(1))
        };

        let pool = builder.build(manager)?;
        let mut conn = pool.get()?;
        initialize_schema(&mut conn)?;
        drop(conn);
        info!("Opened database at {}", db_path);

        Ok(Database {
            pool: Arc::new(pool),
        })
    }

    /// Runs `f` with a pooled connection on the blocking thread pool
    pub async fn run<F, T>(&self, f: F) -> Result<T, Error>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T, Error> + Send + 'static,
        T: Send + 'static,
    {
        let pool = Arc::clone(&self.pool);
        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get()?;
            f(&mut conn)
        })
        .await?
    }
}

#[cfg(test)]
pub(crate) fn test_connection() -> SqliteConnection {
    use diesel::Connection;

    let mut conn = SqliteConnection::establish(IN_MEMORY_DATABASE).unwrap();
    initialize_schema(&mut conn).unwrap();
    conn
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn in_memory_database_is_shared_across_calls() {
        let database = Database::new(IN_MEMORY_DATABASE, 8, Duration::from_secs(5)).unwrap();

        let inserted = database
            .run(|conn| {
                CarRepository::new(conn).insert_car(&NewCar {
                    brand: "Fiat".to_string(),
                    model: "Uno".to_string(),
                    year: 2010,
                    color: "Branco".to_string(),
                })
            })
            .await
            .unwrap();
        assert!(inserted);

        let cars = database
            .run(|conn| CarRepository::new(conn).list_cars())
            .await
            .unwrap();
        assert_eq!(cars.len(), 1);
        assert_eq!(cars[0].model, "Uno");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_writes_on_file_database_all_succeed() {
        let path = std::env::temp_dir().join(format!(
            "dealership-concurrent-{}.db",
            std::process::id()
        ));
        let path_str = path.to_string_lossy().to_string();
        let cleanup = |p: &str| {
            for suffix in ["", "-wal", "-shm"] {
                let _ = std::fs::remove_file(format!("{}{}", p, suffix));
            }
        };
        cleanup(&path_str);

        let database = Database::new(&path_str, 8, Duration::from_secs(30)).unwrap();

        let mut handles = Vec::new();
        for i in 0..200 {
            let database = database.clone();
            handles.push(tokio::spawn(async move {
                database
                    .run(move |conn| {
                        CarRepository::new(conn).insert_car(&NewCar {
                            brand: "Renault".to_string(),
                            model: format!("Kwid {}", i),
                            year: 2020,
                            color: "Cinza".to_string(),
                        })
                    })
                    .await
            }));
        }

        let mut failures = Vec::new();
        for handle in handles {
            match handle.await.unwrap() {
                Ok(true) => {}
                other => failures.push(format!("{:?}", other)),
            }
        }

        let count = database
            .run(|conn| CarRepository::new(conn).list_cars())
            .await
            .unwrap()
            .len();

        drop(database);
        cleanup(&path_str);

        assert!(failures.is_empty(), "failed inserts: {:?}", failures);
        assert_eq!(count, 200);
    }

    #[test]
    fn schema_initialization_is_idempotent() {
        let mut conn = test_connection();
        initialize_schema(&mut conn).unwrap();
    }
}
