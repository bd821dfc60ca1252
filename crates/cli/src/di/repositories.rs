use pdsql_application::ports::RecordStore;
use pdsql_infrastructure::repositories::SqliteRecordRepository;
use sqlx::SqlitePool;
use std::sync::Arc;

pub struct Repositories {
    pub records: Arc<dyn RecordStore>,
}

impl Repositories {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            records: Arc::new(SqliteRecordRepository::new(pool)),
        }
    }
}
