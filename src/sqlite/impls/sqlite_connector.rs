use sqlx::{Pool, Sqlite};
use crate::connector::structs::connector::Connector;
use crate::sqlite::structs::sqlite_backend::SqliteBackend;

impl Connector<SqliteBackend> {
    pub fn get_db(&self) -> Option<Pool<Sqlite>> {
        self.get_handle()
    }
}
