#![allow(dead_code)]

use std::path::PathBuf;

use cse_manager::db::{DbPool, establish_connection_pool, run_pending_migrations};
use cse_manager::repository::DieselRepository;
use tempfile::TempDir;

/// Migrated SQLite database living in a temporary directory for one test.
pub struct TestDb {
    pool: DbPool,
    path: PathBuf,
    _dir: TempDir,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let path = dir.path().join(name);
        let pool = establish_connection_pool(path.to_str().expect("utf-8 path"))
            .expect("open connection pool");
        run_pending_migrations(&pool).expect("run migrations");
        Self {
            pool,
            path,
            _dir: dir,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    pub fn repo(&self) -> DieselRepository {
        DieselRepository::new(self.pool())
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}
