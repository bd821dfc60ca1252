#![allow(dead_code)]

use pdsql_infrastructure::database::run_migrations;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};

/// In-memory database with the record schema applied.
///
/// A single connection keeps every query on the same in-memory database.
pub async fn create_test_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    run_migrations(&pool).await.unwrap();
    pool
}

pub async fn insert_domain(pool: &SqlitePool, name: &str) -> i64 {
    sqlx::query("INSERT INTO domains (name, type) VALUES (?, 'NATIVE')")
        .bind(name)
        .execute(pool)
        .await
        .unwrap()
        .last_insert_rowid()
}

pub async fn insert_record(
    pool: &SqlitePool,
    domain_id: i64,
    name: &str,
    record_type: &str,
    content: &str,
    ttl: i64,
) -> i64 {
    sqlx::query(
        "INSERT INTO records (domain_id, name, type, content, ttl, disabled)
         VALUES (?, ?, ?, ?, ?, 0)",
    )
    .bind(domain_id)
    .bind(name)
    .bind(record_type)
    .bind(content)
    .bind(ttl)
    .execute(pool)
    .await
    .unwrap()
    .last_insert_rowid()
}

pub async fn disable_record(pool: &SqlitePool, id: i64) {
    sqlx::query("UPDATE records SET disabled = 1 WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await
        .unwrap();
}

pub const EXAMPLE_SOA: &str =
    "ns1.example.org hostmaster.example.org 2024010101 10800 3600 604800 3600";

/// `example.org` zone with an SOA, an apex A record and a wildcard A.
pub async fn seed_example_zone(pool: &SqlitePool) -> i64 {
    let zone = insert_domain(pool, "example.org").await;
    insert_record(pool, zone, "example.org", "SOA", EXAMPLE_SOA, 3600).await;
    insert_record(pool, zone, "example.org", "NS", "ns1.example.org", 3600).await;
    insert_record(pool, zone, "www.example.org", "A", "192.0.2.10", 300).await;
    insert_record(pool, zone, "*.example.org", "A", "192.0.2.99", 120).await;
    zone
}
