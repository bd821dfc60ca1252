mod fixtures;

use fixtures::*;
use pdsql_application::ports::RecordStore;
use pdsql_domain::{DomainError, RecordType, TypeFilter};
use pdsql_infrastructure::repositories::SqliteRecordRepository;

#[tokio::test]
async fn test_find_records_matches_name_case_insensitively() {
    let pool = create_test_db().await;
    seed_example_zone(&pool).await;
    let repo = SqliteRecordRepository::new(pool);

    let records = repo
        .find_records("WWW.Example.ORG", TypeFilter::Only(RecordType::A))
        .await
        .unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].content.as_ref(), "192.0.2.10");
    assert_eq!(records[0].ttl, 300);
    assert!(!records[0].disabled);
}

#[tokio::test]
async fn test_find_records_any_returns_every_type() {
    let pool = create_test_db().await;
    seed_example_zone(&pool).await;
    let repo = SqliteRecordRepository::new(pool);

    let records = repo.find_records("example.org", TypeFilter::Any).await.unwrap();

    let types: Vec<&str> = records.iter().map(|r| r.record_type.as_ref()).collect();
    assert_eq!(types, vec!["SOA", "NS"]);
}

#[tokio::test]
async fn test_find_records_filters_by_type() {
    let pool = create_test_db().await;
    seed_example_zone(&pool).await;
    let repo = SqliteRecordRepository::new(pool);

    let records = repo
        .find_records("www.example.org", TypeFilter::Only(RecordType::AAAA))
        .await
        .unwrap();

    assert!(records.is_empty());
}

#[tokio::test]
async fn test_disabled_records_are_excluded() {
    let pool = create_test_db().await;
    let zone = insert_domain(&pool, "example.org").await;
    let id = insert_record(&pool, zone, "mail.example.org", "A", "192.0.2.25", 300).await;
    disable_record(&pool, id).await;
    let repo = SqliteRecordRepository::new(pool);

    let records = repo
        .find_records("mail.example.org", TypeFilter::Any)
        .await
        .unwrap();

    assert!(records.is_empty());
}

#[tokio::test]
async fn test_negative_ttl_is_clamped_to_zero() {
    let pool = create_test_db().await;
    let zone = insert_domain(&pool, "example.org").await;
    insert_record(&pool, zone, "old.example.org", "TXT", "legacy", -30).await;
    let repo = SqliteRecordRepository::new(pool);

    let records = repo
        .find_records("old.example.org", TypeFilter::Only(RecordType::TXT))
        .await
        .unwrap();

    assert_eq!(records[0].ttl, 0);
}

#[tokio::test]
async fn test_find_domain_by_suffix() {
    let pool = create_test_db().await;
    let zone_id = seed_example_zone(&pool).await;
    let repo = SqliteRecordRepository::new(pool);

    let zone = repo.find_domain_by_suffix("EXAMPLE.org").await.unwrap();
    assert_eq!(zone.map(|z| z.id), Some(zone_id));

    let missing = repo.find_domain_by_suffix("example.net").await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_find_wildcard_records_only_returns_wildcards_of_zone() {
    let pool = create_test_db().await;
    let zone = seed_example_zone(&pool).await;
    let other = insert_domain(&pool, "example.net").await;
    insert_record(&pool, other, "*.example.net", "A", "198.51.100.1", 60).await;
    let repo = SqliteRecordRepository::new(pool);

    let records = repo
        .find_wildcard_records(zone, TypeFilter::Only(RecordType::A))
        .await
        .unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name.as_ref(), "*.example.org");
    assert_eq!(records[0].domain_id, zone);

    let txt = repo
        .find_wildcard_records(zone, TypeFilter::Only(RecordType::TXT))
        .await
        .unwrap();
    assert!(txt.is_empty());
}

#[tokio::test]
async fn test_closed_pool_reports_database_error() {
    let pool = create_test_db().await;
    let repo = SqliteRecordRepository::new(pool.clone());
    pool.close().await;

    let result = repo.find_records("www.example.org", TypeFilter::Any).await;

    assert!(matches!(result, Err(DomainError::DatabaseError(_))));
}
