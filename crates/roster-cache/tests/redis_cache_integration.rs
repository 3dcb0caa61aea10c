use redis::AsyncCommands;
use roster_cache::RedisRecordCache;
use roster_core::{CacheKey, NewRecord, Record, RecordCache, RecordId};
use roster_test_infra::redis::RedisServer;

fn test_record(nickname: &str) -> Record {
    NewRecord {
        name: "João Silva".to_string(),
        nickname: nickname.to_string(),
        birthdate: "1990-01-01".to_string(),
        stack: Some(vec!["java".to_string(), "rust".to_string()]),
    }
    .into_record(RecordId::new())
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn get_and_set_round_trip() {
    let server = RedisServer::new().await.expect("start redis");
    let cache = RedisRecordCache::new(server.connection().await.expect("connect"));
    let record = test_record("joaoj");
    let key = CacheKey::Id(record.id);

    assert!(cache.get_record(&key).await.unwrap().is_none());

    cache.set_record(&key, &record).await.unwrap();

    assert_eq!(cache.get_record(&key).await.unwrap(), Some(record));
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn set_records_writes_both_keys() {
    let server = RedisServer::new().await.expect("start redis");
    let cache = RedisRecordCache::new(server.connection().await.expect("connect"));
    let record = test_record("joaoj");

    cache
        .set_records(&CacheKey::for_record(&record), &record)
        .await
        .unwrap();

    let by_id = cache.get_record(&CacheKey::Id(record.id)).await.unwrap();
    let by_nickname = cache
        .get_record(&CacheKey::nickname("joaoj"))
        .await
        .unwrap();
    assert_eq!(by_id, Some(record.clone()));
    assert_eq!(by_nickname, Some(record));
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn keys_use_configured_prefix() {
    let server = RedisServer::new().await.expect("start redis");
    let mut conn = server.connection().await.expect("connect");
    let cache = RedisRecordCache::with_prefix(conn.clone(), "test:");
    let record = test_record("joaoj");

    cache
        .set_record(&CacheKey::nickname("joaoj"), &record)
        .await
        .unwrap();

    let raw: Option<String> = conn.get("test:nickname:joaoj").await.unwrap();
    let raw = raw.expect("value stored under prefixed key");
    let decoded: Record = serde_json::from_str(&raw).unwrap();
    assert_eq!(decoded, record);
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn corrupt_value_is_invalid_data() {
    let server = RedisServer::new().await.expect("start redis");
    let mut conn = server.connection().await.expect("connect");
    let cache = RedisRecordCache::new(conn.clone());

    let _: () = conn
        .set("roster:nickname:broken", "not json")
        .await
        .unwrap();

    let err = cache
        .get_record(&CacheKey::nickname("broken"))
        .await
        .unwrap_err();
    assert!(matches!(err, roster_core::CacheError::InvalidData(_)));
}

#[tokio::test]
#[ignore = "requires a Docker daemon"]
async fn connect_from_url() {
    let server = RedisServer::new().await.expect("start redis");
    let url = server.redis_url().await.expect("redis url");
    let cache = RedisRecordCache::connect(&url, "roster:").await.unwrap();
    let record = test_record("viaurl");

    cache
        .set_record(&CacheKey::Id(record.id), &record)
        .await
        .unwrap();
    assert!(cache
        .get_record(&CacheKey::Id(record.id))
        .await
        .unwrap()
        .is_some());
}
