use chrono::{DateTime, Duration, Utc};
use subkeeper_bot::constants::SUBSCRIPTIONS_FILE;
use subkeeper_bot::store::{Store, Subscription};

fn grant(service: &str, expiry: DateTime<Utc>) -> Subscription {
    Subscription {
        service: service.to_string(),
        expiry,
    }
}

#[tokio::test]
async fn past_expiry_is_removed_and_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::open(dir.path());
    store
        .put_subscription(123, grant("gold", Utc::now() - Duration::days(1)))
        .await
        .unwrap();

    let removed = store.remove_expired(Utc::now()).await.unwrap();
    assert_eq!(removed.len(), 1);
    assert_eq!(removed[0].0, 123);
    assert_eq!(removed[0].1.service, "gold");
    assert_eq!(store.subscription_count().await, 0);

    let on_disk = std::fs::read_to_string(dir.path().join(SUBSCRIPTIONS_FILE)).unwrap();
    assert_eq!(on_disk.trim(), "{}");
}

#[tokio::test]
async fn future_expiry_is_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::open(dir.path());
    store
        .put_subscription(123, grant("gold", Utc::now() + Duration::days(1)))
        .await
        .unwrap();

    let removed = store.remove_expired(Utc::now()).await.unwrap();
    assert!(removed.is_empty());
    assert!(store.get_subscription(123).await.is_some());
}

#[tokio::test]
async fn expiry_equal_to_sweep_time_is_removed() {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::open(dir.path());
    let now = Utc::now();
    store.put_subscription(123, grant("gold", now)).await.unwrap();

    let removed = store.remove_expired(now).await.unwrap();
    assert_eq!(removed.len(), 1);
}

#[tokio::test]
async fn zero_removals_still_rewrites_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::open(dir.path());
    assert!(!dir.path().join(SUBSCRIPTIONS_FILE).exists());

    store.remove_expired(Utc::now()).await.unwrap();

    let on_disk = std::fs::read_to_string(dir.path().join(SUBSCRIPTIONS_FILE)).unwrap();
    assert_eq!(on_disk.trim(), "{}");
}

#[tokio::test]
async fn mixed_table_keeps_only_future_entries() {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::open(dir.path());
    let now = Utc::now();
    store
        .put_subscription(1, grant("gold", now - Duration::hours(1)))
        .await
        .unwrap();
    store
        .put_subscription(2, grant("silver", now + Duration::hours(1)))
        .await
        .unwrap();
    store
        .put_subscription(3, grant("gold", now - Duration::days(30)))
        .await
        .unwrap();

    let mut removed: Vec<u64> = store
        .remove_expired(now)
        .await
        .unwrap()
        .into_iter()
        .map(|(id, _)| id)
        .collect();
    removed.sort_unstable();
    assert_eq!(removed, vec![1, 3]);
    assert_eq!(store.subscription_count().await, 1);
    assert!(store.get_subscription(2).await.is_some());
}
