use canteen_db::mock::store::MockStore;
use canteen_db::repositories::canteen::{
    add_menu_image, get_all_canteens, update_canteen_status, CANTEENS_KEY,
};
use canteen_db::repositories::session::{login, CURRENT_USER_KEY};
use canteen_db::repositories::user::USERS_KEY;
use canteen_db::seed::{initialize_store, seed_canteens, seed_users};
use canteen_db::UpdateOutcome;
use canteen_core::errors::CanteenError;
use chrono::{NaiveDate, NaiveDateTime};
use mockall::predicate;

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 3)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap()
}

fn canteens_json() -> String {
    serde_json::to_string(&seed_canteens(now())).unwrap()
}

#[test]
fn test_missing_canteen_does_not_write() {
    let mut store = MockStore::new();
    let json = canteens_json();
    store
        .expect_get()
        .with(predicate::eq(CANTEENS_KEY))
        .times(1)
        .returning(move |_| Ok(Some(json.clone())));
    store.expect_set().times(0);

    let outcome = update_canteen_status(&store, "canteen42", false).unwrap();

    assert_eq!(outcome, UpdateOutcome::NotFound);
}

#[test]
fn test_limit_reached_does_not_write() {
    let mut canteens = seed_canteens(now());
    canteens[0].menu_images = (1..=5).map(|n| format!("{}.png", n)).collect();
    let json = serde_json::to_string(&canteens).unwrap();

    let mut store = MockStore::new();
    store
        .expect_get()
        .returning(move |_| Ok(Some(json.clone())));
    store.expect_set().times(0);

    let outcome = add_menu_image(&store, "canteen1", "6.png").unwrap();

    assert_eq!(outcome, UpdateOutcome::LimitReached);
}

#[test]
fn test_successful_update_rewrites_collection_once() {
    let mut store = MockStore::new();
    let json = canteens_json();
    store
        .expect_get()
        .returning(move |_| Ok(Some(json.clone())));
    store
        .expect_set()
        .withf(|key, value| key == CANTEENS_KEY && value.contains("\"isOpen\":false"))
        .times(1)
        .returning(|_, _| Ok(()));

    let outcome = update_canteen_status(&store, "canteen1", false).unwrap();

    assert_eq!(outcome, UpdateOutcome::Updated);
}

#[test]
fn test_storage_errors_propagate() {
    let mut store = MockStore::new();
    store
        .expect_get()
        .returning(|_| Err(eyre::eyre!("storage unavailable")));

    let error = get_all_canteens(&store).unwrap_err();

    assert!(error.to_string().contains("storage unavailable"));
}

#[test]
fn test_corrupt_collection_is_reported() {
    let mut store = MockStore::new();
    store
        .expect_get()
        .returning(|_| Ok(Some("{not json".to_string())));

    let error = get_all_canteens(&store).unwrap_err();

    assert!(error.to_string().contains("Failed to parse stored canteens"));
}

#[test]
fn test_seeding_skips_present_keys() {
    let mut store = MockStore::new();
    store
        .expect_get()
        .returning(|_| Ok(Some("[]".to_string())));
    store.expect_set().times(0);

    initialize_store(&store, now()).unwrap();
}

#[test]
fn test_login_failure_leaves_session_untouched() {
    let users = serde_json::to_string(&seed_users()).unwrap();
    let mut store = MockStore::new();
    store
        .expect_get()
        .with(predicate::eq(USERS_KEY))
        .returning(move |_| Ok(Some(users.clone())));
    store
        .expect_set()
        .with(predicate::eq(CURRENT_USER_KEY), predicate::always())
        .times(0);

    let result = login(&store, "admin", "wrong");

    assert!(matches!(result, Err(CanteenError::Authentication(_))));
}
