use canteen_core::models::menu::{MenuCategory, MenuItem};
use canteen_core::models::schedule::{DayOfWeek, Shift};
use canteen_db::repositories::canteen::{
    add_closed_date, add_menu_image, add_menu_item, delete_menu_item, find_canteen_by_owner,
    get_all_canteens, get_canteen_by_id, new_menu_item_id, remove_closed_date, remove_menu_image,
    set_day_shifts, update_canteen, update_canteen_details, update_canteen_status,
    update_menu_item, update_profile_image, update_schedule, upsert_menu_item, CANTEENS_KEY,
};
use canteen_db::seed::initialize_store;
use canteen_db::{KeyValueStore, MemoryStore, UpdateOutcome};
use chrono::{NaiveDate, NaiveDateTime};
use pretty_assertions::assert_eq;

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 3)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap()
}

fn seeded() -> MemoryStore {
    canteen_db::mock::seeded_memory_store(now())
}

fn raw(store: &MemoryStore) -> String {
    store.get(CANTEENS_KEY).unwrap().unwrap()
}

fn new_item(canteen_id: &str) -> MenuItem {
    MenuItem {
        id: new_menu_item_id(),
        name: "Masala Dosa".to_string(),
        description: "Crisp rice crepe with potato filling".to_string(),
        price: 4.5,
        category: MenuCategory::Breakfast,
        image: None,
        available: true,
        canteen_id: canteen_id.to_string(),
    }
}

#[test]
fn test_unseeded_store_is_empty() {
    let store = MemoryStore::new();

    assert!(get_all_canteens(&store).unwrap().is_empty());
    assert_eq!(get_canteen_by_id(&store, "canteen1").unwrap(), None);
}

#[test]
fn test_seeding_is_idempotent() {
    let store = MemoryStore::new();
    initialize_store(&store, now()).unwrap();
    let first = raw(&store);

    let later = now() + chrono::Duration::days(3);
    initialize_store(&store, later).unwrap();

    assert_eq!(raw(&store), first);
    assert_eq!(get_all_canteens(&store).unwrap().len(), 5);
}

#[test]
fn test_seeding_keeps_existing_changes() {
    let store = seeded();
    update_canteen_status(&store, "canteen2", false).unwrap();

    initialize_store(&store, now()).unwrap();

    let canteen = get_canteen_by_id(&store, "canteen2").unwrap().unwrap();
    assert!(!canteen.is_open);
}

#[test]
fn test_fetch_preserves_seed_order() {
    let store = seeded();

    let ids: Vec<String> = get_all_canteens(&store)
        .unwrap()
        .into_iter()
        .map(|canteen| canteen.id)
        .collect();

    assert_eq!(ids, vec!["canteen1", "canteen2", "canteen3", "canteen4", "canteen5"]);
}

#[test]
fn test_find_canteen_by_owner() {
    let store = seeded();

    let canteen = find_canteen_by_owner(&store, "owner4").unwrap().unwrap();

    assert_eq!(canteen.name, "KANCHANJANGA");
    assert_eq!(find_canteen_by_owner(&store, "guest1").unwrap(), None);
}

#[test]
fn test_menu_item_add_fetch_delete() {
    let store = seeded();
    let item = new_item("canteen1");

    assert_eq!(add_menu_item(&store, "canteen1", &item).unwrap(), UpdateOutcome::Updated);
    let canteen = get_canteen_by_id(&store, "canteen1").unwrap().unwrap();
    assert_eq!(canteen.menu_item(&item.id), Some(&item));
    assert_eq!(canteen.menu.len(), 5);

    assert_eq!(
        delete_menu_item(&store, "canteen1", &item.id).unwrap(),
        UpdateOutcome::Updated
    );
    let canteen = get_canteen_by_id(&store, "canteen1").unwrap().unwrap();
    assert_eq!(canteen.menu_item(&item.id), None);
    assert_eq!(canteen.menu.len(), 4);
}

#[test]
fn test_add_menu_item_with_existing_id_changes_nothing() {
    let store = seeded();
    let before = raw(&store);
    let mut copy = get_canteen_by_id(&store, "canteen1").unwrap().unwrap().menu[0].clone();
    copy.name = "Second Sandwich".to_string();

    let outcome = add_menu_item(&store, "canteen1", &copy).unwrap();

    assert_eq!(outcome, UpdateOutcome::Duplicate);
    assert_eq!(raw(&store), before);
    let menu = get_canteen_by_id(&store, "canteen1").unwrap().unwrap().menu;
    assert_eq!(menu.iter().filter(|item| item.id == "canteen1-item1").count(), 1);
}

#[test]
fn test_update_of_missing_menu_item_changes_nothing() {
    let store = seeded();
    let before = raw(&store);

    let outcome = update_menu_item(&store, "canteen1", &new_item("canteen1")).unwrap();

    assert_eq!(outcome, UpdateOutcome::NotFound);
    assert_eq!(raw(&store), before);
}

#[test]
fn test_update_menu_item_replaces_fields() {
    let store = seeded();
    let mut item = get_canteen_by_id(&store, "canteen3")
        .unwrap()
        .unwrap()
        .menu[3]
        .clone();
    item.price = 4.25;
    item.available = false;

    assert_eq!(update_menu_item(&store, "canteen3", &item).unwrap(), UpdateOutcome::Updated);

    let canteen = get_canteen_by_id(&store, "canteen3").unwrap().unwrap();
    assert_eq!(canteen.menu[3], item);
}

#[test]
fn test_upsert_updates_or_appends() {
    let store = seeded();
    let mut existing = get_canteen_by_id(&store, "canteen1").unwrap().unwrap().menu[0].clone();
    existing.name = "Big Breakfast Sandwich".to_string();
    let fresh = new_item("canteen1");

    upsert_menu_item(&store, "canteen1", &existing).unwrap();
    upsert_menu_item(&store, "canteen1", &fresh).unwrap();

    let menu = get_canteen_by_id(&store, "canteen1").unwrap().unwrap().menu;
    assert_eq!(menu.len(), 5);
    assert_eq!(menu[0].name, "Big Breakfast Sandwich");
    assert_eq!(menu[4], fresh);
}

#[test]
fn test_delete_missing_menu_item_is_not_found() {
    let store = seeded();

    assert_eq!(
        delete_menu_item(&store, "canteen1", "no-such-item").unwrap(),
        UpdateOutcome::NotFound
    );
}

#[test]
fn test_mutations_on_unknown_canteen_are_not_found() {
    let store = seeded();
    let before = raw(&store);
    let mut ghost = get_canteen_by_id(&store, "canteen1").unwrap().unwrap();
    ghost.id = "canteen9".to_string();

    let outcomes = vec![
        update_canteen(&store, &ghost).unwrap(),
        update_canteen_status(&store, "canteen9", false).unwrap(),
        add_menu_item(&store, "canteen9", &new_item("canteen9")).unwrap(),
        add_closed_date(&store, "canteen9", now(), "Holiday").unwrap(),
        update_profile_image(&store, "canteen9", "x.png").unwrap(),
        add_menu_image(&store, "canteen9", "x.png").unwrap(),
        update_schedule(&store, "canteen9", &ghost.schedule).unwrap(),
    ];

    assert!(outcomes.iter().all(|outcome| *outcome == UpdateOutcome::NotFound));
    assert_eq!(raw(&store), before);
}

#[test]
fn test_menu_image_cap() {
    let store = seeded();
    for n in 1..=5 {
        assert_eq!(
            add_menu_image(&store, "canteen2", &format!("menu-{}.png", n)).unwrap(),
            UpdateOutcome::Updated
        );
    }

    let outcome = add_menu_image(&store, "canteen2", "menu-6.png").unwrap();

    assert_eq!(outcome, UpdateOutcome::LimitReached);
    let images = get_canteen_by_id(&store, "canteen2").unwrap().unwrap().menu_images;
    assert_eq!(
        images,
        vec!["menu-1.png", "menu-2.png", "menu-3.png", "menu-4.png", "menu-5.png"]
    );
}

#[test]
fn test_remove_menu_image_by_value() {
    let store = seeded();
    add_menu_image(&store, "canteen2", "a.png").unwrap();
    add_menu_image(&store, "canteen2", "b.png").unwrap();

    assert_eq!(remove_menu_image(&store, "canteen2", "a.png").unwrap(), UpdateOutcome::Updated);
    assert_eq!(remove_menu_image(&store, "canteen2", "a.png").unwrap(), UpdateOutcome::NotFound);

    let images = get_canteen_by_id(&store, "canteen2").unwrap().unwrap().menu_images;
    assert_eq!(images, vec!["b.png"]);
}

#[test]
fn test_profile_image_set_and_clear() {
    let store = seeded();

    update_profile_image(&store, "canteen5", "front.jpg").unwrap();
    assert_eq!(
        get_canteen_by_id(&store, "canteen5").unwrap().unwrap().profile_image,
        "front.jpg"
    );

    update_profile_image(&store, "canteen5", "").unwrap();
    assert_eq!(
        get_canteen_by_id(&store, "canteen5").unwrap().unwrap().profile_image,
        ""
    );
}

#[test]
fn test_closed_dates_add_and_remove() {
    let store = seeded();
    let holiday = NaiveDate::from_ymd_opt(2024, 8, 15)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    add_closed_date(&store, "canteen1", holiday, "Independence Day").unwrap();
    add_closed_date(&store, "canteen1", holiday, "Independence Day").unwrap();

    let closed = get_canteen_by_id(&store, "canteen1")
        .unwrap()
        .unwrap()
        .schedule
        .closed_dates;
    assert_eq!(closed.len(), 2);
    assert!(closed[0].id.starts_with("closed-"));
    assert_ne!(closed[0].id, closed[1].id);
    assert_eq!(closed[0].reason, "Independence Day");

    assert_eq!(
        remove_closed_date(&store, "canteen1", &closed[0].id).unwrap(),
        UpdateOutcome::Updated
    );
    assert_eq!(
        remove_closed_date(&store, "canteen1", &closed[0].id).unwrap(),
        UpdateOutcome::NotFound
    );
    let remaining = get_canteen_by_id(&store, "canteen1")
        .unwrap()
        .unwrap()
        .schedule
        .closed_dates;
    assert_eq!(remaining, vec![closed[1].clone()]);
}

#[test]
fn test_set_day_shifts_replaces_one_day() {
    let store = seeded();
    let lunch = Shift {
        id: "lunch".to_string(),
        start: "11:30".parse().unwrap(),
        end: "14:30".parse().unwrap(),
    };

    set_day_shifts(&store, "canteen4", DayOfWeek::Sunday, &[lunch.clone()]).unwrap();

    let schedule = get_canteen_by_id(&store, "canteen4").unwrap().unwrap().schedule;
    assert_eq!(schedule.day(DayOfWeek::Sunday).unwrap().shifts, vec![lunch]);
    assert_eq!(schedule.day(DayOfWeek::Saturday).unwrap().shifts.len(), 3);
    assert_eq!(schedule.regular_hours.len(), 7);
}

#[test]
fn test_set_day_shifts_restores_missing_day() {
    let store = seeded();
    let mut schedule = get_canteen_by_id(&store, "canteen1").unwrap().unwrap().schedule;
    schedule.regular_hours.retain(|entry| entry.day != DayOfWeek::Friday);
    update_schedule(&store, "canteen1", &schedule).unwrap();

    set_day_shifts(&store, "canteen1", DayOfWeek::Friday, &[]).unwrap();

    let schedule = get_canteen_by_id(&store, "canteen1").unwrap().unwrap().schedule;
    assert_eq!(schedule.regular_hours.len(), 7);
    assert!(schedule.day(DayOfWeek::Friday).unwrap().shifts.is_empty());
}

#[test]
fn test_update_canteen_replaces_whole_record() {
    let store = seeded();
    let mut canteen = get_canteen_by_id(&store, "canteen3").unwrap().unwrap();
    canteen.menu.clear();
    canteen.special_offers.clear();
    canteen.is_open = false;

    assert_eq!(update_canteen(&store, &canteen).unwrap(), UpdateOutcome::Updated);
    assert_eq!(get_canteen_by_id(&store, "canteen3").unwrap(), Some(canteen));
}

#[test]
fn test_update_canteen_details() {
    let store = seeded();

    update_canteen_details(
        &store,
        "canteen2",
        "CHARAIDEU CAFE",
        "Coffee and snacks",
        "Library Annex",
    )
    .unwrap();

    let canteen = get_canteen_by_id(&store, "canteen2").unwrap().unwrap();
    assert_eq!(canteen.name, "CHARAIDEU CAFE");
    assert_eq!(canteen.description, "Coffee and snacks");
    assert_eq!(canteen.location, "Library Annex");
}

#[test]
fn test_outcome_into_result() {
    use canteen_core::errors::CanteenError;

    assert!(UpdateOutcome::Updated.into_result("Canteen canteen1").is_ok());
    assert!(matches!(
        UpdateOutcome::NotFound.into_result("Canteen canteen9"),
        Err(CanteenError::NotFound(msg)) if msg == "Canteen canteen9 not found"
    ));
    assert!(matches!(
        UpdateOutcome::LimitReached.into_result("Canteen canteen1"),
        Err(CanteenError::LimitReached(_))
    ));
    assert!(matches!(
        UpdateOutcome::Duplicate.into_result("Menu item canteen1-item1"),
        Err(CanteenError::Validation(msg)) if msg == "Menu item canteen1-item1 already exists"
    ));
}
