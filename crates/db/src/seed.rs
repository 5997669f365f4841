use canteen_core::models::{
    canteen::{Canteen, SpecialOffer},
    menu::{MenuCategory, MenuItem},
    schedule::{ClockTime, DayOfWeek, Schedule, Shift, ShiftTime},
    user::{Role, User},
};
use chrono::{Duration, NaiveDateTime};
use eyre::Result;
use tracing::info;

use crate::repositories::{canteen::CANTEENS_KEY, user::USERS_KEY};
use crate::store::KeyValueStore;

/// Writes the seed users and canteens under any key that is still absent.
///
/// Existing data is never touched, so running this repeatedly is harmless.
pub fn initialize_store<S>(store: &S, now: NaiveDateTime) -> Result<()>
where
    S: KeyValueStore + ?Sized,
{
    if store.get(USERS_KEY)?.is_none() {
        info!("Seeding users");
        store.set(USERS_KEY, &serde_json::to_string(&seed_users())?)?;
    }

    if store.get(CANTEENS_KEY)?.is_none() {
        info!("Seeding canteens");
        store.set(CANTEENS_KEY, &serde_json::to_string(&seed_canteens(now))?)?;
    }

    Ok(())
}

pub fn seed_users() -> Vec<User> {
    let mut users = vec![User {
        id: "admin1".to_string(),
        username: "admin".to_string(),
        password: "admin123".to_string(),
        name: "Admin User".to_string(),
        role: Role::Admin,
        canteen_id: None,
    }];

    for (index, (name, _, _)) in CANTEENS.iter().enumerate() {
        let n = index + 1;
        let slug = name.to_lowercase();
        users.push(User {
            id: format!("owner{}", n),
            username: format!("{}_owner", slug),
            password: format!("{}123", slug),
            name: format!("{} Canteen Owner", name),
            role: Role::Owner,
            canteen_id: Some(format!("canteen{}", n)),
        });
    }

    users.push(User {
        id: "guest1".to_string(),
        username: "guest".to_string(),
        password: "guest123".to_string(),
        name: "Guest User".to_string(),
        role: Role::Guest,
        canteen_id: None,
    });

    users
}

const CANTEENS: [(&str, &str, &str); 5] = [
    (
        "NILACHAL",
        "Main canteen located at the university center",
        "University Center, Ground Floor",
    ),
    (
        "CHARAIDEU",
        "Serving the northern academic buildings",
        "North Campus, Building A",
    ),
    (
        "PATKAI",
        "Located near the student dormitories",
        "South Campus, Dorm Complex",
    ),
    (
        "KANCHANJANGA",
        "Near the engineering buildings",
        "East Campus, Engineering Complex",
    ),
    (
        "BHRAHMAPUTRA",
        "Located near sports facilities",
        "West Campus, Sports Center",
    ),
];

pub fn seed_canteens(now: NaiveDateTime) -> Vec<Canteen> {
    CANTEENS
        .iter()
        .enumerate()
        .map(|(index, (name, description, location))| {
            let n = index + 1;
            let id = format!("canteen{}", n);
            Canteen {
                id: id.clone(),
                name: name.to_string(),
                description: description.to_string(),
                location: location.to_string(),
                owner_id: format!("owner{}", n),
                profile_image: String::new(),
                menu_images: vec![],
                is_open: true,
                special_offers: seed_special_offers(&id, now),
                menu: seed_menu(&id),
                schedule: Schedule {
                    canteen_id: id,
                    regular_hours: default_regular_hours(),
                    closed_dates: vec![],
                },
            }
        })
        .collect()
}

const MORNING: (ClockTime, ClockTime) = hours(9, 13);
const AFTERNOON: (ClockTime, ClockTime) = hours(16, 20);
const NIGHT: (ClockTime, ClockTime) = hours(22, 2);

const fn hours(start: u32, end: u32) -> (ClockTime, ClockTime) {
    match (ClockTime::new(start, 0), ClockTime::new(end, 0)) {
        (Some(start), Some(end)) => (start, end),
        _ => panic!("invalid seed hours"),
    }
}

/// Every day: 09:00-13:00, 16:00-20:00 and the overnight 22:00-02:00.
pub fn default_regular_hours() -> Vec<ShiftTime> {
    DayOfWeek::ALL
        .into_iter()
        .enumerate()
        .map(|(index, day)| {
            let n = index + 1;
            let shift = |prefix: &str, (start, end): (ClockTime, ClockTime)| Shift {
                id: format!("{}{}", prefix, n),
                start,
                end,
            };
            ShiftTime {
                id: format!("shift{}", n),
                day,
                shifts: vec![
                    shift("morning", MORNING),
                    shift("afternoon", AFTERNOON),
                    shift("night", NIGHT),
                ],
            }
        })
        .collect()
}

fn seed_menu(canteen_id: &str) -> Vec<MenuItem> {
    let items = [
        (
            "Breakfast Sandwich",
            "Eggs, cheese, and bacon on a toasted bagel",
            5.99,
            MenuCategory::Breakfast,
        ),
        (
            "Chicken Caesar Salad",
            "Fresh romaine lettuce, grilled chicken, parmesan, and croutons",
            8.99,
            MenuCategory::Lunch,
        ),
        (
            "Veggie Burger",
            "Plant-based patty with lettuce, tomato, and special sauce",
            7.99,
            MenuCategory::Lunch,
        ),
        (
            "Iced Coffee",
            "Cold brewed coffee served over ice",
            3.99,
            MenuCategory::Beverages,
        ),
    ];

    items
        .into_iter()
        .enumerate()
        .map(|(index, (name, description, price, category))| MenuItem {
            id: format!("{}-item{}", canteen_id, index + 1),
            name: name.to_string(),
            description: description.to_string(),
            price,
            category,
            image: None,
            available: true,
            canteen_id: canteen_id.to_string(),
        })
        .collect()
}

fn seed_special_offers(canteen_id: &str, now: NaiveDateTime) -> Vec<SpecialOffer> {
    vec![SpecialOffer {
        id: format!("{}-offer1", canteen_id),
        title: "Early Bird Discount".to_string(),
        description: "15% off all breakfast items before 10am".to_string(),
        discount_percentage: Some(15),
        start_date: now,
        end_date: now + Duration::days(30),
        canteen_id: canteen_id.to_string(),
    }]
}
