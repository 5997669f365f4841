//! Plain-text rendering of canteens for the terminal.

use canteen_core::directory::{menu_by_category, AdminStats};
use canteen_core::hours::{current_day_hours, is_open_now, weekly_hours};
use canteen_core::models::canteen::{Canteen, MAX_MENU_IMAGES};
use canteen_core::models::menu::{format_price, MenuItem};
use canteen_core::models::user::User;
use chrono::NaiveDateTime;

pub fn status_label(canteen: &Canteen, now: NaiveDateTime) -> &'static str {
    if is_open_now(canteen, now) {
        "Open now"
    } else {
        "Closed"
    }
}

/// The listing card: name, status, location and today's hours.
pub fn render_card(canteen: &Canteen, now: NaiveDateTime) -> String {
    format!(
        "{} ({}) [{}]\n  {}\n  Today: {}",
        canteen.name,
        canteen.id,
        status_label(canteen, now),
        canteen.location,
        current_day_hours(&canteen.schedule, now)
    )
}

pub fn render_list(canteens: &[&Canteen], now: NaiveDateTime) -> String {
    if canteens.is_empty() {
        return "No canteens found".to_string();
    }

    canteens
        .iter()
        .map(|canteen| render_card(canteen, now))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn render_menu_item(lines: &mut Vec<String>, item: &MenuItem) {
    let mut line = format!(
        "    {} - {} [{}]",
        item.name,
        format_price(item.price),
        item.id
    );
    if !item.available {
        line.push_str(" (unavailable)");
    }
    lines.push(line);
    lines.push(format!("      {}", item.description));
}

/// The detail page of one canteen.
pub fn render_detail(canteen: &Canteen, now: NaiveDateTime) -> String {
    let mut lines = vec![
        format!("{} [{}]", canteen.name, status_label(canteen, now)),
        canteen.description.clone(),
        format!("Location: {}", canteen.location),
    ];
    if !canteen.is_open {
        lines.push("Temporarily closed by the owner".to_string());
    }
    lines.push(format!("Today: {}", current_day_hours(&canteen.schedule, now)));

    lines.push(String::new());
    lines.push("Weekly hours:".to_string());
    for (day, hours) in weekly_hours(&canteen.schedule) {
        lines.push(format!("  {:<9}  {}", day, hours));
    }

    let upcoming: Vec<_> = canteen
        .schedule
        .closed_dates
        .iter()
        .filter(|closed| closed.date.date() >= now.date())
        .collect();
    if !upcoming.is_empty() {
        lines.push(String::new());
        lines.push("Closed dates:".to_string());
        for closed in upcoming {
            lines.push(format!("  {}  {}", closed.date.date(), closed.reason));
        }
    }

    let offers: Vec<_> = canteen
        .special_offers
        .iter()
        .filter(|offer| offer.is_active(now))
        .collect();
    if !offers.is_empty() {
        lines.push(String::new());
        lines.push("Special offers:".to_string());
        for offer in offers {
            lines.push(match offer.discount_percentage {
                Some(discount) => format!("  {} ({}% off)", offer.title, discount),
                None => format!("  {}", offer.title),
            });
            lines.push(format!(
                "    {} (until {})",
                offer.description,
                offer.end_date.date()
            ));
        }
    }

    lines.push(String::new());
    lines.push("Menu:".to_string());
    let grouped = menu_by_category(canteen);
    if grouped.is_empty() {
        lines.push("  No menu items yet".to_string());
    }
    for (category, items) in grouped {
        lines.push(format!("  {}", category));
        for item in items {
            render_menu_item(&mut lines, item);
        }
    }

    if !canteen.menu_images.is_empty() {
        lines.push(String::new());
        lines.push(format!(
            "Menu images ({}/{}):",
            canteen.menu_images.len(),
            MAX_MENU_IMAGES
        ));
        lines.extend(canteen.menu_images.iter().map(|image| format!("  {}", image)));
    }

    lines.join("\n").trim_end().to_string()
}

/// Owner's view of the closed dates, with ids for removal.
pub fn render_closed_dates(canteen: &Canteen) -> String {
    if canteen.schedule.closed_dates.is_empty() {
        return "No closed dates".to_string();
    }

    canteen
        .schedule
        .closed_dates
        .iter()
        .map(|closed| format!("{}  {}  {}", closed.id, closed.date.date(), closed.reason))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_weekly_hours(canteen: &Canteen) -> String {
    weekly_hours(&canteen.schedule)
        .into_iter()
        .map(|(day, hours)| format!("{:<9}  {}", day, hours))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_stats(stats: &AdminStats) -> String {
    format!(
        "Total canteens: {}\nOpen canteens: {}\nMenu items: {}",
        stats.total_canteens, stats.open_canteens, stats.total_menu_items
    )
}

pub fn render_user(user: &User) -> String {
    match &user.canteen_id {
        Some(canteen_id) => format!(
            "{} ({}, {}) managing {}",
            user.name, user.username, user.role, canteen_id
        ),
        None => format!("{} ({}, {})", user.name, user.username, user.role),
    }
}
