//! Form rules checked before any store mutation.

use crate::errors::{CanteenError, CanteenResult};
use crate::models::menu::MenuItem;
use crate::models::schedule::Shift;

pub fn validate_menu_item(item: &MenuItem) -> CanteenResult<()> {
    let mut problems = Vec::new();

    if item.name.trim().is_empty() {
        problems.push("Name is required");
    }
    if item.description.trim().is_empty() {
        problems.push("Description is required");
    }
    if !item.price.is_finite() {
        problems.push("Price must be a number");
    } else if item.price <= 0.0 {
        problems.push("Price must be greater than zero");
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(CanteenError::Validation(problems.join("; ")))
    }
}

/// The shift editor only accepts shifts that end after they start on the same day.
pub fn validate_day_shifts(shifts: &[Shift]) -> CanteenResult<()> {
    match shifts.iter().find(|shift| shift.end <= shift.start) {
        Some(shift) => Err(CanteenError::Validation(format!(
            "End time must be after start time ({}-{})",
            shift.start, shift.end
        ))),
        None => Ok(()),
    }
}

pub fn validate_closed_date_reason(reason: &str) -> CanteenResult<()> {
    if reason.trim().is_empty() {
        return Err(CanteenError::Validation(
            "Please provide a reason for closing".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_canteen_details(
    name: &str,
    description: &str,
    location: &str,
) -> CanteenResult<()> {
    if [name, description, location]
        .iter()
        .any(|field| field.trim().is_empty())
    {
        return Err(CanteenError::Validation("All fields are required".to_string()));
    }
    Ok(())
}
