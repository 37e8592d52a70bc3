//! Worker record
//!
//! The payload attached to `add`, `update` and the other element commands.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::interaction::Interaction;

/// Largest accepted `x` coordinate
pub const MAX_COORDINATE_X: i64 = 647;

/// A worker in the remote collection
///
/// `id` and creation date are assigned by the service, so they are not part
/// of the client-side record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Worker {
    /// Non-empty display name
    pub name: String,

    pub coordinates: Coordinates,

    /// Strictly positive
    pub salary: f32,

    pub position: Option<Position>,

    pub status: Status,

    pub organization: Option<Organization>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// At most MAX_COORDINATE_X
    pub x: i64,
    pub y: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    pub full_name: String,

    /// Strictly positive
    pub employees_count: i64,
}

// =============================================================================
// Enumerations
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Position {
    Manager,
    Labor,
    HeadOfDivision,
    Developer,
    Engineer,
}

impl Position {
    pub const ALL: [Position; 5] = [
        Position::Manager,
        Position::Labor,
        Position::HeadOfDivision,
        Position::Developer,
        Position::Engineer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Manager => "MANAGER",
            Position::Labor => "LABOR",
            Position::HeadOfDivision => "HEAD_OF_DIVISION",
            Position::Developer => "DEVELOPER",
            Position::Engineer => "ENGINEER",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Fired,
    Hired,
    RecommendedForPromotion,
    Regular,
    Probation,
}

impl Status {
    pub const ALL: [Status; 5] = [
        Status::Fired,
        Status::Hired,
        Status::RecommendedForPromotion,
        Status::Regular,
        Status::Probation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Fired => "FIRED",
            Status::Hired => "HIRED",
            Status::RecommendedForPromotion => "RECOMMENDED_FOR_PROMOTION",
            Status::Regular => "REGULAR",
            Status::Probation => "PROBATION",
        }
    }
}

macro_rules! name_parsing {
    ($ty:ty) => {
        impl FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                let wanted = s.trim();
                <$ty>::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| format!("unknown value '{}', expected one of: {}", wanted, list(&<$ty>::ALL)))
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

name_parsing!(Position);
name_parsing!(Status);

fn list<T: fmt::Display>(values: &[T]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

// =============================================================================
// Operator Collection
// =============================================================================

/// Collect a worker field by field, re-prompting on every invalid value
pub fn prompt_worker<I: Interaction + ?Sized>(ui: &mut I) -> Result<Worker> {
    let name = ui.read_unbounded("Enter worker name:", false)?;

    let x = ask(ui, |ui| {
        let raw = ui.read_bounded(
            &format!("Enter coordinate x (at most {}):", MAX_COORDINATE_X),
            i64::MIN as f64,
            MAX_COORDINATE_X as f64,
            false,
        )?;
        Ok(raw.parse::<i64>().map_err(|_| "x must be an integer".to_string()))
    })?;

    let y = ask(ui, |ui| {
        let raw = ui.read_bounded("Enter coordinate y:", f32::MIN as f64, f32::MAX as f64, false)?;
        Ok(raw.parse::<f32>().map_err(|_| "y must be a number".to_string()))
    })?;

    let salary = ask(ui, |ui| {
        let raw = ui.read_bounded("Enter salary (greater than 0):", 0.0, f32::MAX as f64, false)?;
        Ok(match raw.parse::<f32>() {
            Ok(v) if v > 0.0 => Ok(v),
            Ok(_) => Err("salary must be greater than 0".to_string()),
            Err(_) => Err("salary must be a number".to_string()),
        })
    })?;

    let position = ask(ui, |ui| {
        let raw = ui.read_unbounded(
            &format!("Enter position ({}), empty for none:", list(&Position::ALL)),
            true,
        )?;
        Ok(if raw.is_empty() {
            Ok(None)
        } else {
            raw.parse::<Position>().map(Some)
        })
    })?;

    let status = ask(ui, |ui| {
        let raw = ui.read_unbounded(&format!("Enter status ({}):", list(&Status::ALL)), false)?;
        Ok(raw.parse::<Status>())
    })?;

    let full_name = ui.read_unbounded("Enter organization name, empty for none:", true)?;
    let organization = if full_name.is_empty() {
        None
    } else {
        let employees_count = ask(ui, |ui| {
            let raw = ui.read_bounded("Enter employees count (greater than 0):", 1.0, i64::MAX as f64, false)?;
            Ok(raw
                .parse::<i64>()
                .map_err(|_| "employees count must be an integer".to_string()))
        })?;
        Some(Organization {
            full_name,
            employees_count,
        })
    };

    Ok(Worker {
        name,
        coordinates: Coordinates { x, y },
        salary,
        position,
        status,
        organization,
    })
}

/// Repeat `read` until it yields a valid value, displaying each rejection
fn ask<I, T, F>(ui: &mut I, mut read: F) -> Result<T>
where
    I: Interaction + ?Sized,
    F: FnMut(&mut I) -> Result<std::result::Result<T, String>>,
{
    loop {
        match read(ui)? {
            Ok(value) => return Ok(value),
            Err(reason) => ui.display(&reason)?,
        }
    }
}
