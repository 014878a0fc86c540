//! Derived display fields.
//!
//! Everything here is a pure function of a patient record (and, for ages, of
//! the evaluation date). Renderers only ever format the values produced here.

use chrono::{Datelike, Local, NaiveDate};
use serde::Serialize;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const NEVER: &str = "Never";
pub const INVALID_DATE: &str = "Invalid date";

/// Source of "today" for age computation.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

/// Completed years between `birth` and `today`.
///
/// The year count drops by one while today's month/day is still before the
/// birth month/day; the anniversary itself counts as reached.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

pub fn age(date_of_birth: &str, today: NaiveDate) -> Option<i32> {
    parse_date(date_of_birth).map(|birth| age_on(birth, today))
}

/// Renders a calendar date as `Mon D, YYYY`.
pub fn format_date(value: Option<&str>) -> String {
    match value {
        None => NEVER.to_string(),
        Some(raw) => match parse_date(raw) {
            Some(date) => date.format("%b %-d, %Y").to_string(),
            None => INVALID_DATE.to_string(),
        },
    }
}

pub fn avatar_initials(first_name: &str, last_name: &str) -> String {
    first_name
        .chars()
        .next()
        .into_iter()
        .chain(last_name.chars().next())
        .collect()
}

fn first_code(name: &str) -> u32 {
    name.chars().next().map(|c| c as u32).unwrap_or(0)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AvatarColor {
    VioletIndigo,
    CyanBlue,
    GreenEmerald,
    AmberOrange,
    PinkRose,
    PurpleViolet,
}

impl AvatarColor {
    pub const PALETTE: [AvatarColor; 6] = [
        AvatarColor::VioletIndigo,
        AvatarColor::CyanBlue,
        AvatarColor::GreenEmerald,
        AvatarColor::AmberOrange,
        AvatarColor::PinkRose,
        AvatarColor::PurpleViolet,
    ];

    pub fn for_names(first_name: &str, last_name: &str) -> Self {
        Self::PALETTE[avatar_palette_index(first_name, last_name)]
    }
}

/// `(code(first[0]) + code(last[0])) mod palette size`; stable per patient.
pub fn avatar_palette_index(first_name: &str, last_name: &str) -> usize {
    let sum = first_code(first_name) as usize + first_code(last_name) as usize;
    sum % AvatarColor::PALETTE.len()
}
