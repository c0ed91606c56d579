//! Declarative key-alias tables for upstream payloads.
//!
//! Each canonical field lists its accepted spellings in priority order.
//! Extraction consults these tables through [`lookup`]; nothing else in the
//! codebase is allowed to probe alternative spellings ad hoc.

use serde_json::{Map, Value};

/// Token keys on the validate response, in priority order.
pub const TOKEN: &[&str] = &["Result", "result", "Token", "token"];

/// Citizen identifier spellings. Presence of one of these marks an object
/// as the citizen record.
pub const CITIZEN_ID: &[&str] = &["citizenId", "CitizenID", "citizen_id", "CITIZEN_ID"];

pub const USER_ID: &[&str] = &["userId", "UserID", "UserId", "user_id"];

pub const FIRST_NAME: &[&str] = &["firstName", "FirstName", "first_name"];

pub const LAST_NAME: &[&str] = &["lastName", "LastName", "last_name"];

pub const DATE_OF_BIRTH: &[&str] = &[
    "dateOfBirthString",
    "DateOfBirthString",
    "date_of_birth_string",
    "dateOfBirth",
    "DateOfBirth",
];

pub const MOBILE: &[&str] = &["mobile", "Mobile", "mobileNo", "mobile_no"];

pub const EMAIL: &[&str] = &["email", "Email", "EMAIL"];

pub const NOTIFICATION: &[&str] = &["notification", "Notification"];

/// Return the first alias present in the object, in table order.
pub fn lookup<'a>(object: &'a Map<String, Value>, aliases: &[&str]) -> Option<&'a Value> {
    aliases.iter().find_map(|key| object.get(*key))
}
