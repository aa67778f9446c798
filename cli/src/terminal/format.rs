use colored::*;
use greetr_common::record::{Account, Profile};

use crate::terminal::colors;

pub type Detail = (String, ColoredString);

/// Key/value lines describing a record.
pub fn account_to_details(person: &Account) -> Vec<Detail> {
    let mut details: Vec<Detail> = vec![
        (String::from("Kind"), person.kind().color(colors::ACCENT)),
        (String::from("Name"), name_to_value(person.name())),
        (String::from("Age"), person.age().to_string().normal()),
    ];

    if let Account::Admin(admin) = person {
        let flag: ColoredString = if admin.is_admin() {
            "yes".color(colors::ADMIN).bold()
        } else {
            "no".normal()
        };
        details.push((String::from("Admin"), flag));
    }

    details
}

fn name_to_value(name: &str) -> ColoredString {
    if name.is_empty() {
        "(empty)".dimmed()
    } else {
        name.normal()
    }
}
