use std::io;

use anyhow::Context;
use colored::*;
use tracing::debug;

use crate::{mprint, terminal::{colors, format, print}};
use greetr_common::{config::Config, record::{Account, Profile}};
use greetr_core::Greeter;

pub fn greet(person: Account, cfg: &Config) -> anyhow::Result<()> {
    debug!(kind = person.kind(), admin = person.is_admin(), "record built from arguments");

    print_record(&person, cfg);

    let stdout = io::stdout();
    let mut greeter = Greeter::new(stdout.lock());
    let greeting = greeter
        .greet(&person)
        .with_context(|| format!("could not greet {}", person.name()))?;

    if cfg.quiet == 0 {
        print::fat_separator();
        let done: ColoredString = format!("Greeted {}", greeting.name().bold())
            .color(colors::TEXT_DEFAULT);
        print::centerln(&done.to_string());
    }

    Ok(())
}

fn print_record(person: &Account, cfg: &Config) {
    if cfg.quiet > 0 {
        return;
    }

    print::header("record", cfg.quiet);

    let details = format::account_to_details(person);
    print::set_key_width(details.iter().map(|(key, _)| key.as_str()));
    for (key, value) in details {
        print::aligned_line(&key, value);
    }

    mprint!();
}
