pub mod greet;

use clap::Parser;
use greetr_common::record::{Account, AdminRecord, UserRecord};

pub const DEFAULT_NAME: &str = "John Doe";
pub const DEFAULT_AGE: i32 = 30;

#[derive(Parser, Debug)]
#[command(name = "greetr")]
#[command(about = "Greets a user by name and age.", version)]
pub struct CommandLine {
    /// Name of the person to greet
    #[arg(short, long, default_value = DEFAULT_NAME)]
    pub name: String,

    /// Age of the person to greet
    #[arg(short, long, default_value_t = DEFAULT_AGE, allow_negative_numbers = true)]
    pub age: i32,

    /// Greet the person as an administrator
    #[arg(long)]
    pub admin: bool,

    /// Reduce output (-q: greeting only, -qq: also silence logs)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub quiet: u8,

    /// Increase log verbosity (-v: debug, -vv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Do not print the banner
    #[arg(long)]
    pub no_banner: bool,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Builds the record described by the arguments.
    pub fn person(&self) -> Account {
        let user = UserRecord::new(self.name.as_str(), self.age);
        if self.admin {
            AdminRecord::from_user(user, true).into()
        } else {
            user.into()
        }
    }
}
