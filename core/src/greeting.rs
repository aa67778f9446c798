use std::fmt;

use greetr_common::record::Profile;
use greetr_common::text::capitalize;

/// A greeting ready to be displayed.
///
/// Renders as `Hello, <name>. You are <age> years old.`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeting {
    name: String,
    age: i32,
}

impl Greeting {
    /// The capitalized name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i32 {
        self.age
    }
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hello, {}. You are {} years old.", self.name, self.age)
    }
}

/// Builds the greeting for any record.
pub fn greet<P: Profile + ?Sized>(profile: &P) -> Greeting {
    Greeting {
        name: capitalize(profile.name()),
        age: profile.age(),
    }
}
