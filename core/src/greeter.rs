use std::io::{self, Write};

use greetr_common::record::Profile;
use thiserror::Error;
use tracing::debug;

use crate::greeting::{Greeting, greet};

#[derive(Debug, Error)]
pub enum GreetError {
    /// The output sink rejected the greeting.
    #[error("failed to write greeting")]
    Io(#[from] io::Error),
}

/// Writes one greeting per line to a sink.
pub struct Greeter<W: Write> {
    sink: W,
}

impl<W: Write> Greeter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    pub fn greet<P: Profile + ?Sized>(&mut self, profile: &P) -> Result<Greeting, GreetError> {
        let greeting = greet(profile);

        writeln!(self.sink, "{greeting}")?;
        self.sink.flush()?;

        debug!(
            name = greeting.name(),
            age = greeting.age(),
            admin = profile.is_admin(),
            "greeting written"
        );
        Ok(greeting)
    }

    pub fn into_inner(self) -> W {
        self.sink
    }
}
