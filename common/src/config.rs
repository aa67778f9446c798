#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    /// How much decoration to strip from the output.
    ///
    /// `0` prints everything, `1` prints only the greeting, `2` also silences info logs.
    pub quiet: u8,
    /// Skips the banner at startup.
    pub no_banner: bool,
    /// Disables ANSI colours in terminal output.
    pub no_color: bool,
}
