mod commands;
mod terminal;

use commands::{CommandLine, greet};
use greetr_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    let cfg = Config {
        quiet: commands.quiet,
        no_banner: commands.no_banner,
        no_color: commands.no_color,
    };

    logging::init_logging(&cfg, commands.verbose);
    print::initialize(&cfg);
    print::banner(&cfg);

    greet::greet(commands.person(), &cfg)
}
