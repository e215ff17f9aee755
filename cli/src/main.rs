use clap::Parser;
use pullsift_cli::logging::{self, Verbosity};
use pullsift_cli::{Cli, Command, commands};
use pullsift_core::BossRegistry;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init(Verbosity::from_flags(cli.verbose, cli.quiet));

    let registry = BossRegistry::builtin();
    let result = match cli.command {
        Command::Clean(args) => commands::clean(args, &registry),
        Command::Count(args) => commands::count(args, &registry),
        Command::Bosses => {
            commands::bosses(&registry);
            Ok(())
        }
    };

    if let Err(err) = &result {
        logging::log_error_chain(&**err);
    }
    result
}
