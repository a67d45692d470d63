use clap::Parser;

use sentiment_report::cli::{Cli, Commands};
use sentiment_report::commands::{run_init, run_inspect, run_render};
use sentiment_report::logging;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let exit_code = match &cli.command {
        Commands::Render(args) => run_render(args, &cli),
        Commands::Inspect(args) => run_inspect(args, &cli),
        Commands::Init(args) => run_init(args, &cli),
    };

    std::process::exit(exit_code);
}
