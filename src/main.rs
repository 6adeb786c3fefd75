use clap::Parser;

use epi_report::cli::{Cli, Commands};
use epi_report::commands::{run_countries, run_generate, run_init};

fn main() {
    let cli = Cli::parse();
    epi_report::logging::init(cli.verbose, cli.quiet);

    let exit_code = match &cli.command {
        Commands::Generate(args) => run_generate(args, &cli),
        Commands::Countries(args) => run_countries(args),
        Commands::Init(args) => run_init(args),
    };

    std::process::exit(exit_code);
}
