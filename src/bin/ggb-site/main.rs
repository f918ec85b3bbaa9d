mod args;
mod build;
mod debug;
mod error;
#[cfg(feature = "serve")]
mod serve;

use clap::Parser;
use proc_exit::prelude::*;

fn main() {
    human_panic::setup_panic!();
    let result = run();
    proc_exit::exit(result);
}

fn run() -> proc_exit::ExitResult {
    // Let clap exit on its own so `--help` and usage errors print the normal way
    let cli = Cli::parse();

    cli.color.write_global();
    let colored_stderr = !matches!(
        anstream::AutoStream::choice(&std::io::stderr()),
        anstream::ColorChoice::Never
    );
    args::init_logging(&cli.verbose, colored_stderr);

    cli.command.run().with_code(proc_exit::Code::FAILURE)?;

    Ok(())
}

/// Static site shell for the Gas Giant Battles client
#[derive(Debug, Parser)]
#[command(author, version)]
#[command(propagate_version = true)]
struct Cli {
    #[command(flatten)]
    color: colorchoice_clap::Color,

    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity<clap_verbosity_flag::InfoLevel>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, PartialEq, Eq, clap::Subcommand)]
enum Command {
    Build(build::BuildArgs),
    Clean(build::CleanArgs),
    #[cfg(feature = "serve")]
    Serve(serve::ServeArgs),
    #[command(subcommand)]
    Debug(debug::DebugCommands),
}

impl Command {
    fn run(&self) -> error::Result<()> {
        match self {
            Self::Build(cmd) => cmd.run(),
            Self::Clean(cmd) => cmd.run(),
            #[cfg(feature = "serve")]
            Self::Serve(cmd) => cmd.run(),
            Self::Debug(cmd) => cmd.run(),
        }
    }
}

#[test]
fn verify_cli() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
