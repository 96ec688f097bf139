use clap::{Parser, Subcommand};
use git_decorator::commands::*;
use git_decorator::core::{
    error::{GitDecoratorError, Result},
    print_error,
};
use std::env;

#[derive(Parser)]
#[command(name = "git-decorator")]
#[command(about = "Show working-tree status decorations for files, folders and groupings")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Print JSON instead of colored text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decorate files and folders (the repository root when no paths are given)
    Decorate {
        /// Paths relative to the current directory, or absolute
        paths: Vec<String>,
    },
    /// Decorate paths as one named collection and show the aggregate
    Group {
        /// Name of the collection
        name: String,
        /// Member paths
        #[arg(required = true)]
        paths: Vec<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if env::var_os("RUST_LOG").is_none() {
        env::set_var("RUST_LOG", if cli.debug { "debug" } else { "warn" });
    }
    env_logger::init();

    let result = match cli.command {
        Commands::Decorate { paths } => execute_decorate(paths, cli.json),
        Commands::Group { name, paths } => execute_group(name, paths, cli.json),
    };

    exit_on_error(result);
}

fn exit_on_error(result: Result<()>) {
    if let Err(e) = result {
        if !matches!(e, GitDecoratorError::DecorationFailed { .. }) {
            log::debug!("Command failed: {e:?}");
        }
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
