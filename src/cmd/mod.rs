mod generate;

use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use retail_datagen::config::DEFAULT_OUTPUT_FILE;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "retail-datagen")]
#[command(version)]
#[command(
    about = "Generate INSERT statements for the retail order-management schema",
    long_about = None
)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub generate: GenerateArgs,
}

/// Running without a subcommand generates the dataset
#[derive(Args)]
pub struct GenerateArgs {
    /// Output SQL file (overwritten if it exists)
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// YAML config file overriding row counts, id ranges and value bounds
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Do not echo the generated statements to stdout
    #[arg(long)]
    pub no_echo: bool,

    /// Show progress while generating tables
    #[arg(short, long)]
    pub progress: bool,

    /// Generate and report without writing the output file
    #[arg(long)]
    pub dry_run: bool,

    /// Output a JSON run report instead of echoing the statements
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the JSON schema of the --json report
    Schema,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        None => {
            let GenerateArgs {
                output,
                config,
                seed,
                no_echo,
                progress,
                dry_run,
                json,
            } = cli.generate;
            generate::run(output, config, seed, no_echo, progress, dry_run, json)
        }
        Some(Commands::Schema) => generate::print_schema(),
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "retail-datagen",
                &mut io::stdout(),
            );
            Ok(())
        }
    }
}
