use clap::{
    Parser,
    Subcommand,
};
use prpcore::{
    operation::Operation,
    role::Roles,
};
use prpctrl::platform::Builder as PlatformBuilder;
use std::path::PathBuf;

#[derive(Debug, Parser)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[clap(long, value_name = "PRPCTRL_RULES_FILE", env = "PRPCTRL_RULES_FILE")]
    rules_file: PathBuf,
    /// Skip entries outside the recognized operations instead of
    /// rejecting the file
    #[clap(long)]
    lenient: bool,
    #[clap(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compile the protection rules, reporting any problem found
    Compile,
    /// Evaluate a property access against the compiled rules
    #[command(arg_required_else_help = true)]
    Check {
        property: String,
        operation: Operation,
        /// Roles held by the caller, as a comma-separated list
        roles: Roles,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Cli::parse();
    stderrlog::new()
        .module(module_path!())
        .module("prprules")
        .verbosity((args.verbose as usize) + 1)
        .timestamp(stderrlog::Timestamp::Second)
        .init()
        .unwrap();

    let platform = PlatformBuilder::new()
        .source_file(&args.rules_file)
        .lenient_keys(args.lenient)
        .build()?;

    match args.command {
        Commands::Compile => {
            println!(
                "{}: compiled {} protection rules",
                args.rules_file.display(),
                platform.rules().len(),
            );
        }
        Commands::Check { property, operation, roles } => {
            println!("{}", platform.decide(&property, operation, &roles));
        }
    }
    Ok(())
}
