use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use afford::cli::{
    handle_export_command, handle_template_command, handle_view_command, InputArgs, View,
};
use afford::config::{AffordPaths, Settings};
use afford::export::{export_scenario, ExportFormat, ScenarioFormat};
use afford::models::AffordabilityInputs;
use afford::services::AffordabilityService;
use afford::telemetry;

#[derive(Parser)]
#[command(
    name = "afford",
    version,
    about = "Terminal mortgage affordability calculator",
    long_about = "afford compares a monthly mortgage payment and household expenses \
                  against salary, classifies the debt-to-income risk, and suggests \
                  what to change. Nothing is sent anywhere; every figure is computed \
                  locally from the inputs you give it."
)]
struct Cli {
    #[command(flatten)]
    inputs: InputArgs,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show risk level, obligations overview and affordability guidelines (default)
    #[command(alias = "summary")]
    Dashboard,

    /// Show itemized expenses
    Expenses,

    /// Show expense breakdown, recommendations and annual projections
    Analysis,

    /// Show all three views
    Report,

    /// Export the full assessment
    Export {
        /// Output format
        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write the current inputs as a scenario file
    Template {
        /// Scenario format (defaults to the output extension, or JSON)
        #[arg(long, value_enum)]
        format: Option<ScenarioFormat>,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write default settings and a baseline scenario
    Init {
        /// Overwrite an existing saved scenario
        #[arg(long)]
        force: bool,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = AffordPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    telemetry::init(&telemetry::filter_for_verbosity(
        cli.verbose,
        &settings.log_level,
    ))?;

    let color = settings.color_output && std::io::stdout().is_terminal();

    match cli.command {
        Some(Commands::Init { force }) => {
            println!("Initializing afford at: {}", paths.base_dir().display());
            settings.save(&paths)?;

            let scenario_path = paths.scenario_file();
            if scenario_path.exists() && !force {
                println!(
                    "Keeping existing scenario: {} (use --force to replace it)",
                    scenario_path.display()
                );
            } else {
                let inputs =
                    AffordabilityInputs::baseline().with_currency(settings.default_currency);
                let mut file = std::fs::File::create(&scenario_path)?;
                export_scenario(&inputs, ScenarioFormat::Json, &mut file)?;
                info!(path = %scenario_path.display(), "wrote baseline scenario");
                println!("Baseline scenario written to: {}", scenario_path.display());
            }
            println!("Initialization complete!");
            println!();
            println!("Edit the scenario file, then run 'afford report'.");
        }
        Some(Commands::Config) => {
            println!("afford Configuration");
            println!("====================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Scenario file:  {}", paths.scenario_file().display());
            println!();
            println!("Settings:");
            println!("  Default currency: {}", settings.default_currency);
            println!("  Color output:     {}", settings.color_output);
            println!("  Log level:        {}", settings.log_level);
        }
        Some(Commands::Template { format, output }) => {
            let inputs = cli.inputs.resolve(&paths, &settings)?;
            handle_template_command(&inputs, format, output)?;
        }
        command => {
            let inputs = cli.inputs.resolve(&paths, &settings)?;
            let assessment = AffordabilityService::new(&inputs).assess();

            match command {
                Some(Commands::Export { format, output }) => {
                    handle_export_command(&assessment, format, output)?;
                }
                Some(Commands::Expenses) => handle_view_command(&assessment, View::Expenses, color),
                Some(Commands::Analysis) => handle_view_command(&assessment, View::Analysis, color),
                Some(Commands::Report) => handle_view_command(&assessment, View::All, color),
                _ => handle_view_command(&assessment, View::Dashboard, color),
            }
        }
    }

    Ok(())
}
