use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use budgetpro::cli::{
    handle_category_command, handle_export_command, handle_goal_command, handle_goals_command,
    handle_import_command, handle_income_command, handle_insights_command, handle_list_command,
    handle_report_command, handle_summary_command, load_transactions, parse_date_arg,
    parse_month_arg, CategoryCommands, GoalCommands, IncomeCommands, ListArgs,
};
use budgetpro::config::{BudgetPaths, Settings, SettingsFormat};
use budgetpro::models::today;
use budgetpro::storage::Storage;

#[derive(Parser)]
#[command(
    name = "budgetpro",
    version,
    about = "Personal finance tracker: CSV import, budget reconciliation and goal tracking",
    long_about = "BudgetPro imports transactions from CSV files, compares spending \
                  with your monthly budget, and tracks spending and savings goals. \
                  Transactions live only for the duration of a command; the budget, \
                  income and goals are kept in the settings file."
)]
struct Cli {
    /// Settings file to use instead of the default location
    #[arg(long, global = true, env = "BUDGETPRO_CONFIG")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default settings file
    Init {
        /// Overwrite an existing settings file
        #[arg(long)]
        force: bool,
    },

    /// Show current configuration and paths
    Config,

    /// Import CSV files and report what was accepted
    Import {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// List transactions from CSV files
    #[command(alias = "ls")]
    List {
        #[arg(required = true)]
        files: Vec<PathBuf>,
        #[command(flatten)]
        args: ListArgs,
    },

    /// Budget vs actual for one month
    Report {
        files: Vec<PathBuf>,
        /// Month to report on (YYYY-MM), defaults to the current month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Progress on spending and savings goals
    Goals {
        files: Vec<PathBuf>,
        /// Reference date (YYYY-MM-DD) for deadlines, defaults to today
        #[arg(long)]
        today: Option<String>,
    },

    /// Dashboard totals and breakdowns
    Summary {
        files: Vec<PathBuf>,
    },

    /// Re-export imported transactions as CSV
    Export {
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Output file, defaults to transactions.csv
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the data that an insight request would send
    Insights {
        files: Vec<PathBuf>,
        /// Print the payload as JSON instead of the prompt text
        #[arg(long)]
        json: bool,
    },

    /// Budget category management
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Income profile management
    #[command(subcommand)]
    Income(IncomeCommands),

    /// Goal management
    #[command(subcommand)]
    Goal(GoalCommands),
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let paths = match cli.config {
        Some(file) => BudgetPaths::with_settings_file(file),
        None => BudgetPaths::new()?,
    };
    let mut settings = Settings::load_or_create(&paths)?;
    let storage = Storage::from_settings(&settings)?;
    let today = today();

    let changed = match cli.command {
        Some(Commands::Init { force }) => {
            if paths.is_initialized() && !force {
                println!(
                    "Settings already exist at {} (use --force to overwrite)",
                    paths.settings_file().display()
                );
            } else {
                Settings::default().save(&paths)?;
                println!("Wrote default settings to {}", paths.settings_file().display());
            }
            false
        }
        Some(Commands::Config) => {
            let file = paths.settings_file();
            println!("BudgetPro Configuration");
            println!("=======================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", file.display());
            println!("Initialized:      {}", paths.is_initialized());
            println!();
            print!("{}", settings.render(SettingsFormat::from_path(&file))?);
            println!();
            false
        }
        Some(Commands::Import { files }) => {
            handle_import_command(&storage, &files, today)?;
            false
        }
        Some(Commands::List { files, args }) => {
            load_transactions(&storage, &files, today)?;
            handle_list_command(&storage, &args)?;
            false
        }
        Some(Commands::Report { files, month }) => {
            let month = parse_month_arg(month.as_deref(), today)?;
            load_transactions(&storage, &files, today)?;
            handle_report_command(&storage, month)?;
            false
        }
        Some(Commands::Goals { files, today: reference }) => {
            let reference = parse_date_arg(reference.as_deref(), today)?;
            load_transactions(&storage, &files, today)?;
            handle_goals_command(&storage, reference)?;
            false
        }
        Some(Commands::Summary { files }) => {
            load_transactions(&storage, &files, today)?;
            handle_summary_command(&storage)?;
            false
        }
        Some(Commands::Export { files, output }) => {
            load_transactions(&storage, &files, today)?;
            handle_export_command(&storage, output)?;
            false
        }
        Some(Commands::Insights { files, json }) => {
            load_transactions(&storage, &files, today)?;
            handle_insights_command(&storage, json)?;
            false
        }
        Some(Commands::Category(cmd)) => handle_category_command(&storage, cmd)?,
        Some(Commands::Income(cmd)) => handle_income_command(&storage, cmd)?,
        Some(Commands::Goal(cmd)) => handle_goal_command(&storage, cmd)?,
        None => {
            println!("BudgetPro - personal finance tracking");
            println!();
            println!("Run 'budgetpro --help' for usage information.");
            false
        }
    };

    if changed {
        storage.apply_to_settings(&mut settings)?;
        settings.save(&paths)?;
        log::debug!("Saved settings to {}", paths.settings_file().display());
    }

    Ok(())
}
