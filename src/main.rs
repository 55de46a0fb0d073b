use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use ha_finance_panel::cli::{
    handle_account_command, handle_records_command, handle_transactions_command, AccountCommands,
    RecordsArgs, TransactionsArgs,
};
use ha_finance_panel::config::{PanelPaths, Settings};
use ha_finance_panel::host::{FinanceClient, ProcessChannel};
use ha_finance_panel::i18n::Translator;
use ha_finance_panel::logging::init_file_logger;
use ha_finance_panel::panel::Panel;
use ha_finance_panel::tui::run_tui;

#[derive(Parser)]
#[command(
    name = "ha-finance",
    author = "Kaylee Beyene",
    version,
    about = "Terminal account-management panel for Home Assistant finance records",
    long_about = "ha-finance talks to the Home Assistant finance record integration \
                  through a bridge command and lets you browse accounts, transactions \
                  and recurring plans, record new entries and adjust balances."
)]
struct Cli {
    /// Bridge command to the host, overriding host_command in config.json
    #[arg(long, global = true, env = "HA_FINANCE_HOST", value_name = "COMMAND")]
    host: Option<String>,

    /// Display language tag (en, zh-Hant, zh-CN)
    #[arg(long, global = true, env = "HA_FINANCE_LANGUAGE")]
    language: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Account commands
    #[command(subcommand)]
    Account(AccountCommands),

    /// Show the merged All Records view for an account
    Records(RecordsArgs),

    /// List an account's transactions
    #[command(alias = "txn")]
    Transactions(TransactionsArgs),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = PanelPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    if let Some(host) = &cli.host {
        settings.host_command = host.split_whitespace().map(String::from).collect();
    }
    if let Some(language) = &cli.language {
        settings.language = language.clone();
    }

    let command = cli.command.unwrap_or(Commands::Tui);
    if let Commands::Config = command {
        print_config(&paths, &settings);
        return Ok(());
    }

    init_file_logger(&paths, &settings)?;
    let translator = Translator::for_tag(&settings.language);
    let channel = ProcessChannel::from_settings(&settings).context("Failed to start host bridge")?;
    let mut client = FinanceClient::new(Box::new(channel));

    match command {
        Commands::Tui => {
            let panel = Panel::new(client, translator).with_chart_months(settings.chart_months);
            run_tui(panel)?;
        }
        Commands::Account(cmd) => handle_account_command(&mut client, &translator, cmd)?,
        Commands::Records(args) => handle_records_command(&mut client, &translator, args)?,
        Commands::Transactions(args) => {
            handle_transactions_command(&mut client, &translator, args)?
        }
        Commands::Config => {}
    }

    Ok(())
}

fn print_config(paths: &PanelPaths, settings: &Settings) {
    println!("HA Finance Panel Configuration");
    println!("==============================");
    println!("Config directory: {}", paths.base_dir().display());
    println!("Settings file:    {}", paths.settings_file().display());
    println!("Log file:         {}", paths.log_file().display());
    println!();
    println!("Settings:");
    println!("  Language:     {}", settings.language);
    println!("  Chart months: {}", settings.chart_months);
    println!("  Log level:    {}", settings.log_level);
    if settings.host_command.is_empty() {
        println!("  Host command: (not set)");
    } else {
        println!("  Host command: {}", settings.host_command.join(" "));
    }
}
