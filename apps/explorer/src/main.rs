use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use explorer_lib::commands::{file_managers, reveal, settings};
use explorer_lib::{logging, LaunchOutcome, MemoryPreferences, PreferenceStore};

/// Explorer - show files and folders in the native file manager
#[derive(Parser, Debug)]
#[command(name = "explorer", version)]
#[command(about = "Reveal a file or folder in the native file manager", long_about = None)]
struct Args {
    /// Preference file to use instead of the per-user default
    #[arg(long, global = true)]
    preferences: Option<PathBuf>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand, Debug)]
enum Action {
    /// Open a folder, or a file's folder with the file selected
    #[command(visible_alias = "open")]
    Reveal {
        /// File or folder to reveal
        path: String,

        /// Command template to use for this call only
        #[arg(short, long)]
        command: Option<String>,
    },
    /// Show or change the stored command template
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// List the file managers found on this machine
    Detect,
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Print the effective command template
    Get,
    /// Store a command template, e.g. `nautilus` or `explorer`
    Set { template: String },
    /// Remove the stored template so the platform default applies
    Reset,
}

fn load_store(path: Option<PathBuf>) -> anyhow::Result<PreferenceStore> {
    let store = match path {
        Some(path) => PreferenceStore::load(path)?,
        None => PreferenceStore::load_default()?,
    };
    Ok(store)
}

fn main() -> anyhow::Result<()> {
    logging::init();
    let args = Args::parse();

    match args.action {
        Action::Reveal { path, command } => {
            let outcome = match command {
                Some(template) => {
                    reveal::reveal_path(&path, MemoryPreferences::with_command(template))
                }
                None => reveal::reveal_path(&path, load_store(args.preferences)?),
            }
            .with_context(|| format!("Could not reveal {}", path))?;

            if let LaunchOutcome::Skipped = outcome {
                anyhow::bail!("Nothing to open for {}", path);
            }
        }
        Action::Config { action } => {
            let mut store = load_store(args.preferences)?;
            match action {
                ConfigAction::Get => {
                    let setting = settings::get_command(&store);
                    if setting.is_default {
                        println!("{} (platform default)", setting.template);
                    } else {
                        println!("{}", setting.template);
                    }
                }
                ConfigAction::Set { template } => {
                    settings::set_command(&mut store, &template)
                        .with_context(|| format!("Could not save {}", store.path().display()))?;
                }
                ConfigAction::Reset => {
                    settings::reset_command(&mut store)
                        .with_context(|| format!("Could not save {}", store.path().display()))?;
                }
            }
        }
        Action::Detect => {
            let report = file_managers::detect();
            println!("Platform: {}", report.platform);
            if report.file_managers.is_empty() {
                println!("No known file manager found");
            }
            for fm in report.file_managers {
                println!("  {:<28} {}", fm.name, fm.command);
            }
        }
    }

    Ok(())
}
