#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;

use std::env;
use std::io;
use std::path;

use anyhow::bail;
use anyhow::Result;
use clap::builder::PossibleValuesParser;
use clap::value_parser;
use clap::Arg;
use clap::ArgAction;
use clap::ArgGroup;
use clap::ArgMatches;
use clap::Command;
use clap_complete::generate;
use clap_complete::Generator;
use clap_complete::Shell;
use strum::VariantNames;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::application::ui;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::configuration::OutputFormat;
use crate::domain::models::FileUpload;
use crate::domain::models::GenerationMethod;
use crate::domain::services::AppState;
use crate::infrastructure::generators::remote::RemoteGenerator;

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
    std::process::exit(0);
}

pub fn log_dir() -> path::PathBuf {
    if let Ok(dir) = env::var("QUIZGEN_LOG_DIR") {
        return path::PathBuf::from(dir);
    }

    return dirs::cache_dir()
        .unwrap_or_else(|| return env::temp_dir())
        .join("quizgen");
}

async fn create_config_file() -> Result<()> {
    let config_file_path_str = Config::default(ConfigKey::ConfigFile);
    let config_file_path = path::PathBuf::from(&config_file_path_str);
    if config_file_path.exists() {
        bail!(format!(
            "Config file already exists at {config_file_path_str}"
        ));
    }

    if let Some(parent) = config_file_path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent).await?;
        }
    }

    let mut file = fs::File::create(&config_file_path).await?;
    file.write_all(Config::serialize_default(build()).as_bytes())
        .await?;

    println!("Created default config file at {config_file_path_str}");
    return Ok(());
}

/// Applies the `generate` arguments to the form, reading any referenced files
/// from disk.
pub async fn fill_form(app_state: &mut AppState, matches: &ArgMatches) -> Result<()> {
    if let Some(notes) = matches.get_one::<String>("notes") {
        app_state.controller.select_method(GenerationMethod::Notes);
        app_state.controller.set_notes(notes);
    } else if let Some(notes_file) = matches.get_one::<String>("notes-file") {
        let notes = fs::read_to_string(notes_file).await?;
        app_state.controller.select_method(GenerationMethod::Notes);
        app_state.controller.set_notes(&notes);
    } else if let Some(file) = matches.get_one::<String>("file") {
        let upload = FileUpload::from_path(path::Path::new(file)).await?;
        app_state.controller.select_method(GenerationMethod::File);
        app_state.controller.set_file(upload);
    }

    return Ok(());
}

async fn generate_quiz(matches: &ArgMatches) -> Result<()> {
    let mut app_state = AppState::new(Box::<RemoteGenerator>::default());
    fill_form(&mut app_state, matches).await?;
    app_state.generate().await?;

    let output = Config::get(ConfigKey::Output);
    match OutputFormat::parse(&output) {
        Some(OutputFormat::Json) => {
            println!(
                "{}",
                serde_json::to_string_pretty(app_state.session.questions())?
            );
        }
        Some(OutputFormat::Text) => {
            println!("{}", ui::format_quiz(app_state.session.questions()));
        }
        None => bail!(format!("Unknown output format {output}")),
    }

    return Ok(());
}

fn subcommand_completions() -> Command {
    return Command::new("completions")
        .about("Generates shell completions.")
        .arg(
            clap::Arg::new("shell")
                .short('s')
                .long("shell")
                .help("Which shell to generate completions for.")
                .action(ArgAction::Set)
                .value_parser(value_parser!(Shell))
                .required(true),
        );
}

fn subcommand_config() -> Command {
    return Command::new("config")
        .about("Configuration file options.")
        .subcommand(
            Command::new("create").about("Saves the default config file to the configuration file path. This command will fail if the file exists already.")
        )
        .subcommand(
            Command::new("default").about("Outputs the default configuration file to stdout.")
        )
        .subcommand(
            Command::new("path").about("Returns the default path for the configuration file.")
        );
}

fn subcommand_debug() -> Command {
    return Command::new("debug")
        .about("Debug helpers for QuizGen")
        .hide(true)
        .subcommand(
            Command::new("log-path").about("Output path to debug log file generated when running QuizGen with environment variable RUST_LOG=quizgen")
        )
        .subcommand(
            Command::new("enum-config").about("List all config keys as strings.")
        );
}

fn subcommand_generate() -> Command {
    return Command::new("generate")
        .about("Generate a quiz once and print it to stdout.")
        .arg(
            Arg::new("notes")
                .short('n')
                .long("notes")
                .num_args(1)
                .help("Notes text to generate questions from."),
        )
        .arg(
            Arg::new("notes-file")
                .long("notes-file")
                .num_args(1)
                .help("Path to a file whose contents are sent as notes."),
        )
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .num_args(1)
                .help("Path to a .txt or .pdf document to upload."),
        )
        .group(
            ArgGroup::new("generate-source")
                .args(["notes", "notes-file", "file"])
                .required(true),
        );
}

pub fn build() -> Command {
    let about = format!(
        "{}\n\nVersion: {}",
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION"),
    );

    return Command::new("quizgen")
        .about(about)
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .arg_required_else_help(false)
        .subcommand(Command::new("quiz").about("Start the interactive quiz form. This is the default."))
        .subcommand(subcommand_generate())
        .subcommand(subcommand_completions())
        .subcommand(subcommand_config())
        .subcommand(subcommand_debug())
        .subcommand(Command::new("manpages").about("Generates manpages and outputs to stdout."))
        .arg(
            Arg::new(ConfigKey::ConfigFile.to_string())
                .short('c')
                .long(ConfigKey::ConfigFile.to_string())
                .env("QUIZGEN_CONFIG_FILE")
                .num_args(1)
                .help(format!("Path to configuration file [default: {}]", Config::default(ConfigKey::ConfigFile)))
                .global(true)
        )
        .arg(
            Arg::new(ConfigKey::Output.to_string())
                .short('o')
                .long(ConfigKey::Output.to_string())
                .env("QUIZGEN_OUTPUT")
                .num_args(1)
                .help(format!("Output format used when printing generated quizzes. [default: {}]", Config::default(ConfigKey::Output)))
                .value_parser(PossibleValuesParser::new(OutputFormat::VARIANTS))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::ServiceURL.to_string())
                .short('u')
                .long(ConfigKey::ServiceURL.to_string())
                .env("QUIZGEN_SERVICE_URL")
                .num_args(1)
                .help(format!("Base URL of the quiz generation service. [default: {}]", Config::default(ConfigKey::ServiceURL)))
                .global(true),
        );
}

/// Parses arguments and runs one-shot subcommands. Returns true when the
/// interactive quiz form should start.
pub async fn parse() -> Result<bool> {
    let matches = build().get_matches();

    match matches.subcommand() {
        Some(("debug", debug_matches)) => {
            match debug_matches.subcommand() {
                Some(("log-path", _)) => {
                    let log_path = log_dir().join("debug.log");
                    println!("{}", log_path.to_string_lossy());
                }
                Some(("enum-config", _)) => {
                    let res = ConfigKey::VARIANTS.join("\n");
                    println!("{}", res);
                }
                _ => {
                    subcommand_debug().print_long_help()?;
                }
            }

            return Ok(false);
        }
        Some(("quiz", subcmd_matches)) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
        }
        Some(("generate", subcmd_matches)) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
            generate_quiz(subcmd_matches).await?;
            return Ok(false);
        }
        Some(("completions", subcmd_matches)) => {
            if let Some(completions) = subcmd_matches.get_one::<Shell>("shell").copied() {
                let mut app = build();
                print_completions(completions, &mut app);
            }
            return Ok(false);
        }
        Some(("config", subcmd_matches)) => match subcmd_matches.subcommand() {
            Some(("create", _)) => {
                create_config_file().await?;
                return Ok(false);
            }
            Some(("default", _)) => {
                println!("{}", Config::serialize_default(build()));
                return Ok(false);
            }
            Some(("path", _)) => {
                println!("{}", Config::default(ConfigKey::ConfigFile));
                return Ok(false);
            }
            _ => {
                subcommand_config().print_long_help()?;
                return Ok(false);
            }
        },
        Some(("manpages", _)) => {
            clap_mangen::Man::new(build()).render(&mut io::stdout())?;
            return Ok(false);
        }
        _ => {
            Config::load(build(), vec![&matches]).await?;
        }
    }

    return Ok(true);
}
