use clap::{Parser, Subcommand, ValueEnum};
use forum_client::{extract, ExtractOptions, HttpPageSource};
use llm_analyzer::ChatCompletionClient;
use settings_store::{keys, load_analysis_config, store_credential, JsonFileStore, SettingsStore};
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use threadlens_core::{
    raw_data_artifact, report_artifact, CoreError, ErrorExt, ProgressObserver, RAW_DATA_FILENAME,
    REPORT_FILENAME,
};

#[derive(Parser)]
#[command(name = "threadlens", about = "Export or summarize a forum thread's comments")]
struct Cli {
    /// Settings file holding the chat-completion API configuration
    #[arg(long, global = true, default_value = "threadlens-settings.json")]
    settings: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Paginate through a thread, then export the data or analyze it
    Run {
        /// Thread URL; any query or fragment is ignored
        url: String,

        #[arg(long, value_enum, default_value_t = Mode::Json)]
        mode: Mode,

        /// Hard ceiling on fetched pages
        #[arg(long, default_value_t = 50)]
        max_pages: u32,

        /// Politeness delay between page fetches, in milliseconds
        #[arg(long, default_value_t = 500)]
        delay_ms: u64,
    },
    /// Save chat-completion API settings
    Config {
        #[arg(long)]
        endpoint_url: Option<String>,

        /// API credential; stored base64-obfuscated, not encrypted
        #[arg(long)]
        credential: Option<String>,

        #[arg(long)]
        model_id: Option<String>,

        #[arg(long)]
        system_prompt: Option<String>,
    },
}

#[derive(Copy, Clone, ValueEnum)]
enum Mode {
    /// Export the raw extraction as a JSON artifact
    Json,
    /// Send the extraction to the chat-completion endpoint, save the report
    Analyze,
}

/// Status channel: a single stderr line, overwritten on each update.
struct StderrStatus;

impl ProgressObserver for StderrStatus {
    fn on_progress(&self, message: &str) {
        eprint!("\r\x1b[2K{}", message);
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<(), CoreError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        e.log_error();
        eprintln!("\n⚠️ {}", e.user_friendly_message());
        std::process::exit(1);
    }
    Ok(())
}

async fn run(cli: Cli) -> Result<(), CoreError> {
    match cli.command {
        Command::Config {
            endpoint_url,
            credential,
            model_id,
            system_prompt,
        } => {
            let mut store = JsonFileStore::open(&cli.settings)?;
            if let Some(v) = endpoint_url {
                store.set(keys::ENDPOINT_URL, v.trim());
            }
            if let Some(v) = credential {
                store_credential(&mut store, v.trim());
            }
            if let Some(v) = model_id {
                store.set(keys::MODEL_ID, v.trim());
            }
            if let Some(v) = system_prompt {
                store.set(keys::SYSTEM_PROMPT, &v);
            }
            store.persist()?;
            eprintln!("Saved settings to {}", store.path().display());
            Ok(())
        }
        Command::Run {
            url,
            mode,
            max_pages,
            delay_ms,
        } => {
            // Malformed URLs fail here, before any extraction work starts
            let source = HttpPageSource::new(&url)?;
            let options = ExtractOptions {
                max_pages,
                inter_page_delay: Duration::from_millis(delay_ms),
            };
            let status = StderrStatus;

            status.on_progress("Starting extraction...");
            let extraction = extract(&source, source.base_url(), &options, &status).await;

            match mode {
                Mode::Json => {
                    status.on_progress(&format!(
                        "Extraction finished, exporting {}...",
                        RAW_DATA_FILENAME
                    ));
                    std::fs::write(RAW_DATA_FILENAME, raw_data_artifact(&extraction)?)?;
                    eprintln!(
                        "\nWrote {} ({} comments)",
                        RAW_DATA_FILENAME,
                        extraction.comments.len()
                    );
                }
                Mode::Analyze => {
                    let store = JsonFileStore::open(&cli.settings)?;
                    let config = load_analysis_config(&store);
                    status.on_progress(
                        "Waiting for the analysis response (may take 15-30 seconds)...",
                    );
                    let report = ChatCompletionClient::new()
                        .analyze(&extraction, &config)
                        .await?;
                    std::fs::write(REPORT_FILENAME, report_artifact(&report))?;
                    eprintln!("\nWrote {}", REPORT_FILENAME);
                }
            }
            Ok(())
        }
    }
}
