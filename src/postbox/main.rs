use clap::Parser;
use colored::Colorize;
use postbox::config::RemoteConfig;
use postbox::error::Result;
use postbox::model::{Post, PostDraft};
use postbox::notify::Notifier;
use postbox::remote::http::HttpBackend;
use postbox::store::PostStore;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod args;
use args::{Cli, Commands};

/// Notification collaborator for the terminal: success toasts become a
/// green check line on stdout.
struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn success(&self, message: &str) {
        println!("{} {}", "✓".green(), message);
    }
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = RemoteConfig::load(config_dir())
        .unwrap_or_default()
        .with_env_overrides();
    let backend = HttpBackend::new(&config)?;
    let mut store = PostStore::new(backend, TerminalNotifier);

    match cli.command {
        Commands::List => {
            store.load().await?;
            print_posts(store.posts());
        }
        Commands::Create { title, body, user } => {
            let mut draft = PostDraft::new(title, body);
            if let Some(user) = user {
                draft = draft.with_user(user);
            }
            store.create(draft).await?;
            if let Some(created) = store.posts().first() {
                println!("Created post {}", created.id.to_string().bold());
            }
        }
        Commands::Update { id, title, body } => {
            store
                .update(Post {
                    id,
                    title,
                    body,
                    user_id: None,
                })
                .await?;
            println!("Updated post {}", id.to_string().bold());
        }
        Commands::Delete { id } => {
            store.delete(id).await?;
        }
        Commands::Config { key, value } => {
            handle_config(key, value)?;
        }
    }
    Ok(())
}

fn handle_config(key: Option<String>, value: Option<String>) -> Result<()> {
    let dir = config_dir();
    match (key, value) {
        (None, _) => {
            let config = RemoteConfig::load(&dir)?;
            println!("base-url = {}", config.base_url);
            println!("timeout-secs = {}", config.timeout_secs);
        }
        (Some(key), None) => match RemoteConfig::load(&dir)?.get(&key) {
            Some(val) => println!("{}", val),
            None => println!("Unknown config key: {}", key),
        },
        (Some(key), Some(value)) => {
            let mut config = RemoteConfig::load(&dir)?;
            if let Err(e) = config.set(&key, &value) {
                println!("{}", e);
                return Ok(());
            }
            config.save(&dir)?;
            let display_val = config.get(&key).unwrap_or(value);
            println!("{} set to {}", key, display_val);
        }
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "postbox=debug" } else { "postbox=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Config lives in $POSTBOX_HOME, or ./.postbox next to where you run.
fn config_dir() -> PathBuf {
    std::env::var_os("POSTBOX_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(".postbox"))
}

fn print_posts(posts: &[Post]) {
    if posts.is_empty() {
        println!("{}", "No posts.".dimmed());
        return;
    }
    for post in posts {
        println!("{:>4}  {}", post.id.to_string().bold(), post.title);
        if !post.body.is_empty() {
            let first_line = post.body.lines().next().unwrap_or_default();
            println!("      {}", first_line.dimmed());
        }
    }
}
