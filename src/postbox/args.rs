use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "postbox")]
#[command(about = "Command-line client for a remote post collection", long_about = None)]
#[command(version = version_string())]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all posts
    #[command(alias = "ls")]
    List,

    /// Create a new post
    #[command(alias = "n")]
    Create {
        /// Title of the post
        title: String,

        /// Body of the post
        #[arg(short, long, default_value = "")]
        body: String,

        /// Author user id
        #[arg(short, long)]
        user: Option<u64>,
    },

    /// Update an existing post
    #[command(alias = "e")]
    Update {
        /// Id of the post
        id: u64,

        /// New title
        #[arg(short, long)]
        title: String,

        /// New body
        #[arg(short, long, default_value = "")]
        body: String,
    },

    /// Delete a post
    #[command(alias = "rm")]
    Delete {
        /// Id of the post
        id: u64,
    },

    /// Show or set configuration (base-url, timeout-secs)
    Config {
        /// Config key (e.g. base-url)
        key: Option<String>,

        /// New value for the key
        value: Option<String>,
    },
}

/// Returns the version string, including git hash and commit date for
/// non-release builds. Format: "0.3.1" for releases,
/// "0.3.1@abc1234 2024-01-15 14:30" for dev builds
fn version_string() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    // Use a static to compute the version string once
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}
