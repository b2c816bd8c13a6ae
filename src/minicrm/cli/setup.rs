use clap::Parser;
use minicrm::config::CrmConfig;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.1.0" for releases, "0.1.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

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

#[derive(Parser, Debug)]
#[command(name = "minicrm", bin_name = "minicrm", version = get_version())]
#[command(
    about = "In-memory customer records behind a text menu",
    long_about = "Create, view, edit, list and delete customer records from an interactive \
                  menu. Records live in memory only and are gone when the program exits.",
    after_help = "Logging goes to stderr and honours RUST_LOG (default: warn)."
)]
pub struct Cli {
    /// Start with an empty store instead of the demo customers
    #[arg(long)]
    pub no_seed: bool,

    /// Disable colored messages
    #[arg(long)]
    pub no_color: bool,

    /// Debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn config(&self) -> CrmConfig {
        CrmConfig::default()
            .with_seed(!self.no_seed)
            .with_color(!self.no_color)
    }
}
