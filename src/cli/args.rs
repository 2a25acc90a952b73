//! CLI argument definitions using Clap

use clap::{Parser, Subcommand};

/// cliptrans - translate copied text with several services at once
#[derive(Parser, Debug)]
#[command(name = "cliptrans")]
#[command(version)]
#[command(about = "Translate copied text through several translation services at once")]
#[command(long_about = None)]
pub struct Cli {
    /// Target language (e.g., en, tr, zh-CN)
    #[arg(short = 't', long = "to", value_name = "LANG", global = true)]
    pub to: Option<String>,

    /// Source language, or "auto" to detect it
    #[arg(short = 'f', long = "from", value_name = "LANG", global = true)]
    pub from: Option<String>,

    /// Providers to query, in order (e.g., libretranslate,mymemory)
    #[arg(
        short = 'p',
        long,
        value_name = "IDS",
        value_delimiter = ',',
        global = true
    )]
    pub providers: Option<Vec<String>>,

    /// Show desktop notifications
    #[arg(short = 'n', long, conflicts_with = "console", global = true)]
    pub notify: bool,

    /// Print notifications to the terminal instead of the desktop
    #[arg(long, global = true)]
    pub console: bool,

    /// Enable debug logging on stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Translate every line read from stdin (e.g., `wl-paste --watch cat | cliptrans watch`)
    Watch,
    /// Translate a single text and exit
    Translate {
        /// Text to translate
        text: String,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "target_language",
    "source_language",
    "providers",
    "notify",
    "queue_capacity",
    "cache_capacity",
    "min_confidence",
    "libretranslate.endpoint",
    "libretranslate.api_key",
    "libretranslate.timeout_secs",
    "libretranslate.supported_languages",
    "mymemory.endpoint",
    "mymemory.email",
    "mymemory.timeout_secs",
    "mymemory.supported_languages",
    "analytics.enabled",
    "analytics.tracking_id",
    "analytics.client_id",
    "analytics.endpoint",
];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_watch_defaults() {
        let cli = Cli::parse_from(["cliptrans", "watch"]);
        assert!(matches!(cli.command, Commands::Watch));
        assert!(cli.to.is_none());
        assert!(cli.from.is_none());
        assert!(cli.providers.is_none());
        assert!(!cli.notify);
        assert!(!cli.console);
        assert!(!cli.verbose);
    }

    #[test]
    fn cli_parses_translate_with_languages() {
        let cli = Cli::parse_from(["cliptrans", "translate", "hello", "--to", "tr", "-f", "en"]);
        match cli.command {
            Commands::Translate { text } => assert_eq!(text, "hello"),
            other => panic!("Expected Translate command, got {:?}", other),
        }
        assert_eq!(cli.to.as_deref(), Some("tr"));
        assert_eq!(cli.from.as_deref(), Some("en"));
    }

    #[test]
    fn cli_parses_provider_list() {
        let cli = Cli::parse_from(["cliptrans", "-p", "libretranslate,mymemory", "watch"]);
        assert_eq!(
            cli.providers,
            Some(vec!["libretranslate".to_string(), "mymemory".to_string()])
        );
    }

    #[test]
    fn cli_rejects_notify_with_console() {
        let result = Cli::try_parse_from(["cliptrans", "watch", "--notify", "--console"]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["cliptrans"]).is_err());
    }

    #[test]
    fn cli_parses_config_set() {
        let cli = Cli::parse_from(["cliptrans", "config", "set", "analytics.enabled", "true"]);
        if let Commands::Config {
            action: ConfigAction::Set { key, value },
        } = cli.command
        {
            assert_eq!(key, "analytics.enabled");
            assert_eq!(value, "true");
        } else {
            panic!("Expected Config Set command");
        }
    }

    #[test]
    fn valid_config_keys() {
        assert!(is_valid_config_key("target_language"));
        assert!(is_valid_config_key("libretranslate.api_key"));
        assert!(!is_valid_config_key("api_key"));
        assert!(!is_valid_config_key("libretranslate"));
    }

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }
}
