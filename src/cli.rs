//! Command-line interface parsing
//!
//! A small set of flags that override the environment configuration, handy
//! for running a second instance against a different cache file or pages
//! directory.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// Newsdesk - cached headline API backend
#[derive(Parser, Debug)]
#[command(name = "newsdesk")]
#[command(about = "News aggregation backend serving cached headlines")]
#[command(version)]
pub struct Cli {
    /// Port to listen on (overrides the PORT environment variable)
    #[arg(long)]
    pub port: Option<u16>,

    /// Cache file path (overrides CACHE_FILE)
    #[arg(long, value_name = "FILE")]
    pub cache_file: Option<PathBuf>,

    /// Static pages directory (overrides PUBLIC_DIR)
    #[arg(long, value_name = "DIR")]
    pub public_dir: Option<PathBuf>,
}

impl Cli {
    /// Applies any flags that were set on top of the environment config
    pub fn apply(self, config: &mut Config) {
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(cache_file) = self.cache_file {
            config.cache_file = cache_file;
        }
        if let Some(public_dir) = self.public_dir {
            config.public_dir = public_dir;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::news::default_categories;

    fn base_config() -> Config {
        Config {
            api_key: "secret".to_string(),
            port: 3000,
            cache_file: PathBuf::from("newsCache.json"),
            public_dir: PathBuf::from("public"),
            categories: default_categories(),
        }
    }

    #[test]
    fn test_cli_parse_no_args() {
        let cli = Cli::parse_from(["newsdesk"]);
        assert!(cli.port.is_none());
        assert!(cli.cache_file.is_none());
        assert!(cli.public_dir.is_none());
    }

    #[test]
    fn test_no_flags_leave_config_untouched() {
        let cli = Cli::parse_from(["newsdesk"]);
        let mut config = base_config();
        cli.apply(&mut config);

        assert_eq!(config.port, 3000);
        assert_eq!(config.cache_file, PathBuf::from("newsCache.json"));
    }

    #[test]
    fn test_port_flag_overrides_config() {
        let cli = Cli::parse_from(["newsdesk", "--port", "8080"]);
        let mut config = base_config();
        cli.apply(&mut config);

        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_path_flags_override_config() {
        let cli = Cli::parse_from([
            "newsdesk",
            "--cache-file",
            "/tmp/other.json",
            "--public-dir",
            "/srv/pages",
        ]);
        let mut config = base_config();
        cli.apply(&mut config);

        assert_eq!(config.cache_file, PathBuf::from("/tmp/other.json"));
        assert_eq!(config.public_dir, PathBuf::from("/srv/pages"));
    }
}
