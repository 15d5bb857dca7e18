use std::path::PathBuf;

use clap::Parser;
use compact_str::CompactString;

use crate::config::Config;

#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "catalog",
    version,
    about = "Browse a static catalog of MCP servers by tab, search text and category",
    long_about = "Loads the server catalog once (local JSON file or http(s) URL) and lets you filter it interactively.\n\nExamples:\n  catalog\n  catalog --source https://example.org/static/data/servers.json\n  catalog --print --tab database --search redis"
)]
pub struct CliArgs {
    #[arg(
        short = 's',
        long = "source",
        value_name = "PATH|URL",
        help_heading = "Input",
        help = "Catalog location (overrides [catalog] source in the config)."
    )]
    pub source: Option<String>,

    #[arg(
        short = 'C',
        long = "config",
        value_name = "FILE",
        help_heading = "Input",
        help = "Path to config file (defaults to the platform config dir)."
    )]
    pub config: Option<PathBuf>,

    #[arg(
        short = 'p',
        long = "print",
        help_heading = "Output",
        help = "Print the filtered catalog to stdout and exit instead of starting the TUI."
    )]
    pub print: bool,

    #[arg(
        long = "tab",
        value_name = "ID",
        help_heading = "Filters",
        help = "Tab id: all, featured, database, search, project, development, cloud."
    )]
    pub tab: Option<String>,

    #[arg(
        long = "search",
        value_name = "TEXT",
        help_heading = "Filters",
        help = "Case-insensitive text matched against name and description."
    )]
    pub search: Option<String>,

    #[arg(
        long = "category",
        value_name = "NAME",
        help_heading = "Filters",
        help = "Exact category name."
    )]
    pub category: Option<String>,

    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        help_heading = "Output",
        help = "Log level directive (overrides [logging] level)."
    )]
    pub log_level: Option<String>,
}

impl CliArgs {
    /// Fold command-line overrides into the loaded config.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(source) = &self.source {
            config.catalog.source = source.clone();
        }
        if let Some(level) = &self.log_level {
            config.logging.level = CompactString::new(level);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_replace_config_values() {
        let args = CliArgs::parse_from([
            "catalog",
            "--source",
            "https://example.org/servers.json",
            "--log-level",
            "debug",
        ]);
        let mut config = Config::default();
        args.apply_to(&mut config);

        assert_eq!(config.catalog.source, "https://example.org/servers.json");
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_no_flags_leave_config_alone() {
        let args = CliArgs::parse_from(["catalog"]);
        let mut config = Config::default();
        args.apply_to(&mut config);
        assert_eq!(config, Config::default());
        assert!(!args.print);
    }

    #[test]
    fn test_print_mode_filters() {
        let args = CliArgs::parse_from([
            "catalog", "--print", "--tab", "database", "--search", "red", "--category", "Database",
        ]);
        assert!(args.print);
        assert_eq!(args.tab.as_deref(), Some("database"));
        assert_eq!(args.search.as_deref(), Some("red"));
        assert_eq!(args.category.as_deref(), Some("Database"));
    }
}
