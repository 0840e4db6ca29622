use clap::Parser;
use std::path::PathBuf;

pub const SETTINGS_ENV: &str = "KALENDARZ_SETTINGS";

/// Kalendarz - learn how Polish speakers say dates
#[derive(Parser, Debug)]
#[command(name = "kalendarz")]
#[command(version)]
#[command(about = "Interactive Polish date trainer", long_about = None)]
pub struct Args {
    /// Settings JSON file (defaults are used when absent)
    #[arg(env = SETTINGS_ENV)]
    pub settings: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so the environment variable is not shared across threads
    #[test]
    fn test_settings_source_precedence() {
        std::env::remove_var(SETTINGS_ENV);
        let args = Args::try_parse_from(["kalendarz"]).unwrap();
        assert_eq!(args.settings, None);

        let args = Args::try_parse_from(["kalendarz", "mine.json"]).unwrap();
        assert_eq!(args.settings, Some(PathBuf::from("mine.json")));

        std::env::set_var(SETTINGS_ENV, "from_env.json");
        let args = Args::try_parse_from(["kalendarz"]).unwrap();
        assert_eq!(args.settings, Some(PathBuf::from("from_env.json")));

        let args = Args::try_parse_from(["kalendarz", "mine.json"]).unwrap();
        assert_eq!(args.settings, Some(PathBuf::from("mine.json")));
        std::env::remove_var(SETTINGS_ENV);
    }

    #[test]
    fn test_help_is_not_a_path() {
        let err = Args::try_parse_from(["kalendarz", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }
}
