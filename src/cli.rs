//! Command-line flags for the `tui-2048` binary.

use std::path::PathBuf;

use clap::Parser;

use tui_2048::config::Overrides;

#[derive(Debug, Parser)]
#[command(name = "tui-2048", version, about = "Slide and merge tiles until you reach the target")]
pub struct Cli {
    /// Board width in columns
    #[arg(long)]
    pub width: Option<usize>,

    /// Board height in rows
    #[arg(long)]
    pub height: Option<usize>,

    /// Tile value that wins the game
    #[arg(long)]
    pub target: Option<u32>,

    /// Seed for tile placement (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// TOML config file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Append tracing output to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            config: self.config.clone(),
            width: self.width,
            height: self.height,
            target: self.target,
            seed: self.seed,
            log_path: self.log_file.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_flags() {
        let cli = Cli::try_parse_from([
            "tui-2048", "--width", "5", "--height", "6", "--target", "512", "--seed", "7",
            "--log-file", "game.log",
        ])
        .unwrap();
        let overrides = cli.overrides();
        assert_eq!(overrides.width, Some(5));
        assert_eq!(overrides.height, Some(6));
        assert_eq!(overrides.target, Some(512));
        assert_eq!(overrides.seed, Some(7));
        assert_eq!(overrides.log_path, Some(PathBuf::from("game.log")));
        assert_eq!(overrides.config, None);
    }

    #[test]
    fn no_flags_means_no_overrides() {
        let cli = Cli::try_parse_from(["tui-2048"]).unwrap();
        assert_eq!(cli.overrides(), Overrides::default());
    }

    #[test]
    fn rejects_non_numeric_width() {
        assert!(Cli::try_parse_from(["tui-2048", "--width", "wide"]).is_err());
    }
}
