// crates/reservemate-cli/src/cli.rs - Command-line surface
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI structure
#[derive(Parser, Debug)]
#[command(name = "reservemate")]
#[command(about = "Manage restaurant reservations from the terminal")]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to ./config.json)
    #[arg(short, long, global = true, env = "RESERVEMATE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Reservation data file for this run (preferences keep their stored path)
    #[arg(short, long, global = true)]
    pub data: Option<PathBuf>,

    /// Accept reservations dated in the past
    #[arg(long, global = true)]
    pub allow_past: bool,

    /// Runs the interactive shell when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Start the interactive shell
    Shell,

    /// Run a single command line, e.g. `exec add n/Amy p/12345 ...`
    Exec {
        /// The command and its arguments
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },

    /// Print the stored reservations
    List {
        /// Output as JSON for machine processing
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_shell() {
        let cli = Cli::try_parse_from(["reservemate"]).unwrap();
        assert_eq!(cli.command, None);
        assert!(!cli.allow_past);
    }

    #[test]
    fn test_exec_keeps_words_in_order() {
        let cli = Cli::try_parse_from([
            "reservemate",
            "--allow-past",
            "exec",
            "add",
            "n/Amy",
            "p/12345",
            "t/2024-12-25",
            "1800",
        ])
        .unwrap();

        assert!(cli.allow_past);
        assert_eq!(
            cli.command,
            Some(Commands::Exec {
                words: ["add", "n/Amy", "p/12345", "t/2024-12-25", "1800"]
                    .map(String::from)
                    .to_vec()
            })
        );
    }

    #[test]
    fn test_exec_requires_words() {
        assert!(Cli::try_parse_from(["reservemate", "exec"]).is_err());
    }

    #[test]
    fn test_global_data_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["reservemate", "list", "--json", "--data", "book.json"])
            .unwrap();
        assert_eq!(cli.data, Some(PathBuf::from("book.json")));
        assert_eq!(cli.command, Some(Commands::List { json: true }));
    }
}
