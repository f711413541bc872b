//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Scrivener - outline, write and polish a blog post from one topic
#[derive(Parser, Debug)]
#[command(name = "scrivener")]
#[command(about = "Outline, write and polish a blog post from one topic", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Extra configuration file layered over the defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the web UI
    Serve {
        /// Address to listen on, overriding `server.bind`
        #[arg(long)]
        bind: Option<String>,
    },

    /// Write a report and save it to disk
    Write {
        /// What the post is about
        topic: String,

        /// Markdown output path (default: <topic>_blog.md)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Also render a PDF to this path
        #[arg(long)]
        pdf: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_write_with_outputs() {
        let cli = Cli::try_parse_from([
            "scrivener",
            "write",
            "Rust Async Tips",
            "--out",
            "post.md",
            "--pdf",
            "post.pdf",
        ])
        .unwrap();

        assert!(!cli.verbose);
        match cli.command {
            Commands::Write { topic, out, pdf } => {
                assert_eq!(topic, "Rust Async Tips");
                assert_eq!(out, Some(PathBuf::from("post.md")));
                assert_eq!(pdf, Some(PathBuf::from("post.pdf")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_flags_follow_subcommand() {
        let cli = Cli::try_parse_from([
            "scrivener",
            "serve",
            "--bind",
            "0.0.0.0:9000",
            "--verbose",
            "--config",
            "local.toml",
        ])
        .unwrap();

        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("local.toml")));
        match cli.command {
            Commands::Serve { bind } => assert_eq!(bind.as_deref(), Some("0.0.0.0:9000")),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn write_requires_topic() {
        assert!(Cli::try_parse_from(["scrivener", "write"]).is_err());
    }
}
