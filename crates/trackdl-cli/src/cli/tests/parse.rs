//! Tests for get, resolve, and id subcommand parsing.

use super::parse;
use crate::cli::CliCommand;
use clap::Parser;

#[test]
fn cli_parse_get() {
    match parse(&["trackdl", "get", "https://open.spotify.com/track/abc123"]) {
        CliCommand::Get { url, download_dir } => {
            assert_eq!(url, "https://open.spotify.com/track/abc123");
            assert!(download_dir.is_none());
        }
        _ => panic!("expected Get"),
    }
}

#[test]
fn cli_parse_get_download_dir() {
    match parse(&[
        "trackdl",
        "get",
        "spotify:track:abc123",
        "--download-dir",
        "/tmp",
    ]) {
        CliCommand::Get { url, download_dir } => {
            assert_eq!(url, "spotify:track:abc123");
            assert_eq!(download_dir.as_deref(), Some(std::path::Path::new("/tmp")));
        }
        _ => panic!("expected Get with --download-dir"),
    }
}

#[test]
fn cli_parse_resolve() {
    match parse(&["trackdl", "resolve", "https://open.spotify.com/track/x"]) {
        CliCommand::Resolve { url } => {
            assert_eq!(url, "https://open.spotify.com/track/x");
        }
        _ => panic!("expected Resolve"),
    }
}

#[test]
fn cli_parse_id() {
    match parse(&["trackdl", "id", "spotify:track:4uLU6hMCjMI75M1A2tKUQC"]) {
        CliCommand::Id { url } => {
            assert_eq!(url, "spotify:track:4uLU6hMCjMI75M1A2tKUQC");
        }
        _ => panic!("expected Id"),
    }
}

#[test]
fn cli_rejects_missing_url() {
    assert!(crate::cli::Cli::try_parse_from(["trackdl", "get"]).is_err());
}
