//! Interactive search session
//!
//! Each input line is either a `:command` or query text for the active
//! provider. The session owns the year filter; the orchestrator owns the
//! active provider and the request state.

use anyhow::{anyhow, bail};
use marquee_search::query::parse_year;
use marquee_search::{Provider, Query, QueryOrchestrator};
use marquee_web::presenter::{View, render};
use tokio::io::{AsyncBufReadExt, BufReader};

/// One parsed line of shell input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Search(String),
    SelectProvider(Provider),
    SetYear(Option<u16>),
    ListProviders,
    Help,
    Quit,
    Blank,
}

impl ShellCommand {
    /// Parses a line of input.
    ///
    /// # Errors
    /// Fails for unknown `:commands`, unknown providers and invalid years.
    pub fn parse(line: &str) -> anyhow::Result<Self> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(ShellCommand::Blank);
        }

        let Some(command) = line.strip_prefix(':') else {
            return Ok(ShellCommand::Search(line.to_string()));
        };

        let (name, argument) = match command.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (command, ""),
        };

        match name {
            "provider" | "p" => {
                if argument.is_empty() {
                    bail!("usage: :provider <omdb|serper|imdb>");
                }
                Ok(ShellCommand::SelectProvider(argument.parse()?))
            }
            "year" | "y" => Ok(ShellCommand::SetYear(parse_year(argument)?)),
            "providers" => Ok(ShellCommand::ListProviders),
            "help" | "h" => Ok(ShellCommand::Help),
            "quit" | "q" | "exit" => Ok(ShellCommand::Quit),
            other => Err(anyhow!("unknown command ':{other}' (try :help)")),
        }
    }
}

const HELP: &str = "\
  <text>             search the active provider
  :provider <id>     switch provider (omdb, serper, imdb)
  :year [n]          set or clear the year filter
  :providers         list providers
  :quit              leave the shell";

/// Reads commands from stdin until `:quit` or end of input.
///
/// # Errors
/// Only fails when stdin cannot be read; bad input lines are reported and
/// the session continues.
pub async fn run(orchestrator: &QueryOrchestrator) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut year: Option<u16> = None;

    println!("{}", render(&orchestrator.state(), orchestrator.active_provider()));
    while let Some(line) = lines.next_line().await? {
        let command = match ShellCommand::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{}", View::Error(e.to_string()));
                continue;
            }
        };

        match command {
            ShellCommand::Blank => {}
            ShellCommand::Quit => break,
            ShellCommand::Help => println!("{HELP}"),
            ShellCommand::ListProviders => crate::commands::list_providers(),
            ShellCommand::SelectProvider(provider) => {
                orchestrator.select_provider(provider);
                println!("Provider: {}", provider.label());
            }
            ShellCommand::SetYear(value) => {
                year = value;
                match year {
                    Some(y) => println!("Year filter: {y}"),
                    None => println!("Year filter cleared"),
                }
            }
            ShellCommand::Search(text) => {
                let provider = orchestrator.active_provider();
                let query = Query::new(text, year.filter(|_| provider.accepts_year()));

                println!("{}", View::Loading);
                if let Some(state) = orchestrator.submit(provider, &query).await {
                    println!("{}", render(&state, provider));
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_a_search() {
        assert_eq!(
            ShellCommand::parse("  The Matrix ").unwrap(),
            ShellCommand::Search("The Matrix".to_string())
        );
        assert_eq!(ShellCommand::parse("   ").unwrap(), ShellCommand::Blank);
    }

    #[test]
    fn test_provider_command() {
        assert_eq!(
            ShellCommand::parse(":provider web").unwrap(),
            ShellCommand::SelectProvider(Provider::WebSearch)
        );
        assert!(ShellCommand::parse(":provider").is_err());
        assert!(ShellCommand::parse(":provider tmdb").is_err());
    }

    #[test]
    fn test_year_command_sets_and_clears() {
        assert_eq!(
            ShellCommand::parse(":year 1999").unwrap(),
            ShellCommand::SetYear(Some(1999))
        );
        assert_eq!(ShellCommand::parse(":year").unwrap(), ShellCommand::SetYear(None));
        assert!(ShellCommand::parse(":year 1850").is_err());
        assert!(ShellCommand::parse(":year soon").is_err());
    }

    #[test]
    fn test_other_commands() {
        assert_eq!(ShellCommand::parse(":providers").unwrap(), ShellCommand::ListProviders);
        assert_eq!(ShellCommand::parse(":q").unwrap(), ShellCommand::Quit);
        assert!(ShellCommand::parse(":rewind").is_err());
    }
}
