use std::time::Duration;

use anyhow::{bail, Context};
use clap::Parser;
use dictionary::{DictionaryConfig, DEFAULT_API_URL, DEFAULT_TIMEOUT};

pub const API_URL_VAR: &str = "DICTIONARY_API_URL";
pub const TIMEOUT_VAR: &str = "DICTIONARY_TIMEOUT_SECS";

/// Look a word up in the free dictionary and print its meanings
#[derive(Parser, Debug)]
#[command(name = "define")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// The word to search the dictionary for
    #[arg(long, default_value = "hello")]
    pub word: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub word: String,
    pub api_url: String,
    pub timeout: Duration,
}

impl Config {
    pub fn from_env(cli: Cli) -> anyhow::Result<Self> {
        Self::from_lookup(cli, |key| std::env::var(key).ok())
    }

    fn from_lookup(cli: Cli, lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let api_url = lookup(API_URL_VAR)
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_owned());
        let timeout = match lookup(TIMEOUT_VAR) {
            Some(secs) => {
                let secs: u64 = secs.trim().parse().with_context(|| {
                    format!("{TIMEOUT_VAR} must be a whole number of seconds, got {secs:?}")
                })?;
                if secs == 0 {
                    bail!("{TIMEOUT_VAR} must be greater than zero");
                }
                Duration::from_secs(secs)
            }
            None => DEFAULT_TIMEOUT,
        };
        Ok(Self {
            word: cli.word,
            api_url,
            timeout,
        })
    }

    pub fn dictionary_config(&self) -> DictionaryConfig {
        DictionaryConfig {
            api_url: self.api_url.clone(),
            timeout: self.timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(args: &[&str], vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let cli = Cli::try_parse_from(args)?;
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        Config::from_lookup(cli, |key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&["define"], &[]).unwrap();
        assert_eq!(config.word, "hello");
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_word_flag() {
        let config = load(&["define", "--word", "serendipity"], &[]).unwrap();
        assert_eq!(config.word, "serendipity");
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(Cli::try_parse_from(["define", "--color"]).is_err());
        assert!(Cli::try_parse_from(["define", "hello"]).is_err());
    }

    #[test]
    fn test_env_overrides() {
        let config = load(
            &["define"],
            &[(API_URL_VAR, "http://localhost:8080/en/"), (TIMEOUT_VAR, " 3 ")],
        )
        .unwrap();
        assert_eq!(config.api_url, "http://localhost:8080/en/");
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.dictionary_config().timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_invalid_timeout() {
        assert!(load(&["define"], &[(TIMEOUT_VAR, "soon")]).is_err());
        assert!(load(&["define"], &[(TIMEOUT_VAR, "0")]).is_err());
    }
}
