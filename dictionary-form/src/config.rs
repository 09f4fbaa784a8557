use std::env;
use std::net::SocketAddr;

use anyhow::Context;
use dictionary::{Dictionary, Url};

const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";

pub struct Config {
    /// Base of the dictionary entries endpoint, the word is appended to it.
    pub api_url: Url,
    pub listen_addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let api_url = match var("DICTIONARY_API_URL") {
            Some(url) => Url::parse(&url).context("DICTIONARY_API_URL is not a valid url")?,
            None => Dictionary::default_base_url(),
        };

        let listen_addr = var("LISTEN_ADDR")
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string())
            .parse()
            .context("LISTEN_ADDR is not a valid socket address")?;

        Ok(Config {
            api_url,
            listen_addr,
        })
    }
}
