use anyhow::{Context, Result, bail};
use regex::Regex;
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::{env, fs, path::Path};
use tracing::info;

pub const CONFIG_PATH_ENV: &str = "CONFIG_PATH";

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub webserver: Webserver,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Webserver {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for Webserver {
    fn default() -> Self {
        Webserver {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
        }
    }
}

impl Webserver {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Config {
    /// Loads the file named by `CONFIG_PATH`, or falls back to the defaults when it is unset.
    pub fn from_env() -> Result<Self> {
        match env::var_os(CONFIG_PATH_ENV) {
            Some(path) => load_config(path),
            None => {
                info!("{} is not set, using default config", CONFIG_PATH_ENV);
                Ok(Config::default())
            }
        }
    }
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    info!("Loading config from file {}", path.as_ref().display());
    let yaml_str = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

    let expanded = expand_env_vars(&yaml_str).with_context(|| {
        format!(
            "Failed to expand environment variables in config file: {}",
            path.as_ref().display()
        )
    })?;

    let config = serde_yaml_ng::from_str(&expanded)
        .context("Failed to parse YAML config after environment variable expansion")?;

    Ok(config)
}

/// Replaces `${VAR}` placeholders with environment variables values.
/// Returns an error naming every placeholder whose variable is unset.
fn expand_env_vars(input: &str) -> Result<String> {
    let re =
        Regex::new(r"\$\{([^}]+)}").context("Invalid regex pattern for env var substitution")?;

    let mut missing = Vec::new();
    let result = re.replace_all(input, |caps: &regex::Captures| {
        let var_name = &caps[1];
        env::var(var_name).unwrap_or_else(|_| {
            missing.push(var_name.to_string());
            String::new()
        })
    });

    if !missing.is_empty() {
        bail!("Missing environment variable: {}", missing.join(", "));
    }

    Ok(result.into_owned())
}
