use std::env;

use crate::errors::CustomError;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_NEAR_RPC_URL: &str = "https://rpc.mainnet.near.org";
const DEFAULT_ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:8080", "http://localhost:5173"];

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub info_server_url: String,
    pub near_rpc_url: String,
    pub account_id: Option<String>,
    pub allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, CustomError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, CustomError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(port) => port
                .parse()
                .map_err(|e| CustomError::ConfigError(format!("Invalid PORT {port:?}: {e}")))?,
            None => DEFAULT_PORT,
        };

        let info_server_url = lookup("INFO_SERVER_URL")
            .filter(|url| !url.is_empty())
            .ok_or_else(|| CustomError::ConfigError("INFO_SERVER_URL is not set".to_string()))?;

        let near_rpc_url =
            lookup("NEAR_RPC_URL").unwrap_or_else(|| DEFAULT_NEAR_RPC_URL.to_string());

        let allowed_origins = match lookup("ALLOWED_ORIGINS") {
            Some(origins) => origins
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(String::from)
                .collect(),
            None => DEFAULT_ALLOWED_ORIGINS.iter().map(|o| o.to_string()).collect(),
        };

        Ok(Self {
            port,
            info_server_url,
            near_rpc_url,
            account_id: lookup("ACCOUNT_ID").filter(|id| !id.is_empty()),
            allowed_origins,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, CustomError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_apply() {
        let config = config_from(&[("INFO_SERVER_URL", "https://info.apys.xyz")]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.near_rpc_url, DEFAULT_NEAR_RPC_URL);
        assert_eq!(config.account_id, None);
        assert_eq!(config.allowed_origins.len(), 2);
    }

    #[test]
    fn test_missing_info_server_is_an_error() {
        assert!(matches!(config_from(&[]), Err(CustomError::ConfigError(_))));
    }

    #[test]
    fn test_bad_port_is_an_error() {
        let result = config_from(&[("INFO_SERVER_URL", "http://x"), ("PORT", "eighty")]);
        assert!(matches!(result, Err(CustomError::ConfigError(_))));
    }

    #[test]
    fn test_origins_are_split_and_trimmed() {
        let config = config_from(&[
            ("INFO_SERVER_URL", "http://x"),
            ("ALLOWED_ORIGINS", "https://apys.xyz, https://beta.apys.xyz,"),
            ("ACCOUNT_ID", "alice.near"),
        ])
        .unwrap();
        assert_eq!(
            config.allowed_origins,
            vec!["https://apys.xyz", "https://beta.apys.xyz"]
        );
        assert_eq!(config.account_id.as_deref(), Some("alice.near"));
    }
}
