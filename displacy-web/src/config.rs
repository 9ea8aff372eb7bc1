//! Configuração do servidor lida de variáveis de ambiente.
//!
//! | Variável              | Padrão    | Uso                                              |
//! |-----------------------|-----------|--------------------------------------------------|
//! | `languages`           | (vazio)   | modelos pré-carregados e listados em `/models`   |
//! | `DISPLACY_MODELS_DIR` | `models`  | diretório dos modelos `<nome>.json`              |
//! | `DISPLACY_HOST`       | `0.0.0.0` | endereço de escuta                               |
//! | `DISPLACY_PORT`       | `8000`    | porta de escuta                                  |

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("DISPLACY_PORT inválida: {0:?}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Nomes de modelos em ordem alfabética, repetições incluídas.
    pub languages: Vec<String>,
    pub models_dir: PathBuf,
    pub host: String,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            languages: Vec::new(),
            models_dir: PathBuf::from("models"),
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Monta a configuração a partir de uma função de consulta (testável sem tocar no ambiente).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let mut languages: Vec<String> = lookup("languages")
            .unwrap_or_default()
            .split_whitespace()
            .map(str::to_string)
            .collect();
        languages.sort();

        let port = match lookup("DISPLACY_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => defaults.port,
        };

        Ok(Self {
            languages,
            models_dir: lookup("DISPLACY_MODELS_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.models_dir),
            host: lookup("DISPLACY_HOST").unwrap_or(defaults.host),
            port,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.addr(), "0.0.0.0:8000");
    }

    #[test]
    fn test_languages_are_sorted_as_configured() {
        let config = config(&[("languages", " en_core_web_sm en\n de en ")]).unwrap();
        assert_eq!(config.languages, vec!["de", "en", "en", "en_core_web_sm"]);
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("DISPLACY_MODELS_DIR", "/srv/models"),
            ("DISPLACY_HOST", "127.0.0.1"),
            ("DISPLACY_PORT", "9000"),
        ])
        .unwrap();
        assert_eq!(config.models_dir, PathBuf::from("/srv/models"));
        assert_eq!(config.addr(), "127.0.0.1:9000");
    }

    #[test]
    fn test_invalid_port() {
        assert!(matches!(
            config(&[("DISPLACY_PORT", "http")]),
            Err(ConfigError::InvalidPort(_))
        ));
    }
}
