use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Process-wide configuration, resolved once on first access.
pub static CONFIG: LazyLock<Config> = LazyLock::new(Config::load);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub basic: BasicConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BasicConfig {
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    #[serde(default = "default_loglevel")]
    pub loglevel: String,

    /// Populate the store with the demo students before serving.
    #[serde(default = "default_seed")]
    pub seed_demo_data: bool,
}

fn default_listen_addr() -> String {
    "0.0.0.0:8000".to_string()
}

fn default_loglevel() -> String {
    "info".to_string()
}

fn default_seed() -> bool {
    true
}

impl Default for BasicConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            loglevel: default_loglevel(),
            seed_demo_data: default_seed(),
        }
    }
}

impl Config {
    /// Defaults, overridden by `STUDENTS_*` env vars (`STUDENTS_BASIC__LISTEN_ADDR`, ...).
    pub fn figment() -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Env::prefixed("STUDENTS_").split("__"))
    }

    pub fn load() -> Self {
        match Self::figment().extract::<Config>() {
            Ok(cfg) => cfg,
            Err(e) => {
                // Read before the tracing subscriber exists.
                eprintln!("Warning: invalid configuration, using defaults: {e}");
                Config::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let cfg = Config::default();
        assert_eq!(cfg.basic.listen_addr, "0.0.0.0:8000");
        assert_eq!(cfg.basic.loglevel, "info");
        assert!(cfg.basic.seed_demo_data);
    }

    #[test]
    fn env_overrides_nested_keys() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("STUDENTS_BASIC__LISTEN_ADDR", "127.0.0.1:9000");
            jail.set_env("STUDENTS_BASIC__SEED_DEMO_DATA", "false");
            let cfg: Config = Config::figment().extract()?;
            assert_eq!(cfg.basic.listen_addr, "127.0.0.1:9000");
            assert!(!cfg.basic.seed_demo_data);
            assert_eq!(cfg.basic.loglevel, "info");
            Ok(())
        });
    }
}
