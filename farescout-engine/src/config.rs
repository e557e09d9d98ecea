use serde::Deserialize;
use std::env;

use farescout_deals::StrategyConfig;

/// Engine-level configuration.
///
/// `cache_ttl_secs` is honoured by the collaborating cache layer in
/// front of the provider; the core carries it so one config document
/// describes the whole search path.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Hard ceiling on upstream provider calls per search.
    pub max_calls_per_search: u32,
    /// Provider response cache TTL, for the collaborator cache layer.
    pub cache_ttl_secs: u64,
    pub strategy: StrategyConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_calls_per_search: 15,
            cache_ttl_secs: 300,
            strategy: StrategyConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Layered load: `config/default`, then the `RUN_MODE` file, then a
    /// local override file, then `FARESCOUT__`-prefixed environment
    /// variables. Every file is optional; absent sources leave the
    /// defaults in place.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("FARESCOUT").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.max_calls_per_search, 15);
        assert_eq!(cfg.cache_ttl_secs, 300);
        assert_eq!(cfg.strategy.nearby_min_base, 70.0);
    }
}
