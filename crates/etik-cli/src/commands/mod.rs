//! CLI command implementations.

pub mod labels;
pub mod search;

use std::path::Path;

use etik_core::EtikConfig;

/// Load the config file if one was given, defaults otherwise.
pub fn load_config(path: Option<&str>) -> anyhow::Result<EtikConfig> {
    match path {
        Some(p) => Ok(EtikConfig::from_file(Path::new(p))?),
        None => Ok(EtikConfig::default()),
    }
}
