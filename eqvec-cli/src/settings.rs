use std::{fs, io, path::Path};

use anyhow::Context;
use eqvec_core::Config;
use tracing::{debug, error, warn};

pub const ENV_COMPONENT_MIN: &str = "EQVEC__COMPONENT_MIN";
pub const ENV_COMPONENT_MAX: &str = "EQVEC__COMPONENT_MAX";
pub const ENV_MAX_REDRAWS: &str = "EQVEC__MAX_REDRAWS";

/// Resolves generation settings: defaults, then the settings file, then env.
///
/// A missing file is skipped. A file that cannot be read or parsed is
/// reported and the defaults are kept. The result is not validated here.
pub fn load_settings(path: &Path) -> Config {
    load_settings_with(path, |key| std::env::var(key).ok())
}

pub(crate) fn load_settings_with<F>(path: &Path, env: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    let mut settings = match read_settings_file(path) {
        Ok(Some(file_cfg)) => {
            debug!(path = %path.display(), "loaded settings file");
            file_cfg
        }
        Ok(None) => Config::default(),
        Err(err) => {
            error!("{err:#}");
            Config::default()
        }
    };

    apply_env_overrides(&mut settings, env);
    settings
}

/// Reads a TOML settings file; only the keys present override defaults.
fn read_settings_file(path: &Path) -> anyhow::Result<Option<Config>> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read settings file '{}'", path.display()));
        }
    };

    let settings = toml::from_str::<Config>(&raw)
        .with_context(|| format!("failed to parse settings file '{}'", path.display()))?;
    Ok(Some(settings))
}

fn apply_env_overrides<F>(settings: &mut Config, env: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(v) = env_u32(&env, ENV_COMPONENT_MIN) {
        settings.component_min = v;
    }
    if let Some(v) = env_u32(&env, ENV_COMPONENT_MAX) {
        settings.component_max = v;
    }
    if let Some(v) = env_u32(&env, ENV_MAX_REDRAWS) {
        settings.max_redraws = v;
    }
}

fn env_u32<F>(env: &F, key: &str) -> Option<u32>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = env(key)?;
    match raw.trim().parse::<u32>() {
        Ok(v) => Some(v),
        Err(err) => {
            warn!(key, value = %raw, "ignoring invalid override: {err}");
            None
        }
    }
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
