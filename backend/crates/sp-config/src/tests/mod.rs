mod log_level;
mod logging;

use std::env;

use tempfile::TempDir;

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

const SP_ENV_VARS: [&str; 8] = [
    "SP_SCIM_URL",
    "SP_SCIM_ENTERPRISE",
    "SP_SCIM_TOKEN",
    "SP_SCIM_TIMEOUT_SECS",
    "SP_LOG_LEVEL",
    "SP_LOG_COLORED",
    "SP_LOG_DIR",
    "SP_LOG_FILE",
];

/// Create a temp config directory, point SP_CONFIG_DIR at it and clear any
/// SP_* overrides inherited from the outer environment
pub(crate) fn setup_config_dir() -> (TempDir, Vec<EnvGuard>) {
    let temp = TempDir::new().unwrap();
    let mut guards = vec![EnvGuard::set(
        "SP_CONFIG_DIR",
        temp.path().to_str().unwrap(),
    )];
    guards.extend(SP_ENV_VARS.into_iter().map(EnvGuard::remove));
    (temp, guards)
}

/// Set the three required SCIM settings through the environment
pub(crate) fn set_required_scim_env() -> Vec<EnvGuard> {
    vec![
        EnvGuard::set("SP_SCIM_URL", "https://api.github.com"),
        EnvGuard::set("SP_SCIM_ENTERPRISE", "acme"),
        EnvGuard::set("SP_SCIM_TOKEN", "ghp_test"),
    ]
}
