use crate::policy::RestrictedPairPolicy;
use crate::utils::config::BackendConfig;
use std::path::PathBuf;

/// Arguments for the calculate command
///
/// **Public** - used by main.rs to construct from CLI args and config
#[derive(Debug, Clone)]
pub struct CalculateArgs {
    /// First name as typed
    pub name1: String,

    /// Second name as typed
    pub name2: String,

    /// Remote table settings (no URL = no remote save)
    pub backend: BackendConfig,

    /// Local append-only log (optional)
    pub log_file: Option<PathBuf>,

    /// Skip every store
    pub no_save: bool,

    /// Write a JSON report here (optional)
    pub output_json: Option<PathBuf>,

    /// Print JSON to stdout instead of the rendered result
    pub print_json: bool,

    /// Print a share message after the result
    pub share: bool,

    /// Link appended to the share message
    pub share_url: Option<String>,

    /// Pairs whose result is withheld
    pub policy: RestrictedPairPolicy,
}

impl Default for CalculateArgs {
    fn default() -> Self {
        Self {
            name1: String::new(),
            name2: String::new(),
            backend: BackendConfig::default(),
            log_file: None,
            no_save: false,
            output_json: None,
            print_json: false,
            share: false,
            share_url: None,
            policy: RestrictedPairPolicy::default(),
        }
    }
}
