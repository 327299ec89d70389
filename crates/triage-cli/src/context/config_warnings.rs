use triage_config::{ENV_PREFIX, TriageConfig};

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &TriageConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &TriageConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();
    let defaults = TriageConfig::default();

    let sections = [
        (
            "REMOTE",
            config.remote.base_url == defaults.remote.base_url
                && config.remote.timeout_secs == defaults.remote.timeout_secs
                && config.remote.enabled == defaults.remote.enabled,
            "BASE_URL",
        ),
        ("STORE", config.store.path.is_empty(), "PATH"),
        (
            "CLASSIFIER",
            config.classifier.extra_productive.is_empty()
                && config.classifier.extra_unproductive.is_empty(),
            "EXTRA_PRODUCTIVE",
        ),
        (
            "SERVER",
            config.server.host == defaults.server.host && config.server.port == defaults.server.port,
            "PORT",
        ),
    ];

    let mut warnings = Vec::new();
    for (section, looks_default, example_key) in sections {
        let prefix = format!("{ENV_PREFIX}{section}");
        if looks_default && has_single_underscore_key(&env_keys, &prefix) {
            warnings.push(format!(
                "{} config appears default while {prefix}* env vars exist. Use double underscores (example: {prefix}__{example_key}).",
                section.to_ascii_lowercase()
            ));
        }
    }

    warnings
}

fn has_single_underscore_key(keys: &[String], prefix: &str) -> bool {
    let nested = format!("{prefix}__");
    keys.iter()
        .any(|key| key.starts_with(prefix) && !key.starts_with(&nested))
}
