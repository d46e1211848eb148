/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_mistyped_env() {
    for warning in collect_mistyped_env_warnings(std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_mistyped_env_warnings<I>(env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut keys = env
        .into_iter()
        .map(|(key, _)| key)
        .filter(|key| key.starts_with("JIRASUM_") && key != "JIRASUM_LOG")
        .filter(|key| !key.contains("__"))
        .collect::<Vec<_>>();
    keys.sort();

    keys.into_iter()
        .map(|key| {
            format!(
                "{key} is ignored. Use double underscores between section and field (example: JIRASUM_BACKEND__BASE_URL)."
            )
        })
        .collect()
}
