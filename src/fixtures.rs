#[cfg(test)]
pub mod test {
    use std::path::PathBuf;

    use tempfile::TempDir;

    use crate::paths::CONFIG_FILE_NAME;

    /// A trimmed-down `dalamudConfig.json` with the kinds of values the
    /// launcher actually stores next to the beta fields.
    pub const SAMPLE_CONFIG: &str = r#"{
  "betaKind": "canary",
  "betaKey": "abc123",
  "dalamudBetaKind": null,
  "isDocking": false,
  "globalUiScale": 1.25,
  "generalChatType": 56,
  "pluginConfigs": {
    "SimpleTweaks": { "enabled": true, "tweaks": ["a", "b"] }
  },
  "thirdRepoList": [
    { "url": "https://example.invalid/repo.json", "isEnabled": true }
  ]
}"#;

    /// Write `contents` as the config file inside `dir` and return its path.
    pub fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, contents).unwrap();
        path
    }

    /// Every file in `dir`, by name, sorted.
    pub fn dir_entries(dir: &TempDir) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}
