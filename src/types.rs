/// Value written to `betaKind` when no kind is requested.
pub const DEFAULT_BETA_KIND: &str = "release";

/// One invocation's worth of settings, independent of any CLI framework.
/// The CLI layer converts parsed clap args into this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub beta_key: String,
    pub beta_kind: String,
    pub dry_run: bool,
    pub no_backup: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            beta_key: String::new(),
            beta_kind: DEFAULT_BETA_KIND.to_string(),
            dry_run: false,
            no_backup: false,
        }
    }
}

impl Options {
    pub fn beta(&self) -> BetaSettings<'_> {
        BetaSettings {
            kind: &self.beta_kind,
            key: &self.beta_key,
        }
    }

    /// Backups are only taken for real writes.
    pub fn wants_backup(&self) -> bool {
        !self.dry_run && !self.no_backup
    }
}

/// The two fields written into the launcher config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BetaSettings<'a> {
    pub kind: &'a str,
    pub key: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_reset_to_release() {
        let opts = Options::default();
        assert_eq!(opts.beta_kind, "release");
        assert_eq!(opts.beta_key, "");
        assert!(!opts.dry_run);
        assert!(!opts.no_backup);
    }

    #[test]
    fn backup_skipped_for_dry_run_or_opt_out() {
        assert!(Options::default().wants_backup());
        let dry = Options {
            dry_run: true,
            ..Options::default()
        };
        assert!(!dry.wants_backup());
        let opted_out = Options {
            no_backup: true,
            ..Options::default()
        };
        assert!(!opted_out.wants_backup());
    }
}
