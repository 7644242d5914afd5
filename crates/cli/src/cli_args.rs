//! Command-line argument parsing.

use clap::Parser;

/// Command-line arguments for the rungs menu launcher.
#[derive(Parser, Debug)]
#[command(term_width = 0)] // Just to make testing across clap features easier
pub struct Args {
    /// Path to the menus config file (ini).
    ///
    /// If not provided, defaults to `rungs/rungs.ini` under the user's
    /// configuration directory.
    #[arg(long, short = 'c')]
    pub config_path: Option<String>,

    /// Open the config-editing menu (prepends `edit-rungs-config` to the
    /// requested menus).
    #[arg(long, short = 'e', action)]
    pub edit: bool,

    /// Show commands without running them.
    #[arg(long, short = 'n', action)]
    pub dry_run: bool,

    /// Zero or more menu names to open in sequence.
    ///
    /// With no names, a menu listing every configured section is shown.
    /// Names are matched exactly, then case-insensitively, then as a
    /// case-insensitive prefix starting at any word of the section name.
    pub menus: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_args_default_values() {
        let args = Args::parse_from(["rungs"]);

        assert!(args.config_path.is_none());
        assert!(!args.edit);
        assert!(!args.dry_run);
        assert!(args.menus.is_empty());
    }

    #[test]
    fn test_args_short_flags() {
        let args = Args::parse_from(["rungs", "-c", "/custom/menus.ini", "-e", "-n"]);

        assert_eq!(args.config_path, Some("/custom/menus.ini".to_string()));
        assert!(args.edit);
        assert!(args.dry_run);
    }

    #[test]
    fn test_args_long_flags() {
        let args = Args::parse_from(["rungs", "--config-path", "/custom/menus.ini", "--edit", "--dry-run"]);

        assert_eq!(args.config_path, Some("/custom/menus.ini".to_string()));
        assert!(args.edit);
        assert!(args.dry_run);
    }

    #[test]
    fn test_args_menu_names() {
        let args = Args::parse_from(["rungs", "build", "deploy"]);
        assert_eq!(args.menus, ["build", "deploy"]);
    }

    #[test]
    fn test_args_flags_mixed_with_menus() {
        let args = Args::parse_from(["rungs", "-n", "build"]);
        assert!(args.dry_run);
        assert_eq!(args.menus, ["build"]);
    }
}
