//! Configuration loading and durability.
//!
//! The menu config lives in one ini file under the user's configuration
//! directory, with a `.bak` sibling holding the last copy that parsed
//! successfully. Loading refreshes the backup after every good parse and
//! falls back to it when the primary file is corrupt, flagging the result
//! so the caller can steer the user into the editing menu.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::error::{Error, Result};
use crate::ini;
use crate::menus::{MenuSet, EDIT_MENU};

const CONFIG_DIR_NAME: &str = "rungs";
const CONFIG_FILE_NAME: &str = "rungs.ini";
const BACKUP_SUFFIX: &str = ".bak";

/// Where the config file, its backup, and their directory live.
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    pub directory: PathBuf,
    pub primary: PathBuf,
    pub backup: PathBuf,
}

impl ConfigPaths {
    /// Resolves the config location: the default per-user path, or an
    /// override (tilde-expanded) when one was given on the command line.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoConfigDirectory`] when no override is given and
    /// the platform reports no user configuration directory.
    pub fn resolve(override_path: Option<&str>) -> Result<Self> {
        match override_path {
            Some(path) => {
                let expanded = shellexpand::tilde(path).to_string();
                Ok(Self::for_primary(PathBuf::from(expanded)))
            }
            None => {
                let directory = dirs::config_dir()
                    .ok_or(Error::NoConfigDirectory)?
                    .join(CONFIG_DIR_NAME);
                Ok(Self::for_primary(directory.join(CONFIG_FILE_NAME)))
            }
        }
    }

    /// Derives the directory and `.bak` sibling from a primary file path.
    #[must_use]
    pub fn for_primary(primary: PathBuf) -> Self {
        let directory = primary
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
        let backup = PathBuf::from(format!("{}{}", primary.display(), BACKUP_SUFFIX));

        Self {
            directory,
            primary,
            backup,
        }
    }
}

/// Loads, bootstraps, and durably persists the menu configuration.
pub struct ConfigStore {
    paths: ConfigPaths,
}

impl ConfigStore {
    #[must_use]
    pub fn new(paths: ConfigPaths) -> Self {
        Self { paths }
    }

    #[must_use]
    pub fn paths(&self) -> &ConfigPaths {
        &self.paths
    }

    /// Loads the menu set.
    ///
    /// Creates the config directory and a default config file when absent.
    /// A successful parse of the primary file refreshes the backup copy
    /// unconditionally. A parse failure is reported on stdout and the
    /// backup is parsed instead, with the result flagged corrupt-origin.
    ///
    /// # Errors
    ///
    /// Returns an error when the filesystem fails, or when the primary
    /// file is corrupt and the backup is missing or corrupt as well.
    pub fn load(&self) -> Result<MenuSet> {
        self.ensure_config_file()?;

        let primary = &self.paths.primary;
        let text = fs::read_to_string(primary)
            .map_err(|e| Error::io_error("config".to_string(), display(primary), e))?;

        match ini::parse(&text) {
            Ok(sections) => {
                // Sole point where the backup is refreshed: right after a
                // successful parse, even if the content is unchanged.
                fs::copy(primary, &self.paths.backup).map_err(|e| {
                    Error::io_error("backup".to_string(), display(&self.paths.backup), e)
                })?;
                debug!("refreshed backup at `{}`", self.paths.backup.display());

                Ok(MenuSet::from_sections(sections, false))
            }
            Err(parse_error) => {
                warn!("config parse failed: {parse_error}");
                println!("ERROR: cannot parse `{}`: {parse_error}", primary.display());
                println!(
                    "   ... trying backup file `{}` ...",
                    self.paths.backup.display()
                );

                let backup_text = fs::read_to_string(&self.paths.backup).map_err(|e| {
                    Error::io_error("backup".to_string(), display(&self.paths.backup), e)
                })?;
                let sections = ini::parse(&backup_text).map_err(|e| {
                    Error::parse_error("backup".to_string(), display(&self.paths.backup), e)
                })?;

                Ok(MenuSet::from_sections(sections, true))
            }
        }
    }

    fn ensure_config_file(&self) -> Result<()> {
        if !self.paths.directory.is_dir() {
            fs::create_dir_all(&self.paths.directory).map_err(|e| {
                Error::io_error(
                    "config directory".to_string(),
                    display(&self.paths.directory),
                    e,
                )
            })?;

            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                fs::set_permissions(&self.paths.directory, fs::Permissions::from_mode(0o755))
                    .map_err(|e| {
                        Error::io_error(
                            "config directory".to_string(),
                            display(&self.paths.directory),
                            e,
                        )
                    })?;
            }
        }

        if !self.paths.primary.is_file() {
            info!(
                "no config file, writing default at `{}`",
                self.paths.primary.display()
            );
            fs::write(&self.paths.primary, default_config(&self.paths.primary))
                .map_err(|e| Error::io_error("config".to_string(), display(&self.paths.primary), e))?;
        }

        Ok(())
    }
}

fn display(path: &Path) -> String {
    path.display().to_string()
}

/// Default config written on first run: the reserved self-edit menu and a
/// small example of single-line and multi-line entries.
fn default_config(primary: &Path) -> String {
    format!(
        "[{EDIT_MENU}]\n\
         a: ${{EDITOR:-vi}} \"{path}\"\n\
         x: exit\n\
         \n\
         [example]\n\
         a: command-a\n\
         b: prompt-b\n   command-b\n\
         x: exit\n",
        path = primary.display()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menus::ordinary;

    #[test]
    fn test_for_primary_derives_siblings() {
        let paths = ConfigPaths::for_primary(PathBuf::from("/tmp/rungs/rungs.ini"));
        assert_eq!(paths.directory, PathBuf::from("/tmp/rungs"));
        assert_eq!(paths.backup, PathBuf::from("/tmp/rungs/rungs.ini.bak"));
    }

    #[test]
    fn test_for_primary_bare_file_name() {
        let paths = ConfigPaths::for_primary(PathBuf::from("rungs.ini"));
        assert_eq!(paths.directory, PathBuf::from("."));
        assert_eq!(paths.backup, PathBuf::from("rungs.ini.bak"));
    }

    #[test]
    fn test_resolve_with_override() {
        let paths = ConfigPaths::resolve(Some("/custom/menus.ini")).unwrap();
        assert_eq!(paths.primary, PathBuf::from("/custom/menus.ini"));
        assert_eq!(paths.backup, PathBuf::from("/custom/menus.ini.bak"));
    }

    #[test]
    fn test_resolve_expands_tilde() {
        let paths = ConfigPaths::resolve(Some("~/menus.ini")).unwrap();
        assert!(!paths.primary.starts_with("~"));
        assert!(paths.primary.ends_with("menus.ini"));
    }

    #[test]
    fn test_default_config_parses_and_round_trips() {
        let text = default_config(Path::new("/home/user/.config/rungs/rungs.ini"));
        let sections = ini::parse(&text).unwrap();

        assert_eq!(sections.len(), 2);
        assert!(sections.contains_key(EDIT_MENU));
        assert!(ordinary(EDIT_MENU));

        let example = &sections["example"];
        assert_eq!(example["a"], "command-a");
        assert_eq!(example["b"], "prompt-b\ncommand-b");
        assert_eq!(example["x"], "exit");

        // The self-edit entry references the primary path for the shell.
        let edit = &sections[EDIT_MENU];
        assert!(edit["a"].contains("rungs.ini"));
        assert!(edit["a"].starts_with("${EDITOR:-vi}"));
    }
}
