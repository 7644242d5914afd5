//! Menu data model.
//!
//! A [`Menu`] is a named, ordered set of keyed text blocks; a [`MenuSet`] is
//! every menu loaded from one config file plus the corrupt-origin flag. The
//! prompt/command split of an entry lives in [`PromptSet`]: the first line of
//! a block is the displayed prompt, any remaining lines joined form the
//! command, and a single-line block serves as both.

use indexmap::IndexMap;

use crate::ini::Sections;

/// The reserved self-editing menu written by the config bootstrap.
pub const EDIT_MENU: &str = "edit-rungs-config";

/// Title used for the synthesized menu of all sections.
pub const SECTION_MENU_TITLE: &str = "ALL-MENUS";

/// Keys handed out to the synthesized section menu, in order. Lowercase `x`
/// is withheld so it stays free for the exit entry.
const SECTION_MENU_KEYS: &str = "abcdefghijklmnopqrstuvwyz0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// The name of the internal default section excluded from loaded menus.
const DEFAULT_SECTION: &str = "DEFAULT";

/// Returns true if the name starts with a word character. Reserved menus
/// start with punctuation and are only reachable by their exact name.
pub fn ordinary(name: &str) -> bool {
    name.chars()
        .next()
        .is_some_and(|c| c.is_alphanumeric() || c == '_')
}

/// One named menu: an ordered mapping of key to raw text block.
#[derive(Debug, Clone)]
pub struct Menu {
    name: String,
    entries: IndexMap<String, String>,
}

impl Menu {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: IndexMap::new(),
        }
    }

    /// Builds a menu from `(key, text block)` pairs, preserving their order.
    pub fn from_pairs<'a>(
        name: impl Into<String>,
        pairs: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        let mut menu = Self::new(name);
        for (key, block) in pairs {
            menu.insert(key, block);
        }
        menu
    }

    pub fn insert(&mut self, key: impl Into<String>, block: impl Into<String>) {
        self.entries.insert(key.into(), block.into());
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn entries(&self) -> &IndexMap<String, String> {
        &self.entries
    }

    /// Splits every entry into its prompt and command parts, keeping key
    /// order. The first line of a block is the prompt; the remaining lines
    /// joined with `\n` are the command, or the prompt doubles as the
    /// command when there are none.
    #[must_use]
    pub fn prompt_set(&self) -> PromptSet {
        let mut keys = Vec::new();
        let mut prompts = IndexMap::new();
        let mut commands = IndexMap::new();

        for (key, block) in &self.entries {
            let mut lines = block.lines();
            let prompt = lines.next().unwrap_or_default().to_string();
            let rest: Vec<&str> = lines.collect();

            let command = if rest.is_empty() {
                prompt.clone()
            } else {
                rest.join("\n")
            };

            keys.push(key.clone());
            prompts.insert(key.clone(), prompt);
            commands.insert(key.clone(), command);
        }

        PromptSet {
            keys,
            prompts,
            commands,
        }
    }
}

/// Parallel prompt/command views of a menu, ready for the interactive loop.
#[derive(Debug, Clone)]
pub struct PromptSet {
    /// Entry keys in insertion order; the first is the initial default.
    pub keys: Vec<String>,
    /// One-line label per key.
    pub prompts: IndexMap<String, String>,
    /// Command text per key, possibly spanning several lines.
    pub commands: IndexMap<String, String>,
}

impl PromptSet {
    #[must_use]
    pub fn prompt(&self, key: &str) -> Option<&str> {
        self.prompts.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn command(&self, key: &str) -> Option<&str> {
        self.commands.get(key).map(String::as_str)
    }
}

/// All menus loaded from one configuration file.
#[derive(Debug, Clone)]
pub struct MenuSet {
    menus: IndexMap<String, Menu>,
    corrupt_origin: bool,
}

impl MenuSet {
    /// Builds the menu set from parsed sections, excluding the parser's
    /// internal default section.
    #[must_use]
    pub fn from_sections(sections: Sections, corrupt_origin: bool) -> Self {
        let menus = sections
            .into_iter()
            .filter(|(name, _)| name != DEFAULT_SECTION)
            .map(|(name, entries)| (name.clone(), Menu { name, entries }))
            .collect();

        Self {
            menus,
            corrupt_origin,
        }
    }

    /// True when this set was loaded from the backup file because the
    /// primary file failed to parse.
    #[must_use]
    pub fn corrupt_origin(&self) -> bool {
        self.corrupt_origin
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Menu> {
        self.menus.get(name)
    }

    /// Section names in insertion order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.menus.keys().cloned().collect()
    }

    /// Synthesizes the menu shown when no menu name was requested: one
    /// entry per ordinary section that reopens the launcher on it, and a
    /// final exit entry under `x`.
    #[must_use]
    pub fn section_menu(&self) -> Menu {
        let mut keys = SECTION_MENU_KEYS.chars();
        let mut menu = Menu::new(SECTION_MENU_TITLE);

        for name in self.menus.keys().filter(|name| ordinary(name)) {
            let Some(key) = keys.next() else {
                break;
            };
            menu.insert(key.to_string(), format!("rungs '{name}'"));
        }

        menu.insert("x", "exit");
        menu
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ini;

    #[test]
    fn test_ordinary_names() {
        assert!(ordinary("deploy"));
        assert!(ordinary("2fast"));
        assert!(ordinary("_private"));
        assert!(!ordinary(".internal"));
        assert!(!ordinary("-dashed"));
        assert!(!ordinary(""));
    }

    #[test]
    fn test_prompt_set_single_line_entry() {
        let menu = Menu::from_pairs("m", [("k", "only-line")]);
        let set = menu.prompt_set();

        assert_eq!(set.keys, ["k"]);
        assert_eq!(set.prompt("k"), Some("only-line"));
        assert_eq!(set.command("k"), Some("only-line"));
    }

    #[test]
    fn test_prompt_set_multi_line_entry() {
        let menu = Menu::from_pairs("m", [("k", "label\ncmd1\ncmd2")]);
        let set = menu.prompt_set();

        assert_eq!(set.prompt("k"), Some("label"));
        assert_eq!(set.command("k"), Some("cmd1\ncmd2"));
    }

    #[test]
    fn test_prompt_set_keeps_entry_order() {
        let menu = Menu::from_pairs("m", [("b", "two"), ("a", "one"), ("x", "exit")]);
        assert_eq!(menu.prompt_set().keys, ["b", "a", "x"]);
    }

    #[test]
    fn test_from_sections_excludes_default_section() {
        let sections = ini::parse("[DEFAULT]\na: hidden\n[real]\nx: exit\n").unwrap();
        let menus = MenuSet::from_sections(sections, false);

        assert!(menus.get("DEFAULT").is_none());
        assert_eq!(menus.names(), ["real"]);
    }

    #[test]
    fn test_section_menu_lists_ordinary_sections() {
        let sections =
            ini::parse("[build]\nx: exit\n[.hidden]\na: b\n[deploy]\nx: exit\n").unwrap();
        let menu = MenuSet::from_sections(sections, false).section_menu();
        let set = menu.prompt_set();

        assert_eq!(set.keys, ["a", "b", "x"]);
        assert_eq!(set.command("a"), Some("rungs 'build'"));
        assert_eq!(set.command("b"), Some("rungs 'deploy'"));
        assert_eq!(set.command("x"), Some("exit"));
    }

    #[test]
    fn test_section_menu_never_assigns_lowercase_x() {
        let mut text = String::new();
        for index in 0..30 {
            text.push_str(&format!("[menu-{index:02}]\nx: exit\n"));
        }
        let menus = MenuSet::from_sections(ini::parse(&text).unwrap(), false);
        let set = menus.section_menu().prompt_set();

        // 30 sections walk past the 25 lowercase keys into digits; `x` must
        // still be the exit entry and nothing else.
        assert_eq!(set.keys.iter().filter(|key| *key == "x").count(), 1);
        assert_eq!(set.command("x"), Some("exit"));
        assert_eq!(set.keys.len(), 31);
    }

    #[test]
    fn test_corrupt_origin_flag() {
        let sections = ini::parse("[m]\nx: exit\n").unwrap();
        assert!(!MenuSet::from_sections(sections.clone(), false).corrupt_origin());
        assert!(MenuSet::from_sections(sections, true).corrupt_origin());
    }
}
