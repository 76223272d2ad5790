//! Setting declarations and the resolved configuration table.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// One named setting with its built-in default.
///
/// Defaults are string literals regardless of the value's semantic type;
/// booleans and numbers are carried in their string form (`"false"`, `"3"`)
/// and typed parsing belongs to the consuming layer.
#[derive(Debug, Clone, Copy)]
pub struct Setting {
    /// Environment key the setting resolves from.
    pub name: &'static str,
    /// Value used when the environment has no non-empty entry for `name`.
    pub default: &'static str,
}

const fn setting(name: &'static str, default: &'static str) -> Setting {
    Setting { name, default }
}

/// Every setting Wabot understands, in publication order.
///
/// Names are unique across the table; the resolved [`ConfigTable`] contains
/// exactly these names, each exactly once.
pub const SETTINGS: &[Setting] = &[
    // Identity / branding
    setting("BOT_NAME", "Wabot"),
    setting("OWNER_NAME", "Anonymous"),
    setting("OWNER_NUMBER", "254700000000"),
    setting("SESSION_ID", ""),
    setting("PREFIX", "."),
    setting("FOOTER", "Powered by Wabot"),
    setting("STICKER_PACK", "Wabot"),
    setting("STICKER_AUTHOR", "Wabot Team"),
    // Operating modes
    setting("MODE", "public"), // public | private
    setting("ALLOW_PM", "true"),
    setting("CHATBOT", "false"),
    setting("CHATBOT_SCOPE", "private"), // private | group | all
    // Presence simulation
    setting("PRESENCE_PRIVATE", "typing"), // typing | recording | online | offline
    setting("PRESENCE_GROUP", "online"),
    setting("ALWAYS_ONLINE", "false"),
    // Moderation
    setting("ANTILINK", "false"),
    setting("ANTICALL", "false"),
    setting("ANTICALL_ACTION", "decline"), // decline | block
    setting("ANTIDELETE", "true"),
    setting("ANTIDELETE_SCOPE", "all"), // private | group | all
    setting("WARN_COUNT", "3"),
    setting("AUTO_BLOCK_CODES", "212,263"), // comma-separated country codes
    // Status / interaction automation
    setting("AUTO_READ", "false"),
    setting("AUTO_READ_STATUS", "true"),
    setting("AUTO_LIKE_STATUS", "true"),
    setting("AUTO_LIKE_EMOJI", "\u{1F49A}"),
    setting("AUTO_REACT", "false"),
    setting("AUTO_REACT_EMOJI", "\u{2728}"),
    setting("AUTO_REPLY", "false"),
    setting(
        "AUTO_REPLY_TEXT",
        "Hello! I am busy right now, I will get back to you soon.",
    ),
    setting("WELCOME", "false"),
    setting("GOODBYE", "false"),
    // External linkage
    setting("REPO_URL", "https://github.com/wabot-rs/wabot-rs"),
    setting("CHANNEL_JID", "120363000000000000@newsletter"),
    setting("CHANNEL_NAME", "Wabot Updates"),
    setting("CHANNEL_URL", "https://whatsapp.com/channel/0029Va0000000000000000"),
    setting(
        "MENU_IMAGE_URL",
        "https://raw.githubusercontent.com/wabot-rs/wabot-rs/main/assets/menu.jpg",
    ),
    // Locale
    setting("TIMEZONE", "Africa/Nairobi"),
    setting("BOT_LANGUAGE", "en"),
];

/// Fully resolved configuration table for one load cycle.
///
/// An ordered mapping from setting name to resolved value, keyed and ordered
/// by [`SETTINGS`]. The table is immutable after construction; a reload
/// produces a new table rather than mutating this one in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigTable {
    // Parallel to SETTINGS; index i holds the value for SETTINGS[i].name.
    values: Vec<String>,
}

impl ConfigTable {
    pub(crate) fn from_values(values: Vec<String>) -> Self {
        debug_assert_eq!(values.len(), SETTINGS.len());
        Self { values }
    }

    /// Resolved value for `name`, or `None` if `name` is not an enumerated
    /// setting.
    pub fn get(&self, name: &str) -> Option<&str> {
        let idx = SETTINGS.iter().position(|s| s.name == name)?;
        Some(&self.values[idx])
    }

    /// Number of settings in the table. Always equals `SETTINGS.len()`.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the table is empty. Never true for a built table.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(name, resolved value)` pairs in publication order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        SETTINGS
            .iter()
            .zip(&self.values)
            .map(|(s, v)| (s.name, v.as_str()))
    }
}

impl Serialize for ConfigTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
