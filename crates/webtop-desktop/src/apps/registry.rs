//! Static application table

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use crate::layout::DEFAULT_MIN_SIZE;
use crate::math::Size;

/// Application tag
///
/// Windows only ever hold this tag; rendering the matching content is the
/// host's concern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppKind {
    About,
    Resume,
    Skills,
    Certificates,
    Contact,
    Calculator,
    Notepad,
}

impl AppKind {
    /// Every application, in launcher order
    pub const ALL: [AppKind; 7] = [
        AppKind::About,
        AppKind::Resume,
        AppKind::Skills,
        AppKind::Certificates,
        AppKind::Contact,
        AppKind::Calculator,
        AppKind::Notepad,
    ];

    /// Stable string identifier
    pub fn id(self) -> &'static str {
        match self {
            AppKind::About => "about",
            AppKind::Resume => "resume",
            AppKind::Skills => "skills",
            AppKind::Certificates => "certificates",
            AppKind::Contact => "contact",
            AppKind::Calculator => "calculator",
            AppKind::Notepad => "notepad",
        }
    }
}

impl fmt::Display for AppKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Returned when parsing an application id that has no matching [`AppKind`]
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown application '{id}'")]
pub struct UnknownAppError {
    pub id: String,
}

impl FromStr for AppKind {
    type Err = UnknownAppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AppKind::ALL
            .into_iter()
            .find(|kind| kind.id() == s)
            .ok_or_else(|| UnknownAppError { id: s.to_string() })
    }
}

/// How the window body treats pointer input
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppContent {
    /// Static, scrollable information panel
    #[default]
    Panel,
    /// Content handles its own pointer and keyboard input
    Interactive,
}

/// Display metadata for one application
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppEntry {
    pub kind: AppKind,
    pub title: &'static str,
    /// Icon name understood by the host's icon set
    pub icon: &'static str,
    pub content: AppContent,
    pub default_size: Size,
    /// Larger minimum than the desktop default, if any
    pub min_size: Option<Size>,
    /// Whether the app has a desktop shortcut icon
    pub on_desktop: bool,
}

impl AppEntry {
    #[inline]
    pub fn id(&self) -> &'static str {
        self.kind.id()
    }

    /// Effective minimum window size
    pub fn min_size(&self) -> Size {
        match self.min_size {
            Some(min) => min.max(DEFAULT_MIN_SIZE),
            None => DEFAULT_MIN_SIZE,
        }
    }
}

/// Built-in applications
pub static BUILTIN_APPS: [AppEntry; 7] = [
    AppEntry {
        kind: AppKind::About,
        title: "About Me",
        icon: "user",
        content: AppContent::Panel,
        default_size: Size::new(600.0, 750.0),
        min_size: None,
        on_desktop: true,
    },
    AppEntry {
        kind: AppKind::Resume,
        title: "Resume",
        icon: "file-text",
        content: AppContent::Panel,
        default_size: Size::new(600.0, 750.0),
        min_size: None,
        on_desktop: true,
    },
    AppEntry {
        kind: AppKind::Skills,
        title: "Skills",
        icon: "star",
        content: AppContent::Panel,
        default_size: Size::new(600.0, 750.0),
        min_size: None,
        on_desktop: true,
    },
    AppEntry {
        kind: AppKind::Certificates,
        title: "Certificates",
        icon: "award",
        content: AppContent::Panel,
        default_size: Size::new(600.0, 750.0),
        min_size: None,
        on_desktop: true,
    },
    AppEntry {
        kind: AppKind::Contact,
        title: "Contact",
        icon: "mail",
        content: AppContent::Panel,
        default_size: Size::new(600.0, 500.0),
        min_size: None,
        on_desktop: true,
    },
    AppEntry {
        kind: AppKind::Calculator,
        title: "Calculator",
        icon: "calculator",
        content: AppContent::Interactive,
        default_size: Size::new(320.0, 460.0),
        min_size: None,
        on_desktop: false,
    },
    AppEntry {
        kind: AppKind::Notepad,
        title: "Notepad",
        icon: "notepad",
        content: AppContent::Interactive,
        default_size: Size::new(500.0, 400.0),
        min_size: None,
        on_desktop: false,
    },
];

/// Read-only lookup over an ordered application table
#[derive(Clone, Copy, Debug)]
pub struct AppRegistry {
    entries: &'static [AppEntry],
}

impl Default for AppRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl AppRegistry {
    /// Registry over a custom table
    pub const fn new(entries: &'static [AppEntry]) -> Self {
        Self { entries }
    }

    /// Registry over [`BUILTIN_APPS`]
    pub fn builtin() -> Self {
        Self::new(&BUILTIN_APPS)
    }

    /// All entries in table order (start menu order)
    #[inline]
    pub fn entries(&self) -> &'static [AppEntry] {
        self.entries
    }

    /// Entry for an application tag
    pub fn get(&self, kind: AppKind) -> Option<&'static AppEntry> {
        self.entries.iter().find(|entry| entry.kind == kind)
    }

    /// Entry for a string id
    pub fn lookup(&self, id: &str) -> Option<&'static AppEntry> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    /// Entries shown as desktop icons
    pub fn desktop_entries(&self) -> impl Iterator<Item = &'static AppEntry> {
        self.entries.iter().filter(|entry| entry.on_desktop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_kind_round_trips_through_id() {
        for kind in AppKind::ALL {
            assert_eq!(kind.id().parse::<AppKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_unknown_app_id() {
        let err = "minesweeper".parse::<AppKind>().unwrap_err();
        assert_eq!(err.id, "minesweeper");
        assert_eq!(err.to_string(), "unknown application 'minesweeper'");
    }

    #[test]
    fn test_builtin_registry_covers_every_kind() {
        let registry = AppRegistry::builtin();
        for kind in AppKind::ALL {
            assert!(registry.get(kind).is_some(), "missing {kind}");
        }
    }

    #[test]
    fn test_lookup_by_id() {
        let registry = AppRegistry::builtin();
        let calc = registry.lookup("calculator").unwrap();
        assert_eq!(calc.kind, AppKind::Calculator);
        assert_eq!(calc.default_size, Size::new(320.0, 460.0));
        assert_eq!(calc.content, AppContent::Interactive);
        assert!(registry.lookup("paint").is_none());
    }

    #[test]
    fn test_desktop_entries() {
        let ids: Vec<&str> = AppRegistry::builtin().desktop_entries().map(AppEntry::id).collect();
        assert_eq!(ids, vec!["about", "resume", "skills", "certificates", "contact"]);
    }

    #[test]
    fn test_min_size_never_below_default() {
        let entry = AppEntry {
            kind: AppKind::Notepad,
            title: "Notepad",
            icon: "notepad",
            content: AppContent::Interactive,
            default_size: Size::new(500.0, 400.0),
            min_size: Some(Size::new(100.0, 300.0)),
            on_desktop: false,
        };
        assert_eq!(entry.min_size(), Size::new(200.0, 300.0));
        assert_eq!(BUILTIN_APPS[0].min_size(), DEFAULT_MIN_SIZE);
    }
}
