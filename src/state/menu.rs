//! Footer menu items.

/// Entries of the bottom action menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuItem {
    /// Prompt for a new note.
    New,
    /// Return to browsing at the first note.
    Browse,
    /// Edit the current note.
    Edit,
    /// Prompt for a search term.
    Search,
    /// Save and exit.
    Quit,
    /// Show the help overlay.
    Help,
}

impl MenuItem {
    /// All items, left to right.
    pub const ALL: [MenuItem; 6] = [
        MenuItem::New,
        MenuItem::Browse,
        MenuItem::Edit,
        MenuItem::Search,
        MenuItem::Quit,
        MenuItem::Help,
    ];

    /// Label drawn in the footer.
    pub fn label(self) -> &'static str {
        match self {
            MenuItem::New => "New",
            MenuItem::Browse => "Browse",
            MenuItem::Edit => "Edit",
            MenuItem::Search => "Search",
            MenuItem::Quit => "Quit",
            MenuItem::Help => "Help",
        }
    }

    /// Position in [`MenuItem::ALL`].
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|item| *item == self)
            .unwrap_or_default()
    }

    /// Item to the right; the last item stays put.
    pub fn next(self) -> Self {
        Self::ALL
            .get(self.index() + 1)
            .copied()
            .unwrap_or(self)
    }

    /// Item to the left; the first item stays put.
    pub fn prev(self) -> Self {
        self.index()
            .checked_sub(1)
            .map(|i| Self::ALL[i])
            .unwrap_or(self)
    }
}

impl Default for MenuItem {
    fn default() -> Self {
        MenuItem::New
    }
}
