//! List/detail state for the Projects and Trash browsers.
//!
//! Unlocks are tracked here, keyed by slug, and live only as long as the mounted app. Going back to
//! the list clears both the selection and every unlock, so a locked entry re-prompts the next time
//! it is opened.

use std::collections::BTreeSet;

use crate::case_studies::{find_entry, CaseStudyEntry, ListingKind};

/// What the browser should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserView {
    List,
    /// A locked entry waiting on the password gate.
    Gate(&'static CaseStudyEntry),
    /// A project deck or mini-project body.
    Entry(&'static CaseStudyEntry),
}

/// Result of selecting a list row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Dividers and unknown slugs do nothing.
    Ignored,
    /// External link; state is unchanged.
    OpenExternal(&'static str),
    /// Entry is locked and not yet unlocked.
    ShowGate,
    ShowEntry,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserState {
    listing: ListingKind,
    selected: Option<&'static str>,
    unlocked: BTreeSet<&'static str>,
}

impl BrowserState {
    pub fn new(listing: ListingKind) -> Self {
        Self {
            listing,
            selected: None,
            unlocked: BTreeSet::new(),
        }
    }

    pub fn listing(&self) -> ListingKind {
        self.listing
    }

    pub fn selected_slug(&self) -> Option<&'static str> {
        self.selected
    }

    pub fn selected_entry(&self) -> Option<&'static CaseStudyEntry> {
        self.selected.and_then(|slug| find_entry(self.listing, slug))
    }

    pub fn is_unlocked(&self, slug: &str) -> bool {
        self.unlocked.contains(slug)
    }

    /// Selects the row with `slug`.
    pub fn select(&mut self, slug: &str) -> SelectOutcome {
        let Some(entry) = find_entry(self.listing, slug) else {
            return SelectOutcome::Ignored;
        };
        match entry {
            CaseStudyEntry::Divider { .. } => SelectOutcome::Ignored,
            CaseStudyEntry::External(external) => SelectOutcome::OpenExternal(external.url),
            CaseStudyEntry::Project(_) | CaseStudyEntry::Mini(_) => {
                let Some(slug) = entry.slug() else {
                    return SelectOutcome::Ignored;
                };
                self.selected = Some(slug);
                if entry.is_locked() && !self.unlocked.contains(slug) {
                    SelectOutcome::ShowGate
                } else {
                    SelectOutcome::ShowEntry
                }
            }
        }
    }

    /// Records a successful unlock for the selected entry.
    ///
    /// Returns `false` when nothing is selected, which happens when a gate's delayed callback
    /// outlives a back navigation.
    pub fn unlock_selected(&mut self) -> bool {
        match self.selected {
            Some(slug) => {
                self.unlocked.insert(slug);
                true
            }
            None => false,
        }
    }

    /// Returns to the list, forgetting the selection and every unlock.
    pub fn back_to_list(&mut self) {
        self.selected = None;
        self.unlocked.clear();
    }

    pub fn view(&self) -> BrowserView {
        match self.selected_entry() {
            None => BrowserView::List,
            Some(entry) if entry.is_locked() && !self.is_unlocked(entry.slug().unwrap_or("")) => {
                BrowserView::Gate(entry)
            }
            Some(entry) => BrowserView::Entry(entry),
        }
    }
}

/// Rows to render for `listing`.
///
/// Hidden entries appear only when `show_hidden` is set. A divider is dropped when every entry in
/// its section is hidden.
pub fn visible_entries(listing: ListingKind, show_hidden: bool) -> Vec<&'static CaseStudyEntry> {
    let mut rows: Vec<&'static CaseStudyEntry> = Vec::new();
    let mut pending_divider = None;
    for entry in listing.entries() {
        match entry {
            CaseStudyEntry::Divider { .. } => pending_divider = Some(entry),
            _ if entry.is_hidden() && !show_hidden => {}
            _ => {
                if let Some(divider) = pending_divider.take() {
                    rows.push(divider);
                }
                rows.push(entry);
            }
        }
    }
    rows
}
