//! Static case-study listings for the Projects and Trash apps.
//!
//! Slugs are unique per listing; the two listings are independent namespaces.

use slideshow::{ContentKey, SlideDescriptor, SlideKind};

/// Which listing an entry table belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListingKind {
    Projects,
    Trash,
}

impl ListingKind {
    pub const fn title(self) -> &'static str {
        match self {
            Self::Projects => "Projects",
            Self::Trash => "Trash",
        }
    }

    pub const fn entries(self) -> &'static [CaseStudyEntry] {
        match self {
            Self::Projects => &PROJECT_ENTRIES,
            Self::Trash => &TRASH_ENTRIES,
        }
    }
}

/// One block of a mini project's body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MiniBlock {
    Text(&'static str),
    Image {
        src: &'static str,
        alt: &'static str,
    },
    Link {
        label: &'static str,
        href: &'static str,
    },
}

/// Full case study presented as a slide deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectEntry {
    pub slug: &'static str,
    pub title: &'static str,
    pub tag: &'static str,
    pub hero: Option<&'static str>,
    pub locked: bool,
    pub hidden: bool,
    pub slides: &'static [SlideDescriptor],
}

/// Short write-up presented as a column of blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MiniEntry {
    pub slug: &'static str,
    pub title: &'static str,
    pub tag: &'static str,
    pub hero: Option<&'static str>,
    pub locked: bool,
    pub hidden: bool,
    pub blocks: &'static [MiniBlock],
}

/// Outbound link card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExternalEntry {
    pub slug: &'static str,
    pub title: &'static str,
    pub tag: &'static str,
    pub url: &'static str,
    pub hero: Option<&'static str>,
    pub hidden: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseStudyEntry {
    Project(ProjectEntry),
    Mini(MiniEntry),
    /// Section label; never selectable.
    Divider { label: &'static str },
    External(ExternalEntry),
}

impl CaseStudyEntry {
    pub const fn slug(&self) -> Option<&'static str> {
        match self {
            Self::Project(p) => Some(p.slug),
            Self::Mini(m) => Some(m.slug),
            Self::External(e) => Some(e.slug),
            Self::Divider { .. } => None,
        }
    }

    pub const fn title(&self) -> &'static str {
        match self {
            Self::Project(p) => p.title,
            Self::Mini(m) => m.title,
            Self::External(e) => e.title,
            Self::Divider { label } => *label,
        }
    }

    pub const fn tag(&self) -> Option<&'static str> {
        match self {
            Self::Project(p) => Some(p.tag),
            Self::Mini(m) => Some(m.tag),
            Self::External(e) => Some(e.tag),
            Self::Divider { .. } => None,
        }
    }

    /// Image shown in the hover preview and the detail header.
    pub const fn hero(&self) -> Option<&'static str> {
        match self {
            Self::Project(p) => p.hero,
            Self::Mini(m) => m.hero,
            Self::External(e) => e.hero,
            Self::Divider { .. } => None,
        }
    }

    pub const fn is_locked(&self) -> bool {
        match self {
            Self::Project(p) => p.locked,
            Self::Mini(m) => m.locked,
            Self::External(_) | Self::Divider { .. } => false,
        }
    }

    pub const fn is_hidden(&self) -> bool {
        match self {
            Self::Project(p) => p.hidden,
            Self::Mini(m) => m.hidden,
            Self::External(e) => e.hidden,
            Self::Divider { .. } => false,
        }
    }

    /// Project and mini entries open in place; dividers and external links do not.
    pub const fn opens_in_place(&self) -> bool {
        matches!(self, Self::Project(_) | Self::Mini(_))
    }
}

/// Finds a selectable entry by slug.
pub fn find_entry(listing: ListingKind, slug: &str) -> Option<&'static CaseStudyEntry> {
    listing
        .entries()
        .iter()
        .find(|entry| entry.slug() == Some(slug))
}

/// Every slide list referenced by `listing`, for content-map consistency checks.
pub fn all_slides(listing: ListingKind) -> impl Iterator<Item = &'static SlideDescriptor> {
    listing.entries().iter().flat_map(|entry| {
        let slides: &'static [SlideDescriptor] = match entry {
            CaseStudyEntry::Project(project) => project.slides,
            _ => &[],
        };
        slides.iter()
    })
}

const fn content(title: &'static str, key: &'static str, body: &'static str) -> SlideDescriptor {
    SlideDescriptor::new(
        title,
        SlideKind::Content {
            key: ContentKey(key),
            body,
        },
    )
}

const fn split(
    title: &'static str,
    key: &'static str,
    src: &'static str,
    body: &'static str,
) -> SlideDescriptor {
    SlideDescriptor::new(
        title,
        SlideKind::SplitSlideImage {
            key: ContentKey(key),
            src,
            body,
        },
    )
}

const TOC: SlideDescriptor = SlideDescriptor::new("Contents", SlideKind::Toc);

const ATLAS_SLIDES: [SlideDescriptor; 7] = [
    SlideDescriptor::new(
        "Atlas Design System",
        SlideKind::Title {
            subtitle: "One component library for four product teams",
        },
    ),
    TOC,
    content(
        "The problem",
        "atlas.problem",
        "Four teams shipped four slightly different buttons.",
    ),
    split(
        "Token pipeline",
        "atlas.tokens",
        "/assets/atlas/tokens.png",
        "Design tokens flow from Figma variables into generated CSS.",
    ),
    SlideDescriptor::new(
        "Component audit",
        SlideKind::Image {
            src: "/assets/atlas/audit.png",
            alt: "Grid of inconsistent legacy buttons",
        },
    ),
    content("Adoption", "atlas.adoption", ""),
    content("Outcome", "atlas.outcome", "Release cadence doubled within two quarters."),
];

const LEDGER_SLIDES: [SlideDescriptor; 6] = [
    SlideDescriptor::new(
        "Ledger Onboarding",
        SlideKind::Title {
            subtitle: "Cutting account setup from nine steps to three",
        },
    ),
    TOC,
    content("Where people dropped off", "ledger.funnel", ""),
    split(
        "Progressive disclosure",
        "ledger.flow",
        "/assets/ledger/flow.png",
        "Optional details moved behind a single 'add later' affordance.",
    ),
    SlideDescriptor::new(
        "Walkthrough",
        SlideKind::Video {
            src: "/assets/ledger/walkthrough.mp4",
            poster: Some("/assets/ledger/walkthrough.jpg"),
        },
    ),
    content("Results", "ledger.results", "Completion rose from 41% to 78%."),
];

const HARBOR_SLIDES: [SlideDescriptor; 4] = [
    SlideDescriptor::new(
        "Harbor Field App",
        SlideKind::Title {
            subtitle: "Offline-first inspections for port crews",
        },
    ),
    content("Constraints", "harbor.constraints", ""),
    content("Sync model", "harbor.sync", "Every edit is a timestamped operation."),
    content("What shipped", "harbor.outcome", ""),
];

const PROJECT_ENTRIES: [CaseStudyEntry; 8] = [
    CaseStudyEntry::Divider { label: "Case studies" },
    CaseStudyEntry::Project(ProjectEntry {
        slug: "atlas",
        title: "Atlas Design System",
        tag: "Design systems",
        hero: Some("/assets/atlas/hero.png"),
        locked: false,
        hidden: false,
        slides: &ATLAS_SLIDES,
    }),
    CaseStudyEntry::Project(ProjectEntry {
        slug: "ledger",
        title: "Ledger Onboarding",
        tag: "Fintech",
        hero: Some("/assets/ledger/hero.png"),
        locked: true,
        hidden: false,
        slides: &LEDGER_SLIDES,
    }),
    CaseStudyEntry::Project(ProjectEntry {
        slug: "harbor",
        title: "Harbor Field App",
        tag: "Mobile",
        hero: Some("/assets/harbor/hero.png"),
        locked: false,
        hidden: true,
        slides: &HARBOR_SLIDES,
    }),
    CaseStudyEntry::Divider { label: "Side projects" },
    CaseStudyEntry::Mini(MiniEntry {
        slug: "type-specimens",
        title: "Type Specimens",
        tag: "Typography",
        hero: Some("/assets/mini/type.png"),
        locked: false,
        hidden: false,
        blocks: &[
            MiniBlock::Text("A weekend series of single-page specimens for open-source faces."),
            MiniBlock::Image {
                src: "/assets/mini/type-grid.png",
                alt: "Nine type specimen posters",
            },
            MiniBlock::Link {
                label: "See the full set",
                href: "https://example.com/specimens",
            },
        ],
    }),
    CaseStudyEntry::Mini(MiniEntry {
        slug: "pricing-lab",
        title: "Pricing Lab",
        tag: "Experiment",
        hero: None,
        locked: true,
        hidden: false,
        blocks: &[
            MiniBlock::Text("Three pricing page variants tested against a control."),
            MiniBlock::Text("The annual-first layout won by a wide margin."),
        ],
    }),
    CaseStudyEntry::External(ExternalEntry {
        slug: "github",
        title: "Code on GitHub",
        tag: "Link",
        url: "https://github.com/",
        hero: None,
        hidden: false,
    }),
];

const ORBIT_SLIDES: [SlideDescriptor; 4] = [
    SlideDescriptor::new(
        "Orbit (cancelled)",
        SlideKind::Title {
            subtitle: "A social calendar that never launched",
        },
    ),
    TOC,
    content("The pitch", "orbit.pitch", ""),
    content("Why it stopped", "orbit.postmortem", "Retention never cleared week two."),
];

const KIOSK_SLIDES: [SlideDescriptor; 3] = [
    SlideDescriptor::new(
        "Museum Kiosk",
        SlideKind::Title {
            subtitle: "Touch wayfinding prototype",
        },
    ),
    content("Prototype", "kiosk.prototype", ""),
    SlideDescriptor::new(
        "Floor test",
        SlideKind::Image {
            src: "/assets/kiosk/floor.png",
            alt: "Visitors using the kiosk prototype",
        },
    ),
];

const TRASH_ENTRIES: [CaseStudyEntry; 5] = [
    CaseStudyEntry::Project(ProjectEntry {
        slug: "orbit",
        title: "Orbit (cancelled)",
        tag: "Consumer",
        hero: Some("/assets/orbit/hero.png"),
        locked: true,
        hidden: false,
        slides: &ORBIT_SLIDES,
    }),
    CaseStudyEntry::Project(ProjectEntry {
        slug: "kiosk",
        title: "Museum Kiosk",
        tag: "Prototype",
        hero: Some("/assets/kiosk/hero.png"),
        locked: false,
        hidden: false,
        slides: &KIOSK_SLIDES,
    }),
    CaseStudyEntry::Divider { label: "Scraps" },
    CaseStudyEntry::Mini(MiniEntry {
        slug: "old-portfolio",
        title: "Portfolio v1",
        tag: "Archive",
        hero: None,
        locked: false,
        hidden: true,
        blocks: &[MiniBlock::Text(
            "The first version of this site: one long scrolling page.",
        )],
    }),
    CaseStudyEntry::External(ExternalEntry {
        slug: "dribbble",
        title: "Old shots",
        tag: "Link",
        url: "https://dribbble.com/",
        hero: None,
        hidden: false,
    }),
];

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn slugs_are_unique_within_each_listing() {
        for listing in [ListingKind::Projects, ListingKind::Trash] {
            let mut seen = BTreeSet::new();
            for slug in listing.entries().iter().filter_map(CaseStudyEntry::slug) {
                assert!(seen.insert(slug), "duplicate slug `{slug}` in {listing:?}");
            }
        }
    }

    #[test]
    fn dividers_have_no_slug_and_never_open() {
        let divider = CaseStudyEntry::Divider { label: "x" };
        assert_eq!(divider.slug(), None);
        assert!(!divider.opens_in_place());
        assert!(!divider.is_locked());
    }

    #[test]
    fn every_project_has_slides() {
        for listing in [ListingKind::Projects, ListingKind::Trash] {
            for entry in listing.entries() {
                if let CaseStudyEntry::Project(project) = entry {
                    assert!(!project.slides.is_empty(), "{} has no slides", project.slug);
                }
            }
        }
    }

    #[test]
    fn lookup_is_scoped_to_the_listing() {
        assert!(find_entry(ListingKind::Projects, "atlas").is_some());
        assert!(find_entry(ListingKind::Trash, "atlas").is_none());
        assert!(find_entry(ListingKind::Trash, "orbit").is_some());
    }
}
