//! Slide content components and the per-listing content maps.
//!
//! Each component takes no props and owns nothing beyond its own subtree.

use leptos::*;
use slideshow::{ContentKey, ContentMap, SlideContent};

use crate::case_studies::ListingKind;

/// Content map for `listing`. Projects and Trash never share components.
pub fn content_map(listing: ListingKind) -> ContentMap<SlideContent> {
    match listing {
        ListingKind::Projects => projects_content_map(),
        ListingKind::Trash => trash_content_map(),
    }
}

fn projects_content_map() -> ContentMap<SlideContent> {
    let entries: [(&'static str, SlideContent); 10] = [
        ("atlas.problem", atlas_problem),
        ("atlas.tokens", atlas_tokens),
        ("atlas.adoption", atlas_adoption),
        ("atlas.outcome", atlas_outcome),
        ("ledger.funnel", ledger_funnel),
        ("ledger.flow", ledger_flow),
        ("ledger.results", ledger_results),
        ("harbor.constraints", harbor_constraints),
        ("harbor.sync", harbor_sync),
        ("harbor.outcome", harbor_outcome),
    ];
    entries
        .into_iter()
        .map(|(key, component)| (ContentKey(key), component))
        .collect()
}

fn trash_content_map() -> ContentMap<SlideContent> {
    let entries: [(&'static str, SlideContent); 3] = [
        ("orbit.pitch", orbit_pitch),
        ("orbit.postmortem", orbit_postmortem),
        ("kiosk.prototype", kiosk_prototype),
    ];
    entries
        .into_iter()
        .map(|(key, component)| (ContentKey(key), component))
        .collect()
}

fn stat_grid(stats: &'static [(&'static str, &'static str)]) -> View {
    view! {
        <dl class="content-stats">
            {stats
                .iter()
                .map(|(value, label)| {
                    view! {
                        <div class="content-stat">
                            <dt>{*value}</dt>
                            <dd>{*label}</dd>
                        </div>
                    }
                })
                .collect_view()}
        </dl>
    }
    .into_view()
}

fn bullet_list(items: &'static [&'static str]) -> View {
    view! {
        <ul class="content-bullets">
            {items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
        </ul>
    }
    .into_view()
}

fn timeline(steps: &'static [(&'static str, &'static str)]) -> View {
    view! {
        <ol class="content-timeline">
            {steps
                .iter()
                .map(|(when, what)| {
                    view! {
                        <li>
                            <span class="content-timeline-when">{*when}</span>
                            <span class="content-timeline-what">{*what}</span>
                        </li>
                    }
                })
                .collect_view()}
        </ol>
    }
    .into_view()
}

fn quote(text: &'static str, source: &'static str) -> View {
    view! {
        <blockquote class="content-quote">
            <p>{text}</p>
            <cite>{source}</cite>
        </blockquote>
    }
    .into_view()
}

fn atlas_problem() -> View {
    bullet_list(&[
        "Four button implementations, eleven shades of blue",
        "No shared review for UI changes",
        "Accessibility fixes landed in one product at a time",
    ])
}

fn atlas_tokens() -> View {
    timeline(&[
        ("Figma", "Variables are the source of truth"),
        ("CI", "Tokens exported as JSON on merge"),
        ("Build", "Generated CSS custom properties per theme"),
    ])
}

fn atlas_adoption() -> View {
    stat_grid(&[("4/4", "teams migrated"), ("62", "components"), ("9 mo", "to parity")])
}

fn atlas_outcome() -> View {
    quote(
        "We stopped arguing about padding and started shipping features.",
        "Product lead, payments",
    )
}

fn ledger_funnel() -> View {
    stat_grid(&[("9", "steps before"), ("41%", "completion"), ("step 4", "largest drop")])
}

fn ledger_flow() -> View {
    bullet_list(&[
        "Ask only for what the first transaction needs",
        "Defer identity checks until money moves",
        "Save progress on every field",
    ])
}

fn ledger_results() -> View {
    stat_grid(&[("3", "steps after"), ("78%", "completion"), ("-35%", "support tickets")])
}

fn harbor_constraints() -> View {
    bullet_list(&[
        "No signal on most of the quay",
        "Gloves on, screens wet",
        "Shift handover at fixed times",
    ])
}

fn harbor_sync() -> View {
    timeline(&[
        ("Edit", "Recorded locally with a device clock"),
        ("Dock", "Operations replayed when back in range"),
        ("Merge", "Last writer wins per field"),
    ])
}

fn harbor_outcome() -> View {
    stat_grid(&[("3", "ports"), ("0", "lost inspections"), ("2x", "faster handover")])
}

fn orbit_pitch() -> View {
    quote(
        "What if your calendar knew which friends were free?",
        "Original pitch deck",
    )
}

fn orbit_postmortem() -> View {
    bullet_list(&[
        "Invites needed both sides installed",
        "Calendar permissions scared people off",
        "Week-two retention under 10%",
    ])
}

fn kiosk_prototype() -> View {
    timeline(&[
        ("Week 1", "Paper prototypes on the gallery floor"),
        ("Week 3", "Clickable build on a borrowed tablet"),
        ("Week 5", "Two-day unattended floor test"),
    ])
}

#[cfg(test)]
mod tests {
    use slideshow::unresolved_keys;

    use super::*;
    use crate::case_studies::all_slides;

    #[test]
    fn every_referenced_key_resolves_in_its_own_listing() {
        for listing in [ListingKind::Projects, ListingKind::Trash] {
            let map = content_map(listing);
            let slides: Vec<_> = all_slides(listing).copied().collect();
            assert_eq!(
                unresolved_keys(&slides, &map),
                Vec::<ContentKey>::new(),
                "unresolved keys in {listing:?}"
            );
        }
    }

    #[test]
    fn listings_use_independent_maps() {
        let projects = content_map(ListingKind::Projects);
        let trash = content_map(ListingKind::Trash);
        assert!(projects.keys().all(|key| !trash.contains(key)));
    }
}
