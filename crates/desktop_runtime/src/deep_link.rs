//! Query-string deep links that open apps at boot.
//!
//! Accepted forms: `?open=pet`, `?open=projects:<slug>`, comma-separated targets
//! (`?open=pet,trash`), and repeated `open` keys. Targets are applied in the order given.

#[cfg(any(test, target_arch = "wasm32"))]
use leptos::logging;

#[cfg(any(test, target_arch = "wasm32"))]
use crate::model::DeepLinkOpenTarget;
use crate::model::{AppId, DeepLinkState};

#[cfg(any(test, target_arch = "wasm32"))]
fn parse_target(raw: &str) -> Option<DeepLinkOpenTarget> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    let (app, slug) = match raw.split_once(':') {
        Some((app, slug)) => (app, Some(slug.trim())),
        None => (raw, None),
    };
    let app_id = match app.parse::<AppId>() {
        Ok(app_id) => app_id,
        Err(err) => {
            logging::warn!("ignoring deep link target: {err}");
            return None;
        }
    };
    match (app_id, slug) {
        (AppId::Projects, Some(slug)) if !slug.is_empty() => {
            if !is_link_safe_slug(slug) {
                logging::warn!("ignoring project slug `{slug}`: not a plain slug");
                return None;
            }
            Some(DeepLinkOpenTarget::ProjectSlug(slug.to_string()))
        }
        _ => Some(DeepLinkOpenTarget::App(app_id)),
    }
}

/// Slugs travel unencoded in the query, so only ASCII letters, digits, `-`, `_` and `.` pass.
fn is_link_safe_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.'))
}

#[cfg(any(test, target_arch = "wasm32"))]
/// Parses `open` targets from a query string. Unknown apps are skipped with a warning.
pub fn parse_deep_link_from_query(query: &str) -> DeepLinkState {
    let mut open = Vec::new();
    for pair in query
        .trim_start_matches('?')
        .split('&')
        .filter(|part| !part.is_empty())
    {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        if key != "open" {
            continue;
        }
        for target in value.split(',').filter_map(parse_target) {
            if !open.contains(&target) {
                open.push(target);
            }
        }
    }
    DeepLinkState { open }
}

/// Returns the deep link requested by the current page URL, if any.
pub fn current_deep_link() -> Option<DeepLinkState> {
    #[cfg(target_arch = "wasm32")]
    {
        let search = web_sys::window()?.location().search().ok()?;
        let deep_link = parse_deep_link_from_query(&search);
        (!deep_link.open.is_empty()).then_some(deep_link)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Builds the desktop URL query that opens a project directly.
///
/// Returns `None` for slugs that cannot be carried verbatim (anything with `,`, `&`, `=`, spaces,
/// or non-ASCII characters).
pub fn project_deep_link_query(slug: &str) -> Option<String> {
    is_link_safe_slug(slug).then(|| format!("?open={}:{slug}", AppId::Projects.slug()))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_apps_and_project_slugs_in_order() {
        let parsed = parse_deep_link_from_query("?open=pet&open=projects:atlas,trash&theme=dark");
        assert_eq!(
            parsed.open,
            vec![
                DeepLinkOpenTarget::App(AppId::Pet),
                DeepLinkOpenTarget::ProjectSlug("atlas".to_string()),
                DeepLinkOpenTarget::App(AppId::Trash),
            ]
        );
    }

    #[test]
    fn skips_unknown_apps_and_duplicates() {
        let parsed = parse_deep_link_from_query("open=paint,pet,,pet");
        assert_eq!(parsed.open, vec![DeepLinkOpenTarget::App(AppId::Pet)]);
    }

    #[test]
    fn empty_project_slug_opens_the_list() {
        let parsed = parse_deep_link_from_query("?open=projects:");
        assert_eq!(parsed.open, vec![DeepLinkOpenTarget::App(AppId::Projects)]);
    }

    #[test]
    fn slug_suffix_on_other_apps_is_ignored() {
        let parsed = parse_deep_link_from_query("?open=pet:rex");
        assert_eq!(parsed.open, vec![DeepLinkOpenTarget::App(AppId::Pet)]);
    }

    #[test]
    fn project_query_round_trips() {
        let query = project_deep_link_query("atlas").unwrap();
        let parsed = parse_deep_link_from_query(&query);
        assert_eq!(
            parsed.open,
            vec![DeepLinkOpenTarget::ProjectSlug("atlas".to_string())]
        );
    }

    #[test]
    fn slugs_with_query_syntax_are_refused() {
        assert_eq!(project_deep_link_query("atlas,pet"), None);
        assert_eq!(project_deep_link_query("a&open=trash"), None);
        assert_eq!(project_deep_link_query("a=b"), None);
        assert_eq!(project_deep_link_query(""), None);
        assert_eq!(
            project_deep_link_query("case-study_2.0").as_deref(),
            Some("?open=projects:case-study_2.0")
        );

        let parsed = parse_deep_link_from_query("?open=projects:at%2Clas,pet");
        assert_eq!(parsed.open, vec![DeepLinkOpenTarget::App(AppId::Pet)]);
    }

    #[test]
    fn no_open_key_yields_nothing() {
        assert!(parse_deep_link_from_query("").open.is_empty());
        assert!(parse_deep_link_from_query("?e2e-scene=x").open.is_empty());
    }
}
