use super::*;

#[test]
fn shorthands_resolve_to_include_paths_at_root() {
    assert_eq!(resolve_include("header", PageDepth::Root), "_includes/header.html");
    assert_eq!(resolve_include("footer", PageDepth::Root), "_includes/footer.html");
}

#[test]
fn shorthands_climb_from_nested_pages() {
    assert_eq!(resolve_include("header", PageDepth::Nested), "../_includes/header.html");
    assert_eq!(resolve_include("footer", PageDepth::Nested), "../_includes/footer.html");
}

#[test]
fn explicit_paths_are_used_verbatim() {
    assert_eq!(resolve_include("_includes/banner.html", PageDepth::Nested), "_includes/banner.html");
    assert_eq!(resolve_include("../_includes/header.html", PageDepth::Nested), "../_includes/header.html");
}

#[test]
fn shorthand_match_is_case_sensitive() {
    assert_eq!(resolve_include("Header", PageDepth::Root), "Header");
}

#[cfg(not(feature = "csr"))]
#[test]
fn load_includes_is_a_noop_without_browser() {
    futures::executor::block_on(load_includes());
}
