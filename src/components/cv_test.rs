use super::*;
use crate::error::FetchError;

#[test]
fn selector_matches_configured_file_name() {
    assert_eq!(link_selector(&SiteConfig::default()), "a[href$=\"Kingsley_Maduabuchi_CV.pdf\"]");
}

#[test]
fn successful_probe_allows_download() {
    let ok: Result<(), FetchError> = Ok(());
    assert_eq!(ProbeOutcome::from_probe(&ok), ProbeOutcome::Download);
}

#[test]
fn missing_file_and_network_failure_both_print() {
    let missing: Result<(), FetchError> = Err(FetchError::Status { url: "cv.pdf".to_owned(), status: 404 });
    let offline: Result<(), FetchError> =
        Err(FetchError::Network { url: "cv.pdf".to_owned(), message: "offline".to_owned() });
    assert_eq!(ProbeOutcome::from_probe(&missing), ProbeOutcome::Print);
    assert_eq!(ProbeOutcome::from_probe(&offline), ProbeOutcome::Print);
}
