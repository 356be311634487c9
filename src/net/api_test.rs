use super::*;

#[test]
fn success_statuses_pass() {
    assert!(check_status("a", 200).is_ok());
    assert!(check_status("a", 204).is_ok());
    assert!(check_status("a", 299).is_ok());
}

#[test]
fn non_success_statuses_fail_with_url() {
    for status in [199, 301, 404, 500] {
        match check_status("cv.pdf", status) {
            Err(FetchError::Status { url, status: got }) => {
                assert_eq!(url, "cv.pdf");
                assert_eq!(got, status);
            }
            other => panic!("expected status error for {status}, got {other:?}"),
        }
    }
}

#[cfg(not(feature = "csr"))]
#[test]
fn native_fetches_fail_soft() {
    let result = futures::executor::block_on(fetch_text("data/projects.json"));
    assert!(matches!(result, Err(FetchError::Network { .. })));
    let probed = futures::executor::block_on(probe("cv.pdf"));
    assert!(probed.is_err());
    let first = futures::executor::block_on(fetch_first_text(&["a.svg", "b.svg"]));
    assert!(first.is_none());
}

