use super::*;

#[test]
fn status_error_formats_url_and_code() {
    let err = FetchError::Status { url: "data/projects.json".to_owned(), status: 404 };
    assert_eq!(err.to_string(), "request to data/projects.json returned status 404");
    assert_eq!(err.url(), "data/projects.json");
}

#[test]
fn network_and_decode_errors_carry_message() {
    let net = FetchError::Network { url: "a".to_owned(), message: "offline".to_owned() };
    assert_eq!(net.to_string(), "request to a failed: offline");
    let decode = FetchError::Decode { url: "b".to_owned(), message: "expected array".to_owned() };
    assert_eq!(decode.to_string(), "could not decode b: expected array");
}

#[test]
fn contact_error_names_the_field() {
    let err = ContactError::MissingField(ContactField::Email);
    assert_eq!(err.to_string(), "contact field `email` is empty");
}
