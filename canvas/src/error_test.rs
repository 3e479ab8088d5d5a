use super::*;

#[test]
fn capture_error_messages() {
    let err = CaptureError::ImageLoad { src: "/wood.jpg".to_owned(), reason: "404".to_owned() };
    assert_eq!(err.to_string(), "failed to load image /wood.jpg: 404");
    assert_eq!(CaptureError::Empty.to_string(), "capture produced an empty image");
}

#[test]
fn unsupported_destination_names_the_key() {
    let err = UnsupportedDestination("myspace".to_owned());
    assert_eq!(err.to_string(), "unsupported share destination: myspace");
}

#[test]
fn share_cancel_is_distinct_from_failure() {
    assert_ne!(ShareError::Cancelled, ShareError::Failed("x".to_owned()));
    assert_eq!(ShareError::Cancelled.to_string(), "share was cancelled");
}
