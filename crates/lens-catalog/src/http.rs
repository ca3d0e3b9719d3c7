//! Shared HTTP response helpers for catalog clients.
//!
//! The catalog signals "no such product" through status codes as often as
//! through its payload, so every non-success status maps to `None` rather
//! than an error. Transport failures never reach this module.

/// Pass successful responses through; map any other status to `None`.
pub fn check_response(resp: reqwest::Response) -> Option<reqwest::Response> {
    let status = resp.status();
    if status.is_success() {
        Some(resp)
    } else {
        tracing::debug!(status = status.as_u16(), url = %resp.url(), "catalog returned non-success status");
        None
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn mock_response(status: u16) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body("")
                .unwrap(),
        )
    }

    #[test]
    fn success_passes_through() {
        assert!(check_response(mock_response(200)).is_some());
    }

    #[rstest]
    #[case(404)]
    #[case(429)]
    #[case(500)]
    #[case(503)]
    fn non_success_is_absent(#[case] status: u16) {
        assert!(check_response(mock_response(status)).is_none());
    }
}
