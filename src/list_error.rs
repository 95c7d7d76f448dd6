use std::error::Error;
use std::fmt;

use rusoto_core::region::ParseRegionError;
use rusoto_core::request::TlsError;
use rusoto_core::RusotoError;
use rusoto_credential::CredentialsError;
use rusoto_s3::ListBucketsError;

#[derive(Debug)]
pub enum ListError {
    Authentication(String),
    Configuration(String),
    Network(String),
    MalformedResponse(String),
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ListError::Authentication(msg) => write!(f, "authentication failed: {}", msg),
            ListError::Configuration(msg) => write!(f, "configuration error: {}", msg),
            ListError::Network(msg) => write!(f, "network error: {}", msg),
            ListError::MalformedResponse(msg) => write!(f, "malformed response: {}", msg),
        }
    }
}

impl Error for ListError {}

impl From<CredentialsError> for ListError {
    fn from(err: CredentialsError) -> Self {
        ListError::Authentication(err.message)
    }
}

impl From<TlsError> for ListError {
    fn from(err: TlsError) -> Self {
        ListError::Configuration(err.to_string())
    }
}

impl From<ParseRegionError> for ListError {
    fn from(err: ParseRegionError) -> Self {
        ListError::Configuration(err.to_string())
    }
}

// ListBuckets has no modeled service errors, so anything the service rejects
// comes back as an Unknown response and is classified by status code here.
impl From<RusotoError<ListBucketsError>> for ListError {
    fn from(err: RusotoError<ListBucketsError>) -> Self {
        match err {
            RusotoError::Credentials(err) => ListError::Authentication(err.message),
            RusotoError::HttpDispatch(err) => ListError::Network(err.to_string()),
            RusotoError::ParseError(msg) => ListError::MalformedResponse(msg),
            RusotoError::Unknown(resp) if resp.status.as_u16() == 401 || resp.status.as_u16() == 403 => {
                ListError::Authentication(format!(
                    "service rejected the request with status {}: {}",
                    resp.status,
                    String::from_utf8_lossy(&resp.body).trim()
                ))
            }
            RusotoError::Unknown(resp) => {
                ListError::Network(format!("unexpected status {} from the service", resp.status))
            }
            RusotoError::Service(err) => ListError::Network(err.to_string()),
            RusotoError::Validation(msg) => ListError::Configuration(msg),
            RusotoError::Blocking => ListError::Network("failed to dispatch the request".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusoto_core::request::HttpDispatchError;
    use std::io;

    #[test]
    fn test_display_carries_the_failure_kind() {
        let err = ListError::Authentication("profile not found".to_string());
        assert_eq!(err.to_string(), "authentication failed: profile not found");

        let err = ListError::MalformedResponse("no name".to_string());
        assert_eq!(err.to_string(), "malformed response: no name");
    }

    #[test]
    fn test_credentials_error_is_authentication() {
        let err: ListError = CredentialsError::new("expired credentials").into();
        assert!(matches!(err, ListError::Authentication(_)));
    }

    #[test]
    fn test_dispatch_error_is_network() {
        let dispatch = HttpDispatchError::from(io::Error::new(
            io::ErrorKind::ConnectionReset,
            "connection reset by peer",
        ));
        let err: ListError = RusotoError::<ListBucketsError>::HttpDispatch(dispatch).into();
        assert!(matches!(err, ListError::Network(_)));
    }

    #[test]
    fn test_parse_error_is_malformed_response() {
        let err: ListError =
            RusotoError::<ListBucketsError>::ParseError("unexpected token".to_string()).into();
        assert!(matches!(err, ListError::MalformedResponse(_)));
    }

    #[test]
    fn test_validation_error_is_configuration() {
        let err: ListError =
            RusotoError::<ListBucketsError>::Validation("bad request shape".to_string()).into();
        assert!(matches!(err, ListError::Configuration(_)));
    }
}
