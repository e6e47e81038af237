//! Conversions from external infrastructure errors into domain errors.

use std::io::{Error as IoError, ErrorKind};

use crmdesk_domain::CrmError;
use reqwest::Error as HttpError;
use serde_json::Error as JsonError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub CrmError);

impl From<InfraError> for CrmError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<CrmError> for InfraError {
    fn from(value: CrmError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoCrmError {
    fn into_crm(self) -> CrmError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → CrmError */
/* -------------------------------------------------------------------------- */

impl IntoCrmError for HttpError {
    fn into_crm(self) -> CrmError {
        if self.is_timeout() {
            return CrmError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return CrmError::Network("HTTP connection failure".into());
        }

        if self.is_decode() {
            return CrmError::Decode(format!("failed to parse response: {self}"));
        }

        if self.is_builder() {
            return CrmError::Config(format!("invalid HTTP request: {self}"));
        }

        if let Some(status) = self.status() {
            return CrmError::Api(format!(
                "HTTP {} {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("unknown status")
            ));
        }

        CrmError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_crm())
    }
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → CrmError */
/* -------------------------------------------------------------------------- */

impl IntoCrmError for IoError {
    fn into_crm(self) -> CrmError {
        match self.kind() {
            ErrorKind::PermissionDenied => {
                CrmError::Storage(format!("permission denied: {self}"))
            }
            ErrorKind::NotFound => CrmError::Storage(format!("file not found: {self}")),
            _ => CrmError::Storage(self.to_string()),
        }
    }
}

impl From<IoError> for InfraError {
    fn from(value: IoError) -> Self {
        InfraError(value.into_crm())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → CrmError */
/* -------------------------------------------------------------------------- */

impl IntoCrmError for JsonError {
    fn into_crm(self) -> CrmError {
        if self.is_io() {
            CrmError::Storage(self.to_string())
        } else {
            CrmError::Decode(format!("invalid JSON at line {} column {}: {self}", self.line(), self.column()))
        }
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(value.into_crm())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */

#[cfg(test)]
mod tests {
    use std::net::TcpListener;

    use reqwest::Client;

    use super::*;

    #[test]
    fn io_permission_denied_maps_to_storage() {
        let err = IoError::new(ErrorKind::PermissionDenied, "nope");
        let mapped: CrmError = InfraError::from(err).into();
        match mapped {
            CrmError::Storage(msg) => assert!(msg.contains("permission denied")),
            other => panic!("expected storage error, got {other:?}"),
        }
    }

    #[test]
    fn json_syntax_error_maps_to_decode() {
        let err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let mapped: CrmError = InfraError::from(err).into();
        assert!(matches!(mapped, CrmError::Decode(_)));
    }

    #[tokio::test]
    async fn refused_connection_maps_to_network() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = Client::builder().no_proxy().build().unwrap();
        let error = client.get(format!("http://{addr}")).send().await.unwrap_err();

        let mapped: CrmError = InfraError::from(error).into();
        assert!(matches!(mapped, CrmError::Network(_)), "got {mapped:?}");
    }
}
