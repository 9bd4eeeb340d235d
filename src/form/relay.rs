//! EmailJS REST request body and response classification.

use serde::Serialize;

use super::ContactRecord;
use crate::options::RelayOptions;
use crate::SiteError;

/// Send request understood by the relay's REST API.
#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a ContactRecord,
}

/// Builds requests for, and interprets responses from, the email relay.
///
/// Transport lives in the browser layer; this type only knows the wire
/// format.
#[derive(Debug, Clone)]
pub struct EmailRelay {
    options: RelayOptions,
}

impl EmailRelay {
    /// Relay using the given endpoint and credentials.
    pub fn new(options: RelayOptions) -> Self {
        Self { options }
    }

    /// URL to POST to.
    pub fn endpoint(&self) -> &str {
        &self.options.endpoint
    }

    /// JSON body for delivering `record`.
    pub fn request_body(&self, record: &ContactRecord) -> Result<String, SiteError> {
        let request = SendRequest {
            service_id: &self.options.service_id,
            template_id: &self.options.template_id,
            user_id: &self.options.public_key,
            template_params: record,
        };
        Ok(serde_json::to_string(&request)?)
    }

    /// Map an HTTP response to acceptance or a provider error.
    pub fn check_response(status: u16, body: &str) -> Result<(), SiteError> {
        if (200..300).contains(&status) {
            Ok(())
        } else {
            Err(SiteError::Relay {
                status,
                body: body.to_owned(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ContactRecord {
        ContactRecord {
            from_name: "Ana".to_owned(),
            from_email: "ana@vodovod.si".to_owned(),
            phone: "Ni navedeno".to_owned(),
            service: "popravilo".to_owned(),
            message: "Pušča pipa.".to_owned(),
            to_email: "info@efadskejic.si".to_owned(),
        }
    }

    #[test]
    fn body_carries_credentials_and_params() {
        let relay = EmailRelay::new(RelayOptions::default());
        let body = relay.request_body(&record()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();

        assert_eq!(json["service_id"], "YOUR_SERVICE_ID");
        assert_eq!(json["template_id"], "YOUR_TEMPLATE_ID");
        assert_eq!(json["user_id"], "YOUR_PUBLIC_KEY");
        assert_eq!(json["template_params"]["from_name"], "Ana");
        assert_eq!(json["template_params"]["phone"], "Ni navedeno");
        assert_eq!(json["template_params"]["to_email"], "info@efadskejic.si");
    }

    #[test]
    fn only_2xx_is_accepted() {
        assert_eq!(EmailRelay::check_response(200, "OK"), Ok(()));
        assert_eq!(EmailRelay::check_response(204, ""), Ok(()));
        assert_eq!(
            EmailRelay::check_response(400, "The user ID is invalid"),
            Err(SiteError::Relay {
                status: 400,
                body: "The user ID is invalid".to_owned(),
            })
        );
        assert!(EmailRelay::check_response(302, "").is_err());
    }
}
