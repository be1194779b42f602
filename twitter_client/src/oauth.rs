//! OAuth 1.0a request signing (HMAC-SHA1) for user-context REST calls.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use hmac::{Hmac, Mac};
use sha1::Sha1;

use crate::config::Credentials;
use crate::error::{Error, Result};

type HmacSha1 = Hmac<Sha1>;

#[derive(Debug, Clone)]
pub struct OAuthSigner {
    credentials: Credentials,
}

impl OAuthSigner {
    pub fn new(credentials: Credentials) -> Self {
        OAuthSigner { credentials }
    }

    /// Build the `Authorization` header value for a request.
    /// `url` must not carry a query string; query and form parameters go in `params`.
    pub fn sign(&self, method: &str, url: &str, params: &[(String, String)]) -> Result<String> {
        let timestamp = chrono::Utc::now().timestamp().to_string();
        self.sign_with(method, url, params, &generate_nonce(), &timestamp)
    }

    pub(crate) fn sign_with(
        &self,
        method: &str,
        url: &str,
        params: &[(String, String)],
        nonce: &str,
        timestamp: &str,
    ) -> Result<String> {
        let mut oauth_params = vec![
            ("oauth_consumer_key".to_string(), self.credentials.consumer_key.clone()),
            ("oauth_nonce".to_string(), nonce.to_string()),
            ("oauth_signature_method".to_string(), "HMAC-SHA1".to_string()),
            ("oauth_timestamp".to_string(), timestamp.to_string()),
            ("oauth_token".to_string(), self.credentials.access_token.clone()),
            ("oauth_version".to_string(), "1.0".to_string()),
        ];

        let signature = self.signature(method, url, oauth_params.iter().chain(params.iter()))?;
        oauth_params.push(("oauth_signature".to_string(), signature));

        let header = oauth_params
            .iter()
            .map(|(k, v)| format!("{}=\"{}\"", percent_encode(k), percent_encode(v)))
            .collect::<Vec<_>>()
            .join(", ");
        Ok(format!("OAuth {}", header))
    }

    fn signature<'a>(
        &self,
        method: &str,
        url: &str,
        params: impl Iterator<Item = &'a (String, String)>,
    ) -> Result<String> {
        // Parameters are sorted by encoded key, then by encoded value.
        let mut encoded: Vec<(String, String)> = params.map(|(k, v)| (percent_encode(k), percent_encode(v))).collect();
        encoded.sort();
        let param_string = encoded
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&");

        let base_string = format!(
            "{}&{}&{}",
            method.to_uppercase(),
            percent_encode(url),
            percent_encode(&param_string)
        );
        let signing_key = format!(
            "{}&{}",
            percent_encode(&self.credentials.consumer_secret),
            percent_encode(&self.credentials.access_token_secret)
        );

        let mut mac = HmacSha1::new_from_slice(signing_key.as_bytes()).map_err(|e| Error::Signature(e.to_string()))?;
        mac.update(base_string.as_bytes());
        Ok(BASE64.encode(mac.finalize().into_bytes()))
    }
}

/// RFC 3986 encoding: everything but `A-Z a-z 0-9 - . _ ~`.
fn percent_encode(s: &str) -> String {
    urlencoding::encode(s).into_owned()
}

fn generate_nonce() -> String {
    use rand::RngCore;
    let mut bytes = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut bytes);
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
