//! ViaCEP client
//!
//! Issues `GET {base}/{cep}/json/` against a ViaCEP-compatible service.
//! The service answers unknown codes with HTTP 200 and `{"erro": true}`.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Deserializer};
use tracing::{debug, warn};

use crate::config::Settings;
use crate::error::{CepBookError, CepBookResult};
use crate::models::{AddressFields, PostalCode};

use super::PostalCodeService;

/// Blocking HTTP client for the lookup service
pub struct ViaCepClient {
    client: Client,
    base_url: String,
}

impl ViaCepClient {
    /// Build a client for `base_url`, e.g. `https://viacep.com.br/ws`
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> CepBookResult<Self> {
        let mut builder =
            Client::builder().user_agent(concat!("cepbook/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| CepBookError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Build a client from user settings
    pub fn from_settings(settings: &Settings) -> CepBookResult<Self> {
        Self::new(
            settings.lookup_base_url.clone(),
            settings.lookup_timeout_secs.map(Duration::from_secs),
        )
    }

    /// Request URL for a CEP
    pub fn url_for(&self, cep: &PostalCode) -> String {
        format!("{}/{}/json/", self.base_url, cep)
    }
}

impl PostalCodeService for ViaCepClient {
    fn fetch(&self, cep: &PostalCode) -> CepBookResult<AddressFields> {
        let url = self.url_for(cep);
        debug!(%url, "sending lookup request");

        let response = self.client.get(&url).send().map_err(|e| {
            warn!(error = %e, "lookup request failed");
            CepBookError::Transport(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "lookup service returned an error status");
            return Err(CepBookError::Transport(format!(
                "Lookup service responded with {}",
                status
            )));
        }

        let body = response
            .text()
            .map_err(|e| CepBookError::Transport(format!("Failed to read response: {}", e)))?;

        parse_response(cep, &body)
    }
}

#[derive(Deserialize)]
struct ViaCepResponse {
    #[serde(default, deserialize_with = "erro_flag")]
    erro: bool,
    #[serde(flatten)]
    fields: AddressFields,
}

// ViaCEP has sent both `true` and `"true"` for the not-found marker.
fn erro_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    Ok(match Option::<Flag>::deserialize(deserializer)? {
        Some(Flag::Bool(flag)) => flag,
        Some(Flag::Text(text)) => text.eq_ignore_ascii_case("true"),
        None => false,
    })
}

/// Translate a successful response body into fields or "not found"
pub fn parse_response(cep: &PostalCode, body: &str) -> CepBookResult<AddressFields> {
    let response: ViaCepResponse = serde_json::from_str(body).map_err(|e| {
        CepBookError::Transport(format!("Unexpected response from lookup service: {}", e))
    })?;

    if response.erro {
        return Err(CepBookError::PostalCodeNotFound(cep.to_string()));
    }

    Ok(response.fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cep() -> PostalCode {
        PostalCode::parse("01001000").unwrap()
    }

    #[test]
    fn test_parse_full_response() {
        let body = r#"{
            "cep": "01001-000",
            "logradouro": "Praça da Sé",
            "complemento": "lado ímpar",
            "unidade": "",
            "bairro": "Sé",
            "localidade": "São Paulo",
            "uf": "SP",
            "estado": "São Paulo",
            "regiao": "Sudeste",
            "ibge": "3550308",
            "gia": "1004",
            "ddd": "11",
            "siafi": "7107"
        }"#;

        let fields = parse_response(&cep(), body).unwrap();
        assert_eq!(fields.logradouro, "Praça da Sé");
        assert_eq!(fields.localidade, "São Paulo");
        assert_eq!(fields.uf, "SP");
        assert_eq!(fields.siafi, "7107");
    }

    #[test]
    fn test_parse_sparse_response() {
        let body = r#"{"cep": "69945-000", "localidade": "Acrelândia", "uf": "AC"}"#;

        let fields = parse_response(&cep(), body).unwrap();
        assert_eq!(fields.logradouro, "");
        assert_eq!(fields.localidade, "Acrelândia");
    }

    #[test]
    fn test_erro_marker_means_not_found() {
        for body in [r#"{"erro": true}"#, r#"{"erro": "true"}"#] {
            let err = parse_response(&cep(), body).unwrap_err();
            assert!(matches!(err, CepBookError::PostalCodeNotFound(ref c) if c == "01001000"));
        }
    }

    #[test]
    fn test_malformed_body_is_transport_error() {
        let err = parse_response(&cep(), "<html>bad gateway</html>").unwrap_err();
        assert!(err.is_retryable());
    }

    #[test]
    fn test_url_building() {
        let client = ViaCepClient::new("https://viacep.com.br/ws/", None).unwrap();
        assert_eq!(
            client.url_for(&cep()),
            "https://viacep.com.br/ws/01001000/json/"
        );
    }

    #[test]
    fn test_unreachable_service_is_transport_error() {
        // Port 9 (discard) on localhost is closed in test environments
        let client =
            ViaCepClient::new("http://127.0.0.1:9/ws", Some(Duration::from_secs(2))).unwrap();

        let err = client.fetch(&cep()).unwrap_err();
        assert!(err.is_retryable());
    }
}
