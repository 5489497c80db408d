//! Postal code lookup gateway
//!
//! The gateway is the only place that talks to the outside world. It checks
//! the CEP format locally and hands well-formed codes to a
//! [`PostalCodeService`], which answers with address fields, "not found",
//! or a transport failure.

pub mod viacep;

pub use viacep::ViaCepClient;

use tracing::info;

use crate::error::{CepBookError, CepBookResult};
use crate::models::{AddressFields, PostalCode};

/// Backend that resolves a well-formed CEP
///
/// Implementations return [`CepBookError::PostalCodeNotFound`] for unknown
/// codes and [`CepBookError::Transport`] for network or service failures.
pub trait PostalCodeService {
    fn fetch(&self, cep: &PostalCode) -> CepBookResult<AddressFields>;
}

impl<T: PostalCodeService + ?Sized> PostalCodeService for &T {
    fn fetch(&self, cep: &PostalCode) -> CepBookResult<AddressFields> {
        (**self).fetch(cep)
    }
}

/// Validates CEPs before any request is made
pub struct LookupGateway<S> {
    service: S,
}

impl<S: PostalCodeService> LookupGateway<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    /// Look up an exact 8-digit CEP
    ///
    /// Anything else is rejected with a validation error without calling
    /// the service. No retries are attempted.
    pub fn lookup(&self, cep: &str) -> CepBookResult<AddressFields> {
        let cep = PostalCode::parse(cep).map_err(|e| CepBookError::Validation(e.to_string()))?;
        self.lookup_code(&cep)
    }

    /// Look up an already validated CEP
    pub fn lookup_code(&self, cep: &PostalCode) -> CepBookResult<AddressFields> {
        info!(cep = %cep, "looking up CEP");
        self.service.fetch(cep)
    }
}
