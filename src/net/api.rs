//! REST resource services for `/products` and `/users`.
//!
//! These are thin pass-throughs: every call goes through whatever transport
//! they are given, which in the application is the authenticated pipeline.
//!
//! ERROR HANDLING
//! ==============
//! A `401`, or any status the request authenticator flagged as a session
//! rejection, maps to [`ApiError::AuthorizationExpired`]; by the time the
//! caller sees it the user has already been signed out. Other
//! non-2xx statuses carry the backend's message when it sent one.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::marker::PhantomData;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::transport::{ApiRequest, ApiResponse, HttpTransport};
use super::types::{Product, User};
use crate::error::ApiError;

/// A backend collection exposing list/get/create/update/delete.
pub trait Resource: Serialize + DeserializeOwned {
    /// Collection path, e.g. `/products`.
    const ENDPOINT: &'static str;

    /// Singular, lower-case name used in user-facing messages.
    const NAME: &'static str;

    /// Adjust a record before it is sent as an update.
    #[must_use]
    fn prepare_update(self) -> Self {
        self
    }
}

impl Resource for Product {
    const ENDPOINT: &'static str = "/products";
    const NAME: &'static str = "product";
}

impl Resource for User {
    const ENDPOINT: &'static str = "/users";
    const NAME: &'static str = "user";

    fn prepare_update(self) -> Self {
        self.without_blank_password()
    }
}

pub type ProductService<T> = CrudService<T, Product>;
pub type UserService<T> = CrudService<T, User>;

pub struct CrudService<T, R> {
    transport: T,
    _resource: PhantomData<fn() -> R>,
}

impl<T: HttpTransport, R: Resource> CrudService<T, R> {
    pub fn new(transport: T) -> Self {
        Self { transport, _resource: PhantomData }
    }

    fn item_path(id: i64) -> String {
        format!("{}/{id}", R::ENDPOINT)
    }

    /// # Errors
    ///
    /// See the module docs.
    pub async fn list(&self) -> Result<Vec<R>, ApiError> {
        self.fetch(ApiRequest::get(R::ENDPOINT)).await
    }

    /// # Errors
    ///
    /// See the module docs.
    pub async fn get(&self, id: i64) -> Result<R, ApiError> {
        self.fetch(ApiRequest::get(Self::item_path(id))).await
    }

    /// # Errors
    ///
    /// See the module docs.
    pub async fn create(&self, record: &R) -> Result<R, ApiError> {
        let request = ApiRequest::post(R::ENDPOINT)
            .json(record)
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        self.fetch(request).await
    }

    /// # Errors
    ///
    /// See the module docs.
    pub async fn update(&self, id: i64, record: R) -> Result<R, ApiError> {
        let request = ApiRequest::put(Self::item_path(id))
            .json(&record.prepare_update())
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        self.fetch(request).await
    }

    /// # Errors
    ///
    /// See the module docs.
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let response = self.transport.send(ApiRequest::delete(Self::item_path(id))).await?;
        expect_success(response).map(|_| ())
    }

    async fn fetch<V: DeserializeOwned>(&self, request: ApiRequest) -> Result<V, ApiError> {
        let response = expect_success(self.transport.send(request).await?)?;
        response.json().map_err(|e| ApiError::Decode(e.to_string()))
    }
}

fn expect_success(response: ApiResponse) -> Result<ApiResponse, ApiError> {
    if response.is_success() {
        return Ok(response);
    }
    if response.status == 401 || response.session_rejected {
        return Err(ApiError::AuthorizationExpired);
    }
    let message = response
        .error_message()
        .unwrap_or_else(|| format!("request failed with status {}", response.status));
    Err(ApiError::Status { status: response.status, message })
}
