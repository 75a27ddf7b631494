use crate::{BookingId, BookingRecord, RideDetail, RideId, RideList};
use reqwest::StatusCode;

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for the bookings backend.
#[derive(Debug, Clone)]
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    fn format_url(&self, path: &str) -> String {
        format!("{}/api/{path}", &self.address)
    }

    async fn empty_get(&self, path: &str) -> ReqwestResult {
        let request = self.inner_client.get(self.format_url(path));

        // Session cookies are the only credential; the browser attaches them
        // when asked to.
        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }
}

/// Methods on the backend API
impl APIClient {
    /// Booking details. 401 and 404 are meaningful to callers.
    pub async fn get_booking(
        &self,
        booking_id: BookingId,
    ) -> Result<BookingRecord, ClientError> {
        let response = self.empty_get(&format!("bookings/{booking_id}")).await?;
        ok_body(response).await
    }

    /// The rides belonging to a booking.
    pub async fn get_rides(
        &self,
        booking_id: BookingId,
    ) -> Result<RideList, ClientError> {
        let response = self
            .empty_get(&format!("bookings/{booking_id}/rides"))
            .await?;
        ok_body(response).await
    }

    pub async fn get_ride(
        &self,
        booking_id: BookingId,
        ride_id: RideId,
    ) -> Result<RideDetail, ClientError> {
        let response = self
            .empty_get(&format!("bookings/{booking_id}/rides/{ride_id}"))
            .await?;
        ok_body(response).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing response text.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
    #[error("Malformed response from server: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    /// Status code of an unsuccessful response, if the server answered.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::APIError(status, _) => Some(*status),
            Self::Network(e) => e.status(),
            Self::Decode(_) => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}
