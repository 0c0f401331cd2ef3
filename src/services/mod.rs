pub mod api_client;
pub mod endpoints;
pub mod notifier;
pub mod transport;

#[cfg(target_arch = "wasm32")]
pub mod http;

pub use api_client::{ApiClient, ApiRequest};
pub use notifier::{LogNotifier, Notifier};
pub use transport::{
    FilePart, HttpMethod, HttpRequest, HttpResponse, RequestBody, ResponseKind, Transport, TransportError,
};

#[cfg(target_arch = "wasm32")]
pub use http::FetchTransport;
