// ============================================================================
// FETCH TRANSPORT - Implementación de `Transport` sobre gloo-net (navegador)
// ============================================================================
// El presupuesto de tiempo se aplica con un AbortController que dispara un
// `Timeout` de gloo-timers; al soltar el `Timeout` se cancela.
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use gloo_net::http::{Method, RequestBuilder};
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsValue;
use web_sys::{AbortController, Blob, BlobPropertyBag, FormData};

use super::transport::{FilePart, HttpMethod, HttpRequest, HttpResponse, RequestBody, Transport, TransportError};

#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

impl FetchTransport {
    pub fn new() -> Self {
        Self
    }
}

impl Transport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let controller = AbortController::new().map_err(|e| TransportError::network(js_message(&e)))?;
        let signal = controller.signal();

        let mut builder = RequestBuilder::new(&request.url)
            .method(method(request.method))
            .abort_signal(Some(&signal));
        if !request.query.is_empty() {
            builder = builder.query(request.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let built = match &request.body {
            RequestBody::Empty => builder.build(),
            RequestBody::Json(value) => builder.json(value),
            RequestBody::Multipart(parts) => builder.body(form_data(parts)?),
        }
        .map_err(|e| TransportError::network(e.to_string()))?;

        let timed_out = Rc::new(Cell::new(false));
        let budget_ms = u32::try_from(request.timeout.as_millis()).unwrap_or(u32::MAX);
        let _timeout = {
            let timed_out = timed_out.clone();
            Timeout::new(budget_ms, move || {
                timed_out.set(true);
                controller.abort();
            })
        };

        let response = match built.send().await {
            Ok(response) => response,
            Err(_) if timed_out.get() => {
                log::warn!("⏱️ [HTTP] {} {} abortado tras {}ms", request.method, request.url, budget_ms);
                return Err(TransportError::timeout(request.timeout));
            }
            Err(e) => return Err(TransportError::network(e.to_string())),
        };

        let status = response.status();
        let body = response
            .binary()
            .await
            .map_err(|e| TransportError::network(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}

fn method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    }
}

/// `multipart/form-data`; el navegador pone el boundary
fn form_data(parts: &[FilePart]) -> Result<FormData, TransportError> {
    let form = FormData::new().map_err(|e| TransportError::network(js_message(&e)))?;
    for part in parts {
        let bytes = js_sys::Uint8Array::from(part.bytes.as_slice());
        let sequence = js_sys::Array::of1(&bytes);
        let options = BlobPropertyBag::new();
        options.set_type(&part.content_type);

        let blob = Blob::new_with_u8_array_sequence_and_options(&sequence, &options)
            .map_err(|e| TransportError::network(js_message(&e)))?;
        form.append_with_blob_and_filename(&part.field, &blob, &part.file_name)
            .map_err(|e| TransportError::network(js_message(&e)))?;
    }
    Ok(form)
}

fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
