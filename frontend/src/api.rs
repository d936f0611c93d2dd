use gloo_net::http::Request;
use shared::{ErrorResponse, PredictionResponse, TransactionRecord};

pub const PREDICT_ENDPOINT: &str = "/predict";
pub const CONNECTION_ERROR: &str = "Failed to connect to the server. Please try again.";

pub async fn request_prediction(record: &TransactionRecord) -> Result<PredictionResponse, String> {
    let request = Request::post(PREDICT_ENDPOINT)
        .json(record)
        .map_err(|e| format!("Failed to build request: {}", e))?;

    let response = request.send().await.map_err(|err| {
        gloo_console::error!(format!("Fetch error: {:?}", err));
        CONNECTION_ERROR.to_string()
    })?;

    if response.ok() {
        return response
            .json::<PredictionResponse>()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e));
    }

    let status = response.status();
    match response.json::<ErrorResponse>().await {
        Ok(body) => Err(body.error),
        Err(_) => Err(format!("Server error: {}", status)),
    }
}
