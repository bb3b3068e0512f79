use serde::Deserialize;
use thiserror::Error;

/// The public cat API: answers with a JSON object naming a random image
pub const MEOW_ENDPOINT: &str = "https://aws.random.cat/meow";

/// JSON body returned by the cat API
#[derive(Debug, Deserialize)]
struct MeowResponse {
    /// URL of a random cat image
    file: String,
}

/// Everything one successful loading cycle produces: the image URL the
/// API handed out, plus the downloaded image bytes the view will draw.
#[derive(Debug, Clone)]
pub struct CatImage {
    pub url: String,
    pub bytes: Vec<u8>,
}

/// Ways a loading cycle can fail. The caller treats every variant the
/// same (the previous picture stays up), so they mostly shape the log
/// line.
#[derive(Debug, Clone, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("server answered {0}")]
    Status(reqwest::StatusCode),

    #[error("unexpected response body: {0}")]
    Body(String),

    #[error("image download failed: {0}")]
    Image(String),
}

/// Build the HTTP client shared by every loading cycle.
///
/// No timeout is configured: a cycle simply stays in `Loading` until
/// the transport itself settles the request.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .build()
        .expect("Failed to build HTTP client")
}

/// Parse the API body, yielding the image URL it names
fn parse_meow(body: &[u8]) -> Result<String, FetchError> {
    let meow: MeowResponse =
        serde_json::from_slice(body).map_err(|e| FetchError::Body(e.to_string()))?;
    Ok(meow.file)
}

/// One complete fetch cycle: ask the API for a random cat, then
/// download the image it names.
///
/// This future always resolves to a `Result`, never unwinds, so the
/// driver can turn either outcome into the transition back to
/// `Waiting`.
pub async fn fetch_random_cat(client: reqwest::Client) -> Result<CatImage, FetchError> {
    let response = client
        .get(MEOW_ENDPOINT)
        .send()
        .await
        .map_err(|e| FetchError::Request(e.to_string()))?;

    if !response.status().is_success() {
        return Err(FetchError::Status(response.status()));
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| FetchError::Request(e.to_string()))?;

    let url = parse_meow(&body)?;

    // A browser <img> element would fetch these bytes implicitly; a
    // native widget needs them in hand before it can draw.
    let image = client
        .get(&url)
        .send()
        .await
        .map_err(|e| FetchError::Image(e.to_string()))?;

    if !image.status().is_success() {
        return Err(FetchError::Image(format!(
            "server answered {}",
            image.status()
        )));
    }

    let bytes = image
        .bytes()
        .await
        .map_err(|e| FetchError::Image(e.to_string()))?
        .to_vec();

    Ok(CatImage { url, bytes })
}
