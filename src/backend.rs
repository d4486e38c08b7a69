//! Client for the Teacherfy presentation-generation API.

use {
    lazy_static::lazy_static,
    log::debug,
    reqwest::{
        StatusCode,
        blocking::Client
    },
    serde::{
        Deserialize,
        Serialize
    },
    url::Url,
    crate::{
        form::{
            self,
            FormState
        },
        util::Error
    }
};

lazy_static! {
    static ref PRODUCTION_ENDPOINT: Url = Url::parse("http://teacherfy-gma6hncme7cpghda.westus-01.azurewebsites.net/generate").expect("failed to parse production endpoint");
}

/// The request body for the generation endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct Payload {
    pub lesson_topic: String,
    pub district: String,
    pub grade_level: String,
    pub subject_focus: String,
    pub custom_prompt: String,
    pub num_slides: u32
}

impl Payload {
    /// Maps the current form values into a payload, converting the slide
    /// count to an integer. Fails without side effects if the slide count
    /// doesn't validate.
    pub fn build(form: &FormState) -> Result<Payload, Error> {
        let num_slides = form::slide_count(&form.num_slides).ok_or(Error::InvalidSlideCount)?;
        Ok(Payload {
            lesson_topic: form.lesson_topic.clone(),
            district: form.district.clone(),
            grade_level: form.grade_level.clone(),
            subject_focus: form.subject_focus.clone(),
            custom_prompt: form.custom_prompt.clone(),
            num_slides
        })
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>
}

/// The presentation-generation service. Provides API methods.
#[derive(Debug, Clone)]
pub struct Backend {
    pub endpoint: Url
}

impl Backend {
    pub fn new(endpoint: Url) -> Backend {
        Backend { endpoint }
    }

    pub fn production() -> Backend {
        Backend::new(PRODUCTION_ENDPOINT.clone())
    }

    /// Performs the generation call: one POST, no retries. Transport
    /// failures are returned as-is for the caller to surface.
    pub fn generate(&self, client: &Client, payload: &Payload) -> Result<GenerateResponse, Error> {
        debug!("POST {}", self.endpoint);
        let response = client.post(self.endpoint.clone())
            .json(payload)
            .send()?;
        let status = response.status();
        let body = response.bytes()?.to_vec();
        debug!("{} response, {} byte body", status, body.len());
        Ok(GenerateResponse { status, body })
    }
}

/// Status and raw body of a generation call, interpreted by the caller:
/// 200 means `body` is the presentation file, anything else means `body`
/// should hold a JSON error report.
pub struct GenerateResponse {
    pub status: StatusCode,
    pub body: Vec<u8>
}

impl GenerateResponse {
    pub fn is_success(&self) -> bool {
        self.status == StatusCode::OK
    }

    /// Extracts the server-reported error from a non-200 body. An error
    /// body that isn't JSON surfaces as a parse failure rather than a
    /// server report.
    pub fn server_error(&self) -> Error {
        match serde_json::from_slice::<ErrorBody>(&self.body) {
            Ok(body) => Error::Server {
                status: self.status,
                message: body.error.unwrap_or_else(|| format!("Unknown error"))
            },
            Err(e) => Error::Json(e)
        }
    }
}
