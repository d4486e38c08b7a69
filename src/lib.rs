//#![deny(rust_2018_idioms, unused, unused_import_braces, unused_qualifications, warnings)]

pub mod args;
pub mod backend;
pub mod form;
pub mod output;
pub mod util;

use {
    std::{
        path::{
            Path,
            PathBuf
        },
        time::Duration
    },
    log::debug,
    reqwest::blocking::Client,
    crate::{
        backend::{
            Backend,
            Payload
        },
        form::FormState,
        util::Error
    }
};

/// Status line set after a submission that saved a file.
pub const SUCCESS_MESSAGE: &str = "Presentation generated successfully! Check your downloads.";

/// Builds the shared HTTP client. Generation can take a while on the
/// server, hence the long timeout.
pub fn client() -> Result<Client, Error> {
    Ok(Client::builder()
        .default_headers({
            let mut headers = reqwest::header::HeaderMap::new();
            headers.insert(reqwest::header::USER_AGENT, reqwest::header::HeaderValue::from_static(concat!("lessongen/", env!("CARGO_PKG_VERSION"))));
            headers
        })
        .timeout(Duration::from_secs(600))
        .use_rustls_tls()
        .build()?
    )
}

/// A successfully saved presentation.
#[derive(Debug)]
pub struct Generated {
    pub path: PathBuf
}

/// Runs one submission: validates and builds the payload, performs the
/// generation call, and on a 200 saves the returned file into `save_dir`.
/// Validation failures return before anything is sent, and nothing is
/// written unless the call succeeded.
pub fn run(client: &Client, backend: &Backend, form: &FormState, save_dir: &Path) -> Result<Generated, Error> {
    let payload = Payload::build(form)?;
    debug!("requesting {} slides on {:?}", payload.num_slides, payload.lesson_topic);
    let response = backend.generate(client, &payload)?;
    if response.is_success() {
        let path = output::save(save_dir, &payload.lesson_topic, &response.body)?;
        Ok(Generated { path })
    } else {
        Err(response.server_error())
    }
}

/// Folds a submission outcome into the status line shown to the user.
/// Exactly one message per attempt: the success notice, a server-reported
/// error, or an exception-derived string.
pub fn status_message(result: &Result<Generated, Error>) -> String {
    match result {
        Ok(_) => SUCCESS_MESSAGE.into(),
        Err(e) => e.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_builds() {
        client().expect("failed to create HTTP client");
    }

    #[test]
    fn status_message_marks_success() {
        let result = Ok(Generated { path: PathBuf::from("Photosynthesis_lesson.pptx") });
        assert!(status_message(&result).contains("successfully"));
    }

    #[test]
    fn status_message_passes_errors_through() {
        let result = Err(Error::InvalidSlideCount);
        assert_eq!(status_message(&result), "Number of slides must be a number between 1 and 10.");
    }
}
