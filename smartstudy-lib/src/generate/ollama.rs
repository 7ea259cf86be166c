use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::generate::{GenerationParams, Generator};
use crate::{Error, Result};

/// Generator backed by an Ollama-compatible `/api/generate` endpoint.
pub struct OllamaGenerator {
    client: Client,
    endpoint: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Debug, Serialize)]
struct GenerateOptions {
    num_predict: u32,
    temperature: f32,
    top_p: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

impl OllamaGenerator {
    /// Create a generator for `model` served at `endpoint`.
    ///
    /// No timeout is applied unless one is given.
    pub fn new(endpoint: &str, model: &str, timeout: Option<Duration>) -> Result<Self> {
        // the blocking client defaults to 30s; `None` lifts that limit
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Generation(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            model: model.to_string(),
        })
    }

    fn url(&self) -> String {
        format!("{}/api/generate", self.endpoint)
    }

    fn request<'a>(&'a self, prompt: &'a str, params: &GenerationParams) -> GenerateRequest<'a> {
        GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
            options: GenerateOptions {
                num_predict: params.max_length,
                temperature: params.temperature,
                top_p: params.top_p,
            },
        }
    }
}

impl Generator for OllamaGenerator {
    fn model_name(&self) -> &str {
        &self.model
    }

    fn generate(&mut self, prompt: &str, params: &GenerationParams) -> Result<String> {
        params.validate()?;

        debug!(model = %self.model, prompt_len = prompt.len(), "requesting generation");

        let response = self
            .client
            .post(self.url())
            .json(&self.request(prompt, params))
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| Error::Generation(e.to_string()))?;

        let body: GenerateResponse = response
            .json()
            .map_err(|e| Error::Generation(format!("malformed response: {e}")))?;

        if body.response.trim().is_empty() {
            return Err(Error::Generation("model returned empty text".to_string()));
        }

        Ok(body.response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, BufReader, Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serve a single canned HTTP response on a local port, returning the endpoint.
    fn serve_once(status: &str, body: &str) -> (String, thread::JoinHandle<()>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let endpoint = format!("http://{}", listener.local_addr().unwrap());
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );

        let handle = thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream);

            // consume the request so the client sees a clean response
            let mut content_length = 0;
            loop {
                let mut line = String::new();
                reader.read_line(&mut line).unwrap();
                if line == "\r\n" || line.is_empty() {
                    break;
                }
                if let Some((name, value)) = line.split_once(':') {
                    if name.eq_ignore_ascii_case("content-length") {
                        content_length = value.trim().parse().unwrap();
                    }
                }
            }
            let mut request_body = vec![0; content_length];
            reader.read_exact(&mut request_body).unwrap();

            let mut stream = reader.into_inner();
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();
        });

        (endpoint, handle)
    }

    #[test]
    fn test_url_trims_trailing_slash() {
        let generator = OllamaGenerator::new("http://localhost:11434/", "m", None).unwrap();
        assert_eq!(generator.url(), "http://localhost:11434/api/generate");
    }

    #[test]
    fn test_request_body_shape() {
        let generator = OllamaGenerator::new("http://localhost:11434", "tiny", None).unwrap();
        let params = GenerationParams::default();
        let body = serde_json::to_value(generator.request("Explain X", &params)).unwrap();

        assert_eq!(body["model"], "tiny");
        assert_eq!(body["prompt"], "Explain X");
        assert_eq!(body["stream"], false);
        assert_eq!(body["options"]["num_predict"], 200);
        assert!((body["options"]["top_p"].as_f64().unwrap() - 0.9).abs() < 1e-6);
    }

    #[test]
    fn test_response_parsing() {
        let body: GenerateResponse =
            serde_json::from_str(r#"{"model":"tiny","response":"Hello","done":true}"#).unwrap();
        assert_eq!(body.response, "Hello");
    }

    #[test]
    fn test_unreachable_endpoint_is_generation_error() {
        let mut generator = OllamaGenerator::new(
            "http://127.0.0.1:9",
            "tiny",
            Some(Duration::from_millis(500)),
        )
        .unwrap();

        let err = generator
            .generate("Explain X", &GenerationParams::default())
            .unwrap_err();
        assert!(matches!(err, Error::Generation(_)));
    }

    #[test]
    fn test_server_error_is_generation_error() {
        let (endpoint, server) = serve_once("500 Internal Server Error", r#"{"error":"boom"}"#);
        let mut generator =
            OllamaGenerator::new(&endpoint, "tiny", Some(Duration::from_secs(5))).unwrap();

        let err = generator
            .generate("Explain X", &GenerationParams::default())
            .unwrap_err();

        assert!(matches!(err, Error::Generation(_)));
        server.join().unwrap();
    }

    #[test]
    fn test_blank_response_is_generation_error() {
        let (endpoint, server) = serve_once("200 OK", r#"{"response":"  ","done":true}"#);
        let mut generator =
            OllamaGenerator::new(&endpoint, "tiny", Some(Duration::from_secs(5))).unwrap();

        let err = generator
            .generate("Explain X", &GenerationParams::default())
            .unwrap_err();

        assert!(matches!(err, Error::Generation(ref msg) if msg.contains("empty")));
        server.join().unwrap();
    }

    #[test]
    fn test_ok_response_returned_verbatim() {
        let (endpoint, server) =
            serve_once("200 OK", r#"{"response":" Recursion repeats. ","done":true}"#);
        let mut generator =
            OllamaGenerator::new(&endpoint, "tiny", Some(Duration::from_secs(5))).unwrap();

        let text = generator
            .generate("Explain X", &GenerationParams::default())
            .unwrap();

        assert_eq!(text, " Recursion repeats. ");
        server.join().unwrap();
    }

    #[test]
    #[ignore] // Requires a running Ollama server with the model pulled
    fn test_generates_text() {
        let mut generator =
            OllamaGenerator::new("http://localhost:11434", "llama3.2:1b", None).unwrap();
        let text = generator
            .generate("Explain recursion in one sentence.", &GenerationParams::default())
            .unwrap();
        assert!(!text.trim().is_empty());
    }
}
