use anyhow::{Context, Result};
use reqwest::blocking::Client;

// ---------------------------------------------------------------------------
// Server session (logout endpoint)
// ---------------------------------------------------------------------------

/// Thin collaborator around the server the dataset came from. The viewer
/// itself is fully offline; the only call it ever makes is the logout POST.
pub struct Session {
    base_url: String,
    client: Client,
}

impl Session {
    /// Build a session against `base_url` (e.g. `http://localhost:8000`).
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .cookie_store(true)
            .build()
            .context("building HTTP client")?;
        Ok(Session {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// POST to `{base}/logout`; the caller returns the UI to its start
    /// screen afterwards.
    pub fn logout(&self) -> Result<()> {
        let url = format!("{}/logout", self.base_url);
        let response = self
            .client
            .post(&url)
            .send()
            .with_context(|| format!("POST {url}"))?;
        response
            .error_for_status()
            .with_context(|| format!("POST {url}"))?;
        log::info!("Logged out of {}", self.base_url);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_normalised() {
        let session = Session::new("http://localhost:8000/").unwrap();
        assert_eq!(session.base_url, "http://localhost:8000");
    }
}
