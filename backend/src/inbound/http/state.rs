//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{LmsUserService, NoOpRequestObserver, RequestObserver};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub lms: Arc<dyn LmsUserService>,
    pub observer: Arc<dyn RequestObserver>,
}

impl HttpState {
    /// Construct state around an LMS port with a no-op observer.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    /// use std::time::Duration;
    ///
    /// use lms_gateway::inbound::http::state::HttpState;
    /// use lms_gateway::outbound::moodle::MoodleHttpClient;
    ///
    /// let endpoint = "https://lms.example.org/webservice/rest/server.php"
    ///     .parse()
    ///     .expect("valid URL");
    /// let client = MoodleHttpClient::new(endpoint, "token", Duration::from_secs(30), "demo/1.0")
    ///     .expect("client builds");
    /// let state = HttpState::new(Arc::new(client));
    /// let _lms = state.lms.clone();
    /// ```
    pub fn new(lms: Arc<dyn LmsUserService>) -> Self {
        Self {
            lms,
            observer: Arc::new(NoOpRequestObserver),
        }
    }

    /// Replace the request observer.
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn RequestObserver>) -> Self {
        self.observer = observer;
        self
    }
}
