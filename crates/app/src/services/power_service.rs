//! Power service — forwards `turn on` / `turn off` voice commands to Home Assistant.

use hasspower_domain::action::{CommandPayload, PowerAction};
use hasspower_domain::endpoint::{ApiKey, HassEndpoint};
use hasspower_domain::entity::{Entity, device_from_entities};
use hasspower_domain::error::EndpointError;
use hasspower_domain::outcome::{Outcome, OutcomeCode};

use crate::error::DispatchError;
use crate::ports::config::{APIKEY, HOSTNAME, PORT};
use crate::ports::localizer::Params;
use crate::ports::{ConfigProvider, HttpClient, Localizer};

/// Status Home Assistant answers with when it accepted the event.
const STATUS_OK: u16 = 200;

/// Application service handling the power commands of the skill.
///
/// Every operation reads configuration at call time and performs at most
/// one HTTP request.
pub struct PowerService<C, L, H> {
    config: C,
    localizer: L,
    http: H,
}

impl<C, L, H> PowerService<C, L, H>
where
    C: ConfigProvider,
    L: Localizer,
    H: HttpClient,
{
    /// Create a new service from its collaborators.
    pub fn new(config: C, localizer: L, http: H) -> Self {
        Self {
            config,
            localizer,
            http,
        }
    }

    /// Turn on the device named in `entities`.
    #[tracing::instrument(skip(self, entities))]
    pub async fn power_on(&self, voice_text: &str, entities: &[Entity]) -> Outcome {
        self.dispatch(PowerAction::PowerOn, entities).await
    }

    /// Turn off the device named in `entities`.
    #[tracing::instrument(skip(self, entities))]
    pub async fn power_off(&self, voice_text: &str, entities: &[Entity]) -> Outcome {
        self.dispatch(PowerAction::PowerOff, entities).await
    }

    /// Gate run before any network call: the API key must be configured.
    ///
    /// Returns `Some` outcome when the invocation must stop here.
    pub fn handle_validity(&self) -> Option<Outcome> {
        if self.api_key().is_some() {
            return None;
        }
        tracing::debug!("no api key configured");
        Some(self.outcome(OutcomeCode::KeyNotProvided, &[]))
    }

    async fn dispatch(&self, action: PowerAction, entities: &[Entity]) -> Outcome {
        if let Some(outcome) = self.handle_validity() {
            return outcome;
        }

        let Some(device) = device_from_entities(entities) else {
            tracing::debug!(entities = entities.len(), "no device entity recognized");
            return self.outcome(OutcomeCode::DeviceNotProvided, &[]);
        };

        self.post_power_data_to_hass(action, device).await
    }

    /// Send `action` for `device` and translate the response.
    ///
    /// The request carries the lower-cased device name; the message keeps
    /// the name as the user said it.
    #[tracing::instrument(skip(self, action), fields(action = action.verb()))]
    pub async fn post_power_data_to_hass(&self, action: PowerAction, device: &str) -> Outcome {
        match self.post_data_to_hass(&action.payload(device)).await {
            Ok(STATUS_OK) => {
                tracing::info!("device command accepted");
                self.outcome(action.success_code(), &[("device", device)])
            }
            Ok(status) => {
                tracing::warn!(status, "home assistant rejected the command");
                let code = status.to_string();
                self.outcome(OutcomeCode::ConnectionFailed, &[("code", code.as_str())])
            }
            Err(err) => self.failure_outcome(&err),
        }
    }

    /// Post `payload` to the event endpoint and return the HTTP status.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::Endpoint`] when `apikey`, `hostname` or
    /// `port` is missing, and [`DispatchError::Transport`] when no response
    /// was received.
    pub async fn post_data_to_hass(&self, payload: &CommandPayload) -> Result<u16, DispatchError> {
        let api_key = self
            .api_key()
            .ok_or(EndpointError::MissingSetting(APIKEY))?;
        let url = self.endpoint()?.events_url();
        tracing::debug!(%url, "posting command");
        Ok(self.http.post_json(&url, &api_key, payload).await?)
    }

    /// Bare `GET` on `{hostname}:{port}`, returning the HTTP status.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::Endpoint`] when `hostname` or `port` is
    /// missing, and [`DispatchError::Transport`] when no response was
    /// received.
    pub async fn check_hass_connection(&self) -> Result<u16, DispatchError> {
        let endpoint = self.endpoint()?;
        Ok(self.http.get(endpoint.base_url()).await?)
    }

    /// Run the connectivity probe and report it as an outcome.
    #[tracing::instrument(skip(self))]
    pub async fn check_connection(&self) -> Outcome {
        match self.check_hass_connection().await {
            Ok(STATUS_OK) => self.outcome(OutcomeCode::ConnectionSucceeded, &[]),
            Ok(status) => {
                tracing::warn!(status, "connectivity probe failed");
                let code = status.to_string();
                self.outcome(OutcomeCode::ConnectionFailed, &[("code", code.as_str())])
            }
            Err(err) => self.failure_outcome(&err),
        }
    }

    fn failure_outcome(&self, err: &DispatchError) -> Outcome {
        match err {
            DispatchError::Endpoint(EndpointError::MissingSetting(key)) => {
                tracing::warn!(key, "configuration incomplete");
                self.outcome(OutcomeCode::ConfigIncomplete, &[("key", *key)])
            }
            DispatchError::Transport(cause) => {
                let detail = error_chain(cause);
                tracing::warn!(error = %detail, "could not reach home assistant");
                self.outcome(OutcomeCode::TransportError, &[("error", detail.as_str())])
            }
        }
    }

    fn api_key(&self) -> Option<ApiKey> {
        ApiKey::new(self.config.get(APIKEY).as_deref())
    }

    fn endpoint(&self) -> Result<HassEndpoint, EndpointError> {
        HassEndpoint::new(
            self.config.get(HOSTNAME).as_deref(),
            self.config.get(PORT).as_deref(),
        )
    }

    fn outcome(&self, code: OutcomeCode, params: &Params<'_>) -> Outcome {
        Outcome::end(code, self.localizer.translate(code, params))
    }
}

/// Flatten an error and its sources into `outer: inner: root`.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
