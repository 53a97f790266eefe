use crate::config::ClientConfig;
use crate::diagnostics::{Diagnostic, DiagnosticKind, DiagnosticsSink, TracingSink};
use crate::options::{CountryOptions, GeoIpOptions, LookupOptions, ValidatedOptions};
use crate::query::QueryString;
use crate::response::GeoIpResponse;
use crate::transport::{HttpTransport, ReqwestTransport};
use gregeoip_types::{
    ApiKey, CountryModule, Endpoint, GeoIpError, GeoIpModule, GeoIpResult,
};
use std::sync::Arc;
use tracing::{debug, trace};

/// Handle to the GRE GeoIP API.
///
/// Cloning is cheap and all state is read-only, so one client can serve any
/// number of concurrent calls. Nothing touches the network until one of
/// [`geoip`](Self::geoip), [`lookup`](Self::lookup) or [`country`](Self::country)
/// is awaited.
#[derive(Clone)]
pub struct GeoIpClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    key: ApiKey,
    config: ClientConfig,
    transport: Arc<dyn HttpTransport>,
    diagnostics: Arc<dyn DiagnosticsSink>,
}

impl GeoIpClient {
    /// Client with the default host, timeout, reqwest transport and tracing sink.
    ///
    /// Fails with [`GeoIpError::Configuration`] when `key` is empty.
    pub fn new(key: impl Into<String>) -> GeoIpResult<Self> {
        Self::builder(key).build()
    }

    pub fn builder(key: impl Into<String>) -> GeoIpClientBuilder {
        GeoIpClientBuilder::new(key)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// Geolocates the caller's own address (`GeoIP` endpoint).
    pub async fn geoip(&self, options: &GeoIpOptions) -> GeoIpResult<GeoIpResponse> {
        let validated = options.validate::<GeoIpModule>(Endpoint::GeoIp)?;
        self.dispatch(Endpoint::GeoIp, None, validated).await
    }

    /// Geolocates `options.ip` (`IPLookup` endpoint).
    pub async fn lookup(&self, options: &LookupOptions) -> GeoIpResult<GeoIpResponse> {
        let ip = options.validated_ip()?;
        let validated = options.options.validate::<GeoIpModule>(Endpoint::IpLookup)?;
        self.dispatch(Endpoint::IpLookup, Some(("ip", ip)), validated).await
    }

    /// Country reference data for `options.country_code` (`Country` endpoint).
    pub async fn country(&self, options: &CountryOptions) -> GeoIpResult<GeoIpResponse> {
        let code = options.validated_country_code()?;
        let validated = options.options.validate::<CountryModule>(Endpoint::Country)?;
        self.dispatch(Endpoint::Country, Some(("CountryCode", code)), validated).await
    }

    async fn dispatch(
        &self,
        endpoint: Endpoint,
        identifier: Option<(&'static str, String)>,
        options: ValidatedOptions,
    ) -> GeoIpResult<GeoIpResponse> {
        let query = QueryString::for_request(identifier, &self.inner.key, &options);
        trace!(?query, "GeoIP query");

        let url = format!("{}?{}", self.inner.config.endpoint_url(endpoint), query.encode());
        debug!(%endpoint, format = %options.format, "Sending GeoIP request");

        let response = match self.inner.transport.get(&url).await {
            Ok(response) => response,
            Err(e) => return Err(self.fail(endpoint, DiagnosticKind::Transport, e.to_string())),
        };

        if response.status != 200 {
            return Err(self.fail(
                endpoint,
                DiagnosticKind::Status(response.status),
                format!("unexpected HTTP status {}", response.status),
            ));
        }

        GeoIpResponse::decode(options.format, response.body).map_err(|e| {
            self.fail(
                endpoint,
                DiagnosticKind::Decode,
                format!("Failed to decode JSON body: {}", e),
            )
        })
    }

    fn fail(&self, endpoint: Endpoint, kind: DiagnosticKind, detail: String) -> GeoIpError {
        self.inner.diagnostics.record(&Diagnostic {
            endpoint,
            kind,
            detail,
        });
        GeoIpError::RequestFailed
    }
}

impl std::fmt::Debug for GeoIpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeoIpClient")
            .field("key", &self.inner.key)
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}

pub struct GeoIpClientBuilder {
    key: String,
    config: ClientConfig,
    transport: Option<Arc<dyn HttpTransport>>,
    diagnostics: Option<Arc<dyn DiagnosticsSink>>,
}

impl GeoIpClientBuilder {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            config: ClientConfig::default(),
            transport: None,
            diagnostics: None,
        }
    }

    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.config.timeout_secs = secs;
        self
    }

    /// Replaces the reqwest transport. The configured timeout is then up to `transport`.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn diagnostics(mut self, sink: Arc<dyn DiagnosticsSink>) -> Self {
        self.diagnostics = Some(sink);
        self
    }

    pub fn build(self) -> GeoIpResult<GeoIpClient> {
        let key = ApiKey::new(self.key)?;
        self.config.validate()?;

        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new(self.config.timeout())?),
        };
        let diagnostics = self
            .diagnostics
            .unwrap_or_else(|| Arc::new(TracingSink));

        Ok(GeoIpClient {
            inner: Arc::new(ClientInner {
                key,
                config: self.config,
                transport,
                diagnostics,
            }),
        })
    }
}
