use std::{fmt, time::Duration};

use reqwest::{Method, StatusCode, header::CONTENT_TYPE};
use tracing::{debug, warn};
use url::Url;

use crate::domain::{Domain, DomainsList, NewDomain, SortIndex, SortOrder};
use crate::record::{NewRecord, Record, RecordFilter, RecordsList, UpdateRecord};
use crate::signer::{API_KEY_HEADER, HMAC_HEADER, REQUEST_DATE_HEADER, Signature};
use crate::{ClientBuilderError, ClientError, DispatchError, Page, Request, Response};

/// The production API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.dnsmadeeasy.com/V2.0/";
/// The sandbox API endpoint.
pub const SANDBOX_ENDPOINT: &str = "https://api.sandbox.dnsmadeeasy.com/V2.0/";
/// Ceiling for a whole request/response round trip.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Builder for a [Client] that handles default values.
pub struct ClientBuilder {
    endpoint: Option<String>,
    apikey: Option<String>,
    secretkey: Option<String>,
    timeout: Duration,
}

impl ClientBuilder {
    fn new() -> Self {
        Self {
            endpoint: None,
            apikey: None,
            secretkey: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Sets the API endpoint to the one given.
    ///
    /// The endpoint isn't parsed until a request is made.
    pub fn endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = Some(endpoint.to_string());
        self
    }

    /// In the case that `endpoint` is the Some variant, sets the API endpoint to it.
    pub fn endpoint_if_some(mut self, endpoint: Option<&str>) -> Self {
        if let Some(endpoint) = endpoint {
            self.endpoint = Some(endpoint.to_string());
        }
        self
    }

    /// Uses the sandbox API endpoint.
    pub fn sandbox(self) -> Self {
        self.endpoint(SANDBOX_ENDPOINT)
    }

    /// Sets the API key to the one given.
    pub fn apikey(mut self, apikey: &str) -> Self {
        self.apikey = Some(apikey.to_string());
        self
    }

    /// Sets the secret key used to sign requests.
    pub fn secretkey(mut self, secretkey: &str) -> Self {
        self.secretkey = Some(secretkey.to_string());
        self
    }

    /// Sets the timeout for a whole request, defaults to 10 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds a [Client] from the builder.
    ///
    /// In the case that no API endpoint is set, [DEFAULT_ENDPOINT] is used.
    ///
    /// # Errors
    /// - `MissingField` if a required field isn't added to the builder.
    /// - `Http` if the HTTP client can't be initialized.
    pub fn build(self) -> Result<Client, ClientBuilderError> {
        let endpoint = self
            .endpoint
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let apikey = self
            .apikey
            .ok_or_else(|| ClientBuilderError::MissingField("apikey".to_string()))?;
        let secretkey = self
            .secretkey
            .ok_or_else(|| ClientBuilderError::MissingField("secretkey".to_string()))?;
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()?;

        Ok(Client {
            endpoint,
            apikey,
            secretkey,
            client,
        })
    }
}

/// API client.
///
/// Holds only immutable configuration, so it can be cloned and shared
/// between threads freely.
#[derive(Clone)]
pub struct Client {
    endpoint: String,
    apikey: String,
    secretkey: String,
    client: reqwest::blocking::Client,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("endpoint", &self.endpoint)
            .field("apikey", &self.apikey)
            .field("secretkey", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Creates a new Client with the default timeout.
    pub fn new(endpoint: &str, apikey: &str, secretkey: &str) -> Result<Self, ClientBuilderError> {
        Self::builder()
            .endpoint(endpoint)
            .apikey(apikey)
            .secretkey(secretkey)
            .build()
    }

    /// Returns a builder for a Client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Creates a [Url] from the endpoint and the request's path and queries.
    fn build_url(&self, request: &Request) -> Result<Url, DispatchError> {
        let invalid = |reason: String| DispatchError::InvalidEndpoint {
            endpoint: self.endpoint.clone(),
            reason,
        };

        let mut url = Url::parse(&self.endpoint).map_err(|e| invalid(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| invalid("endpoint can't have a path".to_string()))?
            .pop_if_empty()
            .extend(request.path.split('/').filter(|p| !p.is_empty()));
        if !request.queries.is_empty() {
            url.query_pairs_mut().extend_pairs(&request.queries);
        }

        Ok(url)
    }

    /// Signs and sends the given request.
    ///
    /// Server errors and rejected authentication are returned as errors, all
    /// other responses are returned as is for the caller to interpret.
    ///
    /// # Errors
    /// - `InvalidEndpoint` if the configured endpoint isn't a usable URL.
    /// - `InvalidMethod` if the method isn't one of GET, POST, PUT or DELETE.
    /// - `Transport` if the request couldn't be sent or the response couldn't be read.
    /// - `Server` if the provider responded with a 5xx status.
    /// - `Auth` if the provider responded with 403 Forbidden.
    pub fn dispatch(&self, request: Request) -> Result<Response, DispatchError> {
        let url = self.build_url(&request)?;

        let allowed = [Method::GET, Method::POST, Method::PUT, Method::DELETE];
        if !allowed.contains(&request.method) {
            return Err(DispatchError::InvalidMethod(request.method.to_string()));
        }

        let signature = Signature::now(&self.secretkey)?;

        let method = request.method;
        debug!(%method, %url, "sending request");
        let resp = self
            .client
            .request(method.clone(), url.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(API_KEY_HEADER, self.apikey.as_str())
            .header(REQUEST_DATE_HEADER, signature.request_date.as_str())
            .header(HMAC_HEADER, signature.hmac.as_str())
            .body(request.body)
            .send()?;

        let status = resp.status();
        debug!(%method, %url, %status, "received response");
        if status.is_server_error() {
            warn!(%method, %url, %status, "server error");
            return Err(DispatchError::Server { status });
        }
        if status == StatusCode::FORBIDDEN {
            warn!(%method, %url, %status, "authentication rejected");
            return Err(DispatchError::Auth { status });
        }

        let body = resp.bytes()?.to_vec();
        Ok(Response { status, body })
    }

    /// Gets a domain by its id.
    pub fn get_domain(&self, id: u64) -> Result<Domain, ClientError> {
        let resp = self.dispatch(Request::get(format!("/dns/managed/{id}")))?;

        match resp.status {
            StatusCode::NOT_FOUND => Err(ClientError::DomainIdNotFound { id }),
            _ => resp.decode(),
        }
    }

    /// Gets a domain by its name.
    ///
    /// The name is sent as given.
    ///
    /// # Errors
    /// - `DomainNotFound` if the provider doesn't manage a domain with the name.
    pub fn get_domain_by_name(&self, name: &str) -> Result<Domain, ClientError> {
        let resp = self.dispatch(Request::get("/dns/managed/name").query("domainname", name))?;

        match resp.status {
            StatusCode::NOT_FOUND => Err(ClientError::DomainNotFound {
                name: name.to_string(),
            }),
            _ => resp.decode(),
        }
    }

    /// Adds a domain to the account.
    ///
    /// # Errors
    /// - `DomainExists` if the provider already manages the domain.
    pub fn add_domain(&self, name: &str) -> Result<Domain, ClientError> {
        let body = NewDomain {
            name: name.to_string(),
        };
        let resp = self.dispatch(Request::post("/dns/managed/").json(&body)?)?;

        match resp.status {
            StatusCode::BAD_REQUEST => Err(ClientError::DomainExists { name: body.name }),
            _ => resp.decode(),
        }
    }

    /// Deletes a domain by its id.
    ///
    /// # Errors
    /// - `DomainIdNotFound` if there is no domain with the id.
    /// - `DomainIdPending` if the domain has an action pending and can't be deleted yet.
    pub fn delete_domain(&self, id: u64) -> Result<(), ClientError> {
        let resp = self.dispatch(Request::delete(format!("/dns/managed/{id}")))?;

        match resp.status {
            StatusCode::NOT_FOUND => Err(ClientError::DomainIdNotFound { id }),
            StatusCode::BAD_REQUEST => Err(ClientError::DomainIdPending { id }),
            _ => resp.empty(),
        }
    }

    /// Lists the domains of the account.
    ///
    /// `index` is one of `name`, `updated`, `id` or `folder`, and `order` is
    /// one of `ASC` or `DESC`.
    ///
    /// # Errors
    /// - `InvalidArgument` if `index` or `order` has another value. No request is sent.
    pub fn list_domains(&self, index: &str, order: &str) -> Result<DomainsList, ClientError> {
        let index: SortIndex = index.parse().map_err(|_| {
            ClientError::InvalidArgument(format!(
                "index {index:?} is not in name, updated, id, folder"
            ))
        })?;
        let order: SortOrder = order.parse().map_err(|_| {
            ClientError::InvalidArgument(format!("order {order:?} is not ASC or DESC"))
        })?;

        self.list_domains_page(index, order, Page::default())
    }

    /// Lists one page of the domains of the account.
    pub fn list_domains_page(
        &self,
        index: SortIndex,
        order: SortOrder,
        page: Page,
    ) -> Result<DomainsList, ClientError> {
        let request = page.apply(
            Request::get("/dns/managed/")
                .query("sidx", index)
                .query("sord", order),
        );

        self.dispatch(request)?.decode()
    }

    /// Lists the records of a domain.
    pub fn list_records(&self, domain_id: u64) -> Result<RecordsList, ClientError> {
        self.list_records_filtered(domain_id, &RecordFilter::default(), Page::default())
    }

    /// Lists one page of the records of a domain.
    pub fn list_records_page(&self, domain_id: u64, page: Page) -> Result<RecordsList, ClientError> {
        self.list_records_filtered(domain_id, &RecordFilter::default(), page)
    }

    /// Lists the records of a domain that match the filter.
    ///
    /// # Errors
    /// - `DomainIdNotFound` if there is no domain with the id.
    pub fn list_records_filtered(
        &self,
        domain_id: u64,
        filter: &RecordFilter,
        page: Page,
    ) -> Result<RecordsList, ClientError> {
        let request = page.apply(
            Request::get(format!("/dns/managed/{domain_id}/records"))
                .query_if_some("recordName", filter.name.as_deref())
                .query_if_some("type", filter.type_),
        );
        let resp = self.dispatch(request)?;

        match resp.status {
            StatusCode::NOT_FOUND => Err(ClientError::DomainIdNotFound { id: domain_id }),
            _ => resp.decode(),
        }
    }

    /// Adds a record to a domain.
    ///
    /// # Errors
    /// - `RecordExists` if the provider reports that the record already exists.
    /// - `Format` if the provider rejects the record for another reason.
    pub fn add_record(&self, domain_id: u64, record: &NewRecord) -> Result<Record, ClientError> {
        let request =
            Request::post(format!("/dns/managed/{domain_id}/records")).json(record)?;
        let resp = self.dispatch(request)?;

        match resp.status {
            // The provider only reports duplicates in the message text.
            StatusCode::BAD_REQUEST => {
                let message = resp.error_message();
                if message.contains("already exists") {
                    Err(ClientError::RecordExists {
                        type_: record.type_,
                        name: record.name.clone(),
                        value: record.value.clone(),
                    })
                } else {
                    Err(ClientError::Format { message })
                }
            }
            _ => resp.decode(),
        }
    }

    /// Replaces a record of a domain. The record is identified by `record.id`.
    ///
    /// # Errors
    /// - `DomainIdOrRecordIdNotFound` if either id is unknown.
    /// - `Format` if the provider rejects the record.
    pub fn update_record(&self, domain_id: u64, record: &UpdateRecord) -> Result<(), ClientError> {
        let record_id = record.id;
        let request =
            Request::put(format!("/dns/managed/{domain_id}/records/{record_id}")).json(record)?;
        let resp = self.dispatch(request)?;

        match resp.status {
            StatusCode::NOT_FOUND => Err(ClientError::DomainIdOrRecordIdNotFound {
                domain_id,
                record_id,
            }),
            StatusCode::BAD_REQUEST => Err(ClientError::Format {
                message: resp.error_message(),
            }),
            _ => resp.empty(),
        }
    }

    /// Deletes a record of a domain.
    ///
    /// # Errors
    /// - `DomainIdOrRecordIdNotFound` if either id is unknown.
    pub fn delete_record(&self, domain_id: u64, record_id: u64) -> Result<(), ClientError> {
        let resp = self.dispatch(Request::delete(format!(
            "/dns/managed/{domain_id}/records/{record_id}"
        )))?;

        match resp.status {
            StatusCode::NOT_FOUND => Err(ClientError::DomainIdOrRecordIdNotFound {
                domain_id,
                record_id,
            }),
            _ => resp.empty(),
        }
    }
}
