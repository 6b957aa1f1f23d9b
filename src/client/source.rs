use crate::client::http::{client_with_timeout, get_json, HTTP_CLIENT};
use crate::core::config::ApiConfig;
use crate::data::employee::Employee;
use crate::data::university::{PointOfInterest, RawUniversity};
use crate::Result;
use async_trait::async_trait;
use reqwest::Client;

/// Anything that can produce the two record collections.
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn fetch_universities(&self) -> Result<Vec<PointOfInterest>>;

    async fn fetch_employees(&self) -> Result<Vec<Employee>>;
}

/// The REST backend: `GET {base}/universities` and `GET {base}/employees`,
/// both returning JSON arrays.
#[derive(Debug, Clone)]
pub struct RestDataSource {
    client: Client,
    universities_url: String,
    employees_url: String,
}

impl RestDataSource {
    /// Uses the shared client, which has no request timeout.
    pub fn new(universities_url: impl Into<String>, employees_url: impl Into<String>) -> Self {
        Self {
            client: HTTP_CLIENT.clone(),
            universities_url: universities_url.into(),
            employees_url: employees_url.into(),
        }
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        Ok(Self {
            client: client_with_timeout(config.timeout())?,
            universities_url: config.universities_url(),
            employees_url: config.employees_url(),
        })
    }

    pub fn universities_url(&self) -> &str {
        &self.universities_url
    }

    pub fn employees_url(&self) -> &str {
        &self.employees_url
    }
}

#[async_trait]
impl DataSource for RestDataSource {
    async fn fetch_universities(&self) -> Result<Vec<PointOfInterest>> {
        let raw: Vec<RawUniversity> = get_json(&self.client, &self.universities_url).await?;
        Ok(raw.into_iter().map(PointOfInterest::from).collect())
    }

    async fn fetch_employees(&self) -> Result<Vec<Employee>> {
        get_json(&self.client, &self.employees_url).await
    }
}

/// Fixed in-memory records, for demos and offline runs.
#[derive(Debug, Clone, Default)]
pub struct StaticDataSource {
    pub universities: Vec<PointOfInterest>,
    pub employees: Vec<Employee>,
}

impl StaticDataSource {
    pub fn new(universities: Vec<PointOfInterest>, employees: Vec<Employee>) -> Self {
        Self {
            universities,
            employees,
        }
    }

    /// Builds the source from the same JSON payloads the backend serves.
    pub fn from_json(universities_json: &str, employees_json: &str) -> Result<Self> {
        Ok(Self::new(
            crate::data::university::parse_universities(universities_json)?,
            crate::data::employee::parse_employees(employees_json)?,
        ))
    }
}

#[async_trait]
impl DataSource for StaticDataSource {
    async fn fetch_universities(&self) -> Result<Vec<PointOfInterest>> {
        Ok(self.universities.clone())
    }

    async fn fetch_employees(&self) -> Result<Vec<Employee>> {
        Ok(self.employees.clone())
    }
}
