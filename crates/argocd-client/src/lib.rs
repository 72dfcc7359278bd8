//! Asynchronous client for the Argo CD REST API.
//!
//! Every resource group under `/api/v1` is exposed as a handle obtained from
//! [`ArgoClient`]; all handles share one request executor carrying the base
//! URL and bearer token supplied at construction. Responses are returned as
//! raw [`serde_json::Value`]s, passed through unchanged beyond JSON decoding.
//!
//! ```no_run
//! use argocd_client::{ArgoClient, ApplicationListParams};
//!
//! # async fn run() -> argocd_client::Result<()> {
//! let client = ArgoClient::new("https://argocd.example.com", "my-token")?;
//! let apps = client
//!     .applications()
//!     .list(&ApplicationListParams::default())
//!     .await?;
//! println!("{apps}");
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]

pub mod accounts;
pub mod applications;
pub mod certificates;
pub mod client;
pub mod clusters;
pub mod gpgkeys;
pub mod notifications;
pub mod projects;
pub mod repositories;
pub mod sessions;
pub mod settings;
pub mod users;
pub mod version;

pub use accounts::{Accounts, UpdatePasswordRequest};
pub use applications::{
    ApplicationDeleteParams, ApplicationEventParams, ApplicationGetParams, ApplicationListParams,
    ApplicationSyncParams, Applications, ResourceRef,
};
pub use certificates::{CertificateListParams, Certificates};
pub use client::{ArgoClient, ArgoClientBuilder};
pub use clusters::{ClusterListParams, Clusters};
pub use gpgkeys::GpgKeys;
pub use notifications::Notifications;
pub use projects::Projects;
pub use repositories::{Repositories, RepositoryListParams};
pub use sessions::{SessionCreateRequest, Sessions};
pub use settings::Settings;
pub use users::Users;
pub use version::Version;

pub use argocd_core::{ApiConfig, Error};

/// Convenient result alias that reuses the shared error type.
pub type Result<T> = argocd_core::Result<T>;
