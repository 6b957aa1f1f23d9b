//! Glue between the async clients and the view controller.
//!
//! Fetches run concurrently and report back only through the controller's
//! channel, one event per fetch, as soon as that fetch finishes. A failed
//! fetch becomes a `FetchFailed` event and never holds up the other one.
//! Nothing is retried.

use crate::client::describe::{describe_or_fallback, DescriptionService};
use crate::client::source::DataSource;
use crate::data::university::PointOfInterest;
use crate::state::events::{FetchSource, ViewEvent};
use crossbeam_channel::Sender;

fn post(sender: &Sender<ViewEvent>, event: ViewEvent) {
    if sender.send(event).is_err() {
        log::debug!("view controller gone, dropping event");
    }
}

/// Fetches both record collections concurrently.
pub async fn load_stores(source: &dyn DataSource, sender: &Sender<ViewEvent>) {
    let universities = async {
        let event = match source.fetch_universities().await {
            Ok(records) => ViewEvent::UniversitiesLoaded(records),
            Err(e) => ViewEvent::FetchFailed {
                source: FetchSource::Universities,
                message: e.to_string(),
            },
        };
        post(sender, event);
    };

    let employees = async {
        let event = match source.fetch_employees().await {
            Ok(records) => ViewEvent::EmployeesLoaded(records),
            Err(e) => ViewEvent::FetchFailed {
                source: FetchSource::Employees,
                message: e.to_string(),
            },
        };
        post(sender, event);
    };

    futures::join!(universities, employees);
}

/// Resolves the drawer description for `university` and posts it. Always
/// posts something: the fallback stands in for any failure.
pub async fn request_description(
    service: &dyn DescriptionService,
    university: &PointOfInterest,
    fallback: &str,
    sender: &Sender<ViewEvent>,
) {
    let text = describe_or_fallback(service, &university.name, &university.country, fallback).await;
    post(
        sender,
        ViewEvent::DescriptionReady {
            university_id: university.id.clone(),
            text,
        },
    );
}

#[cfg(feature = "tokio-runtime")]
pub use spawned::{spawn_description, spawn_load};

#[cfg(feature = "tokio-runtime")]
mod spawned {
    use super::*;
    use std::sync::Arc;
    use tokio::task::JoinHandle;

    /// [`load_stores`] on the ambient tokio runtime.
    pub fn spawn_load(source: Arc<dyn DataSource>, sender: Sender<ViewEvent>) -> JoinHandle<()> {
        tokio::spawn(async move { load_stores(source.as_ref(), &sender).await })
    }

    /// [`request_description`] on the ambient tokio runtime.
    pub fn spawn_description(
        service: Arc<dyn DescriptionService>,
        university: PointOfInterest,
        fallback: String,
        sender: Sender<ViewEvent>,
    ) -> JoinHandle<()> {
        tokio::spawn(async move {
            request_description(service.as_ref(), &university, &fallback, &sender).await
        })
    }
}
