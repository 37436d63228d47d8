//! # adcollect: Ad-observation collection toolkit
//!
//! adcollect is the client-side plumbing for an ad-collection pipeline:
//! observed advertisement records are shaped for transmission, merged into a
//! locally held deduplicated set, synced with a remote collection endpoint,
//! and summarized into the unrated-count badge the host UI renders.
//!
//! ## Core Concepts
//!
//! - **Records**: keyed, JSON-safe observations with a mandatory unique id
//! - **Merge**: pure, order-producing union of record batches, incoming
//!   fields winning on overlapping ids
//! - **Store**: the in-memory deduplicated set batches are merged into
//! - **Client**: async submit/fetch against the collector endpoint
//! - **Badge**: unrated-record counter text for the host platform
//!
//! ## Quick Start
//!
//! ### Merging batches
//!
//! ```
//! use adcollect::merge::merge_records;
//! use adcollect::record::AdRecord;
//! use serde_json::json;
//!
//! let held = vec![AdRecord::new("ad_2").with_field(AdRecord::RATING, json!(4))];
//! let incoming = vec![
//!     AdRecord::new("ad_1"),
//!     AdRecord::new("ad_2").with_field(AdRecord::HTML, json!("<div/>")),
//! ];
//!
//! let merged = merge_records(&held, &incoming);
//! assert_eq!(merged.len(), 2);
//! // Incoming fields override; untouched fields persist.
//! assert_eq!(merged[1].field(AdRecord::HTML), Some(&json!("<div/>")));
//! assert_eq!(merged[1].field(AdRecord::RATING), Some(&json!(4)));
//! ```
//!
//! ### Holding a local set and deriving the badge
//!
//! ```
//! use adcollect::record::AdRecord;
//! use adcollect::store::AdStore;
//!
//! let mut store = AdStore::new();
//! store.absorb(&[AdRecord::new("ad_1"), AdRecord::new("ad_2")]);
//! assert_eq!(store.badge_text(), "2");
//! ```
//!
//! ### Talking to the collector
//!
//! ```no_run
//! use adcollect::client::CollectorClient;
//! use adcollect::config::CollectorConfig;
//! use adcollect::store::AdStore;
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let config = CollectorConfig::from_env()?;
//! let client = CollectorClient::new(&config)?;
//!
//! let mut store = AdStore::new();
//! let unrated = client.refresh(&mut store).await?;
//! println!("badge: {}", adcollect::badge::badge_text(unrated));
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Guide
//!
//! - [`record`] - Record model and the transmission projection
//! - [`merge`] - Deduplicating batch merge (the core operation)
//! - [`store`] - Locally held deduplicated set
//! - [`client`] - Async collector endpoint client
//! - [`config`] - Endpoint resolution from the environment
//! - [`badge`] - Unrated counting and badge text
//! - [`telemetry`] - Tracing subscriber setup

pub mod badge;
pub mod client;
pub mod config;
pub mod merge;
pub mod record;
pub mod store;
pub mod telemetry;
