//! # Product Catalog
//!
//! A client-side store for a remote product catalog: products and comments mirrored from a
//! REST API, a validated add/edit form, sorting, and the page controller that ties them
//! together.
//!
//! ## Modules
//!
//! - [`model`] - Data structures ([`Product`](model::Product), [`Comment`](model::Comment))
//! - [`api`] - The [`CatalogApi`](api::CatalogApi) seam with HTTP and in-memory implementations
//! - [`product_store`] / [`comment_store`] - Actions and reducers of the two stores
//! - [`clients`] - Async operations that record each request on its store
//! - [`validation`], [`sort`], [`view`] - Pure form rules, ordering and view models
//! - [`page`] - The [`ListPage`](page::ListPage) controller and its [`Modal`](page::Modal) state
//! - [`config`] / [`lifecycle`] - Environment configuration, wiring and tracing setup

pub mod api;
pub mod clients;
pub mod comment_store;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod page;
pub mod product_store;
pub mod sort;
pub mod validation;
pub mod view;
