//! API Module
//!
//! HTTP handlers and routing for the keyword suggestion REST API.
//!
//! # Endpoints
//! - `POST /api/analyze` - Related keywords with relevance scores
//! - `POST /api/analyze/csv` - Related keywords as a CSV download
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod export;
pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
