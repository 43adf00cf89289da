//! # Vote Gateway
//!
//! An HTTP gateway for an anonymous voting workflow. Every API request is
//! forwarded to a single upstream voting backend and the backend's reply is
//! relayed to the client.
//!
//! ## Quick Start
//!
//! ```no_run
//! #[tokio::main]
//! async fn main() -> eyre::Result<()> {
//!     vote_gateway::gateway::run().await
//! }
//! ```
//!
//! ## Configuration
//!
//! The gateway is configured via environment variables:
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `LISTEN_ADDR` | `0.0.0.0:3000` | HTTP server listen address |
//! | `BACKEND_URL` | `http://localhost:8080` | Voting backend base address |
//! | `STATIC_DIR` | `public` | Directory served at `/` |
//! | `BACKEND_CONNECT_TIMEOUT_MS` | unset | Outbound connect timeout |
//! | `BACKEND_REQUEST_TIMEOUT_MS` | unset | Outbound request timeout |
//!
//! ## Endpoints
//!
//! - `POST /api/session/create` - Create a voting session
//! - `POST /api/nullifier/generate` - Generate a nullifier for a voter
//! - `POST /api/vote/submit` - Submit a vote
//! - `GET /api/results/{proposalId}` - Fetch results for a proposal
//! - `GET /health` - Local health check
//! - `GET /` - Static entry page

pub mod client;
pub mod config;
pub mod error;
pub mod format;
pub mod gateway;


pub use config::Config;
pub use error::GatewayError;
pub use format::Format;
