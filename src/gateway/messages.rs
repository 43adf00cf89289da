//! Request and response shapes exchanged with clients and the backend.
//!
//! Field values are carried as raw JSON text and never inspected, so they are
//! written to the backend exactly as the client sent them. A field missing
//! from the inbound body stays missing in the forwarded body.

use crate::format::Format;
use serde::Serialize;
use sonic_rs::LazyValue;
use std::collections::HashMap;

/// Status reported by the local health check.
pub const HEALTHY_STATUS: &str = "Frontend healthy";

/// Top-level members of a client body.
///
/// A repeated key keeps its last occurrence. Bodies that are empty, not JSON
/// or not an object have no members.
#[derive(Debug, Default)]
pub struct BodyFields<'a> {
    members: HashMap<String, LazyValue<'a>>,
}

impl<'a> BodyFields<'a> {
    pub fn parse(format: Format, body: &'a [u8]) -> Self {
        match format.members(body) {
            Ok(members) => Self {
                members: members.into_iter().collect(),
            },
            Err(e) => {
                tracing::debug!(error = %e, "undecodable request body, forwarding without fields");
                Self::default()
            }
        }
    }

    pub fn take(&mut self, key: &str) -> Option<LazyValue<'a>> {
        self.members.remove(key)
    }
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionCreateRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proposal_id: Option<LazyValue<'a>>,
}

impl<'a> From<BodyFields<'a>> for SessionCreateRequest<'a> {
    fn from(mut fields: BodyFields<'a>) -> Self {
        Self {
            proposal_id: fields.take("proposalId"),
        }
    }
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NullifierRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voter_id: Option<LazyValue<'a>>,
}

impl<'a> From<BodyFields<'a>> for NullifierRequest<'a> {
    fn from(mut fields: BodyFields<'a>) -> Self {
        Self {
            voter_id: fields.take("voterId"),
        }
    }
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteSubmitRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proposal_id: Option<LazyValue<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vote: Option<LazyValue<'a>>,
}

impl<'a> From<BodyFields<'a>> for VoteSubmitRequest<'a> {
    fn from(mut fields: BodyFields<'a>) -> Self {
        Self {
            proposal_id: fields.take("proposalId"),
            vote: fields.take("vote"),
        }
    }
}

/// Query parameters for the backend results endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsQuery {
    pub proposal_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: HEALTHY_STATUS,
        }
    }
}
