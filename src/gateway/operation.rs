//! The fixed set of forwarding routes.

use std::fmt;

/// A client-facing route that forwards to exactly one backend endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    CreateSession,
    GenerateNullifier,
    SubmitVote,
    FetchResults,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::CreateSession,
        Operation::GenerateNullifier,
        Operation::SubmitVote,
        Operation::FetchResults,
    ];

    /// Path registered on the gateway's router.
    pub const fn route(self) -> &'static str {
        match self {
            Operation::CreateSession => "/api/session/create",
            Operation::GenerateNullifier => "/api/nullifier/generate",
            Operation::SubmitVote => "/api/vote/submit",
            Operation::FetchResults => "/api/results/{proposalId}",
        }
    }

    /// Path on the backend the request is forwarded to.
    pub const fn backend_path(self) -> &'static str {
        match self {
            Operation::CreateSession => "/api/session/create",
            Operation::GenerateNullifier => "/api/nullifier/generate",
            Operation::SubmitVote => "/api/vote/submit",
            Operation::FetchResults => "/api/results",
        }
    }

    /// Message returned to the client when the backend call cannot complete.
    pub const fn failure_message(self) -> &'static str {
        match self {
            Operation::CreateSession => "Failed to create session",
            Operation::GenerateNullifier => "Failed to generate nullifier",
            Operation::SubmitVote => "Failed to submit vote",
            Operation::FetchResults => "Failed to fetch results",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::CreateSession => "create session",
            Operation::GenerateNullifier => "generate nullifier",
            Operation::SubmitVote => "submit vote",
            Operation::FetchResults => "fetch results",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_failure_messages() {
        assert_eq!(
            Operation::CreateSession.failure_message(),
            "Failed to create session"
        );
        assert_eq!(
            Operation::GenerateNullifier.failure_message(),
            "Failed to generate nullifier"
        );
        assert_eq!(
            Operation::SubmitVote.failure_message(),
            "Failed to submit vote"
        );
        assert_eq!(
            Operation::FetchResults.failure_message(),
            "Failed to fetch results"
        );
    }

    #[test]
    fn test_post_routes_mirror_backend_paths() {
        for op in [
            Operation::CreateSession,
            Operation::GenerateNullifier,
            Operation::SubmitVote,
        ] {
            assert_eq!(op.route(), op.backend_path());
        }
    }

    #[test]
    fn test_results_route_maps_to_query_endpoint() {
        assert_eq!(Operation::FetchResults.route(), "/api/results/{proposalId}");
        assert_eq!(Operation::FetchResults.backend_path(), "/api/results");
    }

    #[test]
    fn test_routes_are_distinct() {
        let routes: HashSet<_> = Operation::ALL.iter().map(|op| op.route()).collect();
        assert_eq!(routes.len(), Operation::ALL.len());
    }

    #[test]
    fn test_display() {
        assert_eq!(Operation::SubmitVote.to_string(), "submit vote");
    }
}
