/// Errors returned by the strict graph queries such as
/// [`Graph::try_path`](crate::Graph::try_path).
///
/// The default queries never produce these; they report an absent node or a
/// missing path as an empty result instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError<N> {
    /// The node is not a member of the graph.
    #[error("node not found in graph: {0:?}")]
    NodeNotFound(N),
    /// Both nodes are members, but no directed walk connects them.
    #[error("no path from {from:?} to {to:?}")]
    NoPath { from: N, to: N },
}

/// Failure of a network exchange, for callers that populate a graph from a
/// remote source (see [`DirectedGraph::try_extend`](crate::DirectedGraph::try_extend)).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// Nothing was received.
    #[error("Network error: no response")]
    NoResponse,
    /// The given message could not be sent.
    #[error("Network error while sending message: {0}")]
    Send(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_error_messages() {
        let err = GraphError::NodeNotFound("x");
        assert_eq!(err.to_string(), "node not found in graph: \"x\"");
        let err = GraphError::NoPath { from: 1, to: 2 };
        assert_eq!(err.to_string(), "no path from 1 to 2");
    }

    #[test]
    fn test_network_error_messages() {
        assert_eq!(
            NetworkError::NoResponse.to_string(),
            "Network error: no response"
        );
        assert_eq!(
            NetworkError::Send("ping".to_string()).to_string(),
            "Network error while sending message: ping"
        );
    }

    #[test]
    fn test_errors_are_std_errors() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&GraphError::NodeNotFound(3u32));
        assert_error(&NetworkError::NoResponse);
    }
}
