use thiserror::Error;

/// Convenient result alias for the cityroute library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when an edge or neighbour query names a street that is not in
    /// the graph.
    #[error("unknown street: {name}{}", format_suggestions(.suggestions))]
    UnknownVertex {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when a reachability query is made with no selected places.
    #[error("reachability query requires at least one selected place")]
    EmptySeedSet,

    /// Raised when no ordering of the requested waypoints yields a feasible
    /// route.
    #[error("no waypoint ordering connects {start} to {end}")]
    NoValidOrdering { start: String, end: String },

    /// Raised when no route could be found between two streets.
    #[error("no route found between {start} and {end}")]
    RouteNotFound { start: String, end: String },

    /// Raised when a computed route contains no locations.
    #[error("route contained no locations")]
    EmptyRoute,

    /// Wrapper for CSV parsing errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    match suggestions {
        [] => String::new(),
        [only] => format!(". Did you mean '{only}'?"),
        many => format!(
            ". Did you mean one of: {}?",
            many.iter()
                .map(|name| format!("'{name}'"))
                .collect::<Vec<_>>()
                .join(", ")
        ),
    }
}
