use std::fmt;

/// The consumer a fetch is made for. Map consumption only accepts records with a valid epicenter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FeedKind {
    List,
    Map,
}

impl fmt::Display for FeedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedKind::List => write!(f, "list"),
            FeedKind::Map => write!(f, "map"),
        }
    }
}
