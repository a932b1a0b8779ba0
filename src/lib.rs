pub mod dataset;
pub mod network;
pub mod router;
pub mod shared;

pub mod prelude {
    pub use crate::dataset::{self, Segment};
    pub use crate::network::{Line, Network, NetworkStats, Station};
    pub use crate::router::{Objective, RouteResult, Router, find_alternative, find_path};
    pub use crate::shared::{Distance, Duration};
}
