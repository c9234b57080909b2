pub mod compose;
pub mod config;
pub mod error;
pub mod insets;
pub mod live;
pub mod metrics;
pub mod scale;
pub mod screen;
pub mod stats;
pub mod tokens;

pub use compose::{Breakpoint, Edges, FlexDirection, OrientationLayout};
pub use config::{ConfigOverrides, MetricsConfig};
pub use error::ScaleError;
pub use live::LiveMetrics;
pub use metrics::Metrics;
pub use screen::Screen;
pub use stats::StatsSnapshot;
pub use tokens::{Radius, ResolvedTokens, Spacing, Typography};

pub use sunpo_device::{Host, Platform, SimHost, Subscription, WindowSize};
