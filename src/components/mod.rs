pub mod delay_breakdown;
pub mod heat_map;
pub mod skeleton;
pub mod stacked_bars;
pub mod stat_card;

pub use delay_breakdown::DelayBreakdown;
pub use heat_map::DelayHeatMap;
pub use skeleton::SkeletonLoader;
pub use stacked_bars::{BucketLegend, ChartSection, Orientation, StackedBarChart};
pub use stat_card::StatCard;
