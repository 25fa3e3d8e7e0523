mod margin;
mod pa;
mod rule;
mod stats;
mod strategy;

pub use margin::Margin;
pub use pa::PassiveAggressive;
pub use rule::Update;
pub use stats::UpdateStats;
pub use strategy::MarginStrategy;
