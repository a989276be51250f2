pub mod enrichment;
pub mod providers;
pub mod recommender;

pub use recommender::Recommender;
