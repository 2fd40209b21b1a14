pub mod aggregate;
pub mod analyzer;
pub mod cross_reference;
pub mod newsapi;
pub mod repository;
pub mod signals;
pub mod sources;
#[cfg(any(test, feature = "test-support"))]
pub mod testing;
pub mod traits;

pub use analyzer::Analyzer;
pub use cross_reference::CrossReferenceEvaluator;
pub use newsapi::NewsApiSearchService;
pub use repository::InMemoryRepository;
pub use traits::{AnalysisRepository, NewsSearchService};
