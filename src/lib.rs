pub mod accessor;
pub mod cache;
pub mod constants;
pub mod ensemble;
pub mod heliotraj_errors;
pub mod processing;
pub mod record_set;
pub mod resolve;
pub mod selector;
pub mod table_reader;

pub use accessor::TrajAccessor;
pub use cache::BoundedCache;
pub use ensemble::RunEnsemble;
pub use heliotraj_errors::HeliotrajError;
pub use record_set::RecordSet;
pub use selector::{Selector, SelectorOverrides, SourceKind, VarFilter};
