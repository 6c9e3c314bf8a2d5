// Module declarations
pub(crate) mod savers_errors;
pub(crate) mod savers_model;
pub(crate) mod savers_service;
pub(crate) mod savers_traits;

// Re-export the public interface
pub use savers_model::{NewSaver, Saver, SaverTotals};
pub use savers_service::SaverService;
pub use savers_traits::SaverRepositoryTrait;

pub(crate) use savers_service::load_scoped_saver;

// Re-export error types for convenience
pub use savers_errors::SaverError;
