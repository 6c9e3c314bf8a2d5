// Module declarations
pub(crate) mod ledger_model;
pub(crate) mod ledger_service;

// Re-export the public interface
pub use ledger_model::FundReport;
pub use ledger_service::LedgerService;
