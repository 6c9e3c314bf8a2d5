use crate::errors::Result;
use crate::loans::Loan;
use crate::periods::SavingsPeriod;
use crate::savers::savers_model::Saver;

/// Trait for the saver persistence collaborator.
///
/// Periods and loans hang off the saver aggregate, so their storage
/// operations live here too. Each method is one atomic unit against
/// persisted state; callers never observe a half-applied mutation.
pub trait SaverRepositoryTrait: Send + Sync {
    fn list_savers(&self, user_id: &str) -> Result<Vec<Saver>>;
    fn get_saver(&self, saver_id: &str) -> Result<Saver>;
    fn insert_saver(&self, saver: &Saver) -> Result<Saver>;
    /// Deletes the saver and cascades to its periods and loans.
    fn delete_saver(&self, saver_id: &str) -> Result<usize>;

    fn update_period(&self, period: &SavingsPeriod) -> Result<SavingsPeriod>;
    fn append_period(&self, period: &SavingsPeriod) -> Result<SavingsPeriod>;

    fn get_loan(&self, loan_id: &str) -> Result<Loan>;
    fn insert_loan(&self, loan: &Loan) -> Result<Loan>;
    fn update_loan(&self, loan: &Loan) -> Result<Loan>;
}
