use crate::model::LedgerStore;
use anyhow::Result;

pub trait LedgerRepository {
    /// `None` when nothing has been saved yet.
    fn load(&self) -> Result<Option<LedgerStore>>;
    fn save(&self, store: &LedgerStore) -> Result<()>;
}
