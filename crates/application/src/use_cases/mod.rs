pub mod bulk_ptr_lookup;

pub use bulk_ptr_lookup::{BulkPtrLookupUseCase, LookupSummary};
