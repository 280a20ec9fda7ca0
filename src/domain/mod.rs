pub mod changes;
pub mod diff;
pub mod modification;
pub mod schema;
pub mod snapshot;
pub mod value;

pub use changes::ChangeRecord;
pub use diff::{diff, SchemaMismatch};
pub use modification::Modification;
pub use snapshot::Snapshot;
