pub mod assembly;
pub mod interval;
pub mod strand;

// re-export for cleaner imports
pub use self::assembly::ReferenceAssembly;
pub use self::interval::{Interval, Scored};
pub use self::strand::Strand;
