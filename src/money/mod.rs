// ============================================================================
// Money Module
// Exact fixed-point US dollar values and their shared arithmetic
// ============================================================================

mod errors;
mod parse;
mod policy;
mod precise;
mod usd;
mod value;

pub use errors::{MoneyError, MoneyResult};
pub use policy::PartialCentsPolicy;
pub use precise::PreciseMoney;
pub use usd::Money;
pub use value::MonetaryValue;
