mod common;
mod create;

pub use self::common::ContractSpec;
pub use self::create::{ForgeCreate, ForgeOutput};
