pub mod contract;
pub mod conversion;
pub mod guard;
pub mod reserve;
pub mod shares;
