pub mod client;
pub mod covalent;
pub mod sheet;

pub use client::{TransactionSource, WalletSource};
pub use covalent::CovalentClient;
pub use sheet::{parse_wallet_column, SheetWalletSource};
