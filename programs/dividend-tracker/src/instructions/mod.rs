pub mod distribute;
pub mod exclude;
pub mod initialize;
pub mod process;
pub mod process_holder;
pub mod set_balance;
pub mod update_config;
pub mod views;
pub mod withdraw;

pub use distribute::*;
pub use exclude::*;
pub use initialize::*;
pub use process::*;
pub use process_holder::*;
pub use set_balance::*;
pub use update_config::*;
pub use views::*;
pub use withdraw::*;
