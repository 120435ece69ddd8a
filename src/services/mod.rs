pub mod balance_synchronizer;
pub mod balance_table;
pub mod fungible_token;
pub mod info_server;
pub mod session;
