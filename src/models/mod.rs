pub mod api_response;
pub mod balance;
pub mod operation;
pub mod token;
pub mod vault;
