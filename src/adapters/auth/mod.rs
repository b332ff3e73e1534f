pub mod static_token;
