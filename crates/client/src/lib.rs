//! gymdesk_client - member repository client and CLI for the gymdesk API.

pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod repository;

pub use client::GymdeskClient;
pub use config::RepositoryConfig;
pub use error::{ClientError, Result};
pub use repository::MemberRepository;
