//! CLI module for the movie catalog API
//!
//! - `serve`: run the HTTP server
//! - `hash-password`: print a password hash for seeding a store

pub mod hash_password;
pub mod serve;

use clap::{Parser, Subcommand};

/// Movie Catalog API - movies and users behind bearer token authentication
#[derive(Parser)]
#[command(name = "movie-catalog-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve(serve::ServeArgs),

    /// Hash a password with the configured scheme
    HashPassword(hash_password::HashPasswordArgs),
}
