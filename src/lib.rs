pub mod aggregate;   // Merges normalized records into the unified schema
pub mod config;
pub mod emit;        // Serialization and timestamped file output
pub mod normalize;   // Provider-shape to stable-record mapping
pub mod pipeline;
pub mod provider;    // Moralis Solana gateway client
pub mod types;
pub mod utils;
