/// Solana token mint addresses
pub mod mints {
    /// Wrapped SOL (native SOL wrapped as SPL token)
    pub const SOL: &str = "So11111111111111111111111111111111111111112";
    /// USDC (Circle USD Coin)
    pub const USDC: &str = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";
}

/// Program IDs
pub mod programs {
    use solana_sdk::pubkey::Pubkey;

    /// Base SPL Token program
    pub const TOKEN: &str = "TokenkegQfeZyiNwAJbNbGqPFXCWuBvf9Ss623VQ5DA";
    /// Token-2022 (extended token program); mint accounts carry TLV extensions
    pub const TOKEN_2022: &str = "TokenzQdBNbLqP5VEhdkAS6EPFLC1PHnBqCXEpPxuEb";
    /// [`TOKEN_2022`] as a key, for owner comparisons
    pub const TOKEN_2022_ID: Pubkey =
        solana_sdk::pubkey!("TokenzQdBNbLqP5VEhdkAS6EPFLC1PHnBqCXEpPxuEb");
}

/// Default public endpoints
pub mod endpoints {
    /// Solana mainnet-beta JSON-RPC
    pub const MAINNET_RPC: &str = "https://api.mainnet-beta.solana.com";
    /// Jupiter price API
    pub const JUPITER_PRICE: &str = "https://lite-api.jup.ag/price/v2";
}
