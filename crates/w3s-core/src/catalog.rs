//! Static technology catalog.
//!
//! Maps known Web3 technology names to a category label and to a short
//! list of suggested alternatives. Lookups are exact-match over the
//! normalized name; both functions are total and never fail.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Catch-all category for unrecognized technologies.
pub const FALLBACK_CATEGORY: &str = "Others";

const BLOCKCHAIN: &str = "Blockchain";
const SMART_CONTRACT: &str = "Smart Contracts";
const WALLET: &str = "Carteiras";
const NFT: &str = "NFTs";
const DEFI: &str = "DeFi";
const EXCHANGE: &str = "Exchanges";
const LAYER2: &str = "Layer 2";
const INFRASTRUCTURE: &str = "Infraestrutura";

static CATEGORIES: &[(&str, &str)] = &[
    // Blockchains
    ("ethereum", BLOCKCHAIN),
    ("solana", BLOCKCHAIN),
    ("bitcoin", BLOCKCHAIN),
    ("cardano", BLOCKCHAIN),
    ("avalanche", BLOCKCHAIN),
    ("polkadot", BLOCKCHAIN),
    ("near", BLOCKCHAIN),
    ("cosmos", BLOCKCHAIN),
    ("tezos", BLOCKCHAIN),
    ("algorand", BLOCKCHAIN),
    ("stellar", BLOCKCHAIN),
    ("flow", BLOCKCHAIN),
    ("hedera", BLOCKCHAIN),
    ("elrond", BLOCKCHAIN),
    ("celo", BLOCKCHAIN),
    ("harmony", BLOCKCHAIN),
    ("fantom", BLOCKCHAIN),
    // Smart contract languages
    ("solidity", SMART_CONTRACT),
    ("rust", SMART_CONTRACT),
    ("vyper", SMART_CONTRACT),
    ("move", SMART_CONTRACT),
    ("ink", SMART_CONTRACT),
    ("cairo", SMART_CONTRACT),
    ("cadence", SMART_CONTRACT),
    ("yul", SMART_CONTRACT),
    // Wallets
    ("metamask", WALLET),
    ("phantom", WALLET),
    ("trustwallet", WALLET),
    ("coinbase wallet", WALLET),
    ("ledger", WALLET),
    ("trezor", WALLET),
    ("brave wallet", WALLET),
    ("rainbow", WALLET),
    ("exodus", WALLET),
    // NFT marketplaces
    ("opensea", NFT),
    ("rarible", NFT),
    ("foundation", NFT),
    ("superrare", NFT),
    ("nifty gateway", NFT),
    ("zora", NFT),
    ("blur", NFT),
    ("magic eden", NFT),
    // DeFi
    ("uniswap", DEFI),
    ("aave", DEFI),
    ("compound", DEFI),
    ("curve", DEFI),
    ("maker", DEFI),
    ("pancakeswap", DEFI),
    ("sushiswap", DEFI),
    ("yearn", DEFI),
    ("balancer", DEFI),
    // Exchanges
    ("binance", EXCHANGE),
    ("coinbase", EXCHANGE),
    ("kraken", EXCHANGE),
    ("ftx", EXCHANGE),
    ("gemini", EXCHANGE),
    ("kucoin", EXCHANGE),
    ("huobi", EXCHANGE),
    ("okx", EXCHANGE),
    // Layer 2
    ("arbitrum", LAYER2),
    ("optimism", LAYER2),
    ("polygon", LAYER2),
    ("zksync", LAYER2),
    ("starknet", LAYER2),
    ("loopring", LAYER2),
    ("immutablex", LAYER2),
    ("metis", LAYER2),
    // Infrastructure
    ("infura", INFRASTRUCTURE),
    ("alchemy", INFRASTRUCTURE),
    ("moralis", INFRASTRUCTURE),
    ("quicknode", INFRASTRUCTURE),
    ("chainlink", INFRASTRUCTURE),
    ("graph", INFRASTRUCTURE),
    ("ipfs", INFRASTRUCTURE),
    ("filecoin", INFRASTRUCTURE),
    ("arweave", INFRASTRUCTURE),
    ("ceramic", INFRASTRUCTURE),
    ("web3auth", INFRASTRUCTURE),
    ("worldcoin", INFRASTRUCTURE),
    ("thirdweb", INFRASTRUCTURE),
    ("lens protocol", INFRASTRUCTURE),
    ("biconomy", INFRASTRUCTURE),
];

static ALTERNATIVES: &[(&str, &[&str])] = &[
    // Blockchains
    ("ethereum", &["Solana", "Avalanche", "Polygon", "Arbitrum", "Optimism"]),
    ("solana", &["Ethereum", "Avalanche", "Near", "Aptos"]),
    ("bitcoin", &["Ethereum", "Litecoin", "Bitcoin Cash"]),
    ("polygon", &["Ethereum", "Arbitrum", "Optimism", "Avalanche"]),
    ("avalanche", &["Ethereum", "Solana", "Polygon", "Fantom"]),
    ("fantom", &["Ethereum", "Avalanche", "Polygon"]),
    ("near", &["Ethereum", "Solana", "Avalanche"]),
    ("cosmos", &["Polkadot", "Avalanche", "Ethereum"]),
    // Wallets
    ("metamask", &["Coinbase Wallet", "Trust Wallet", "Rainbow", "Brave Wallet"]),
    ("phantom", &["Solflare", "Backpack", "Glow"]),
    ("trustwallet", &["MetaMask", "Coinbase Wallet", "Exodus"]),
    ("coinbase wallet", &["MetaMask", "Trust Wallet", "Rainbow"]),
    // Smart contract languages
    ("solidity", &["Vyper", "Rust", "Move"]),
    ("rust", &["Solidity", "Move", "Ink"]),
    ("cairo", &["Solidity", "Vyper", "Rust"]),
    // DeFi
    ("uniswap", &["SushiSwap", "Curve", "Balancer", "PancakeSwap"]),
    ("aave", &["Compound", "Maker", "Benqi"]),
    ("sushiswap", &["Uniswap", "Curve", "Balancer"]),
    ("curve", &["Uniswap", "Balancer", "SushiSwap"]),
    // NFT marketplaces
    ("opensea", &["Blur", "Rarible", "Foundation", "LooksRare"]),
    ("rarible", &["OpenSea", "Foundation", "SuperRare"]),
    ("blur", &["OpenSea", "LooksRare", "X2Y2"]),
    ("magic eden", &["OpenSea", "Tensor", "Solanart"]),
    // Layer 2
    ("arbitrum", &["Optimism", "Polygon", "zkSync", "StarkNet"]),
    ("optimism", &["Arbitrum", "Polygon", "zkSync", "Base"]),
    ("zksync", &["StarkNet", "Polygon zkEVM", "Arbitrum", "Optimism"]),
    ("starknet", &["zkSync", "Arbitrum", "Optimism"]),
    // Infrastructure
    ("infura", &["Alchemy", "QuickNode", "Chainstack", "Moralis"]),
    ("alchemy", &["Infura", "QuickNode", "Moralis", "Ankr"]),
    ("moralis", &["Alchemy", "Infura", "QuickNode", "thirdweb"]),
    ("chainlink", &["API3", "Band Protocol", "UMA", "Pyth"]),
    ("graph", &["SubQuery", "DIA", "Covalent"]),
    ("ipfs", &["Arweave", "Filecoin", "Sia", "Storj"]),
    ("thirdweb", &["Alchemy", "Moralis", "Truffle", "Hardhat"]),
];

/// Fallback suggestions for technologies without a dedicated entry.
static DEFAULT_ALTERNATIVES: &[&str] = &["Ethereum", "Solana", "Polygon", "MetaMask", "Alchemy"];

fn category_map() -> &'static HashMap<&'static str, &'static str> {
    static MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    MAP.get_or_init(|| CATEGORIES.iter().copied().collect())
}

fn alternatives_map() -> &'static HashMap<&'static str, &'static [&'static str]> {
    static MAP: OnceLock<HashMap<&'static str, &'static [&'static str]>> = OnceLock::new();
    MAP.get_or_init(|| ALTERNATIVES.iter().copied().collect())
}

/// Normalize a technology name for catalog lookup (trim + lowercase).
pub fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Best-effort category label for a technology name.
///
/// Total over all inputs: unrecognized names map to [`FALLBACK_CATEGORY`].
pub fn categorize(name: &str) -> &'static str {
    category_map()
        .get(normalize(name).as_str())
        .copied()
        .unwrap_or(FALLBACK_CATEGORY)
}

/// Suggested alternatives for a technology name, in preference order.
///
/// Total over all inputs: unrecognized names get the fixed default list.
pub fn alternatives_for(name: &str) -> Vec<String> {
    let entries = alternatives_map()
        .get(normalize(name).as_str())
        .copied()
        .unwrap_or(DEFAULT_ALTERNATIVES);
    entries.iter().map(|s| s.to_string()).collect()
}
