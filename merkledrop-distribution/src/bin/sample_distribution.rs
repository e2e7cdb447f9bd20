use indexmap::IndexMap;
use merkledrop_distribution::Distribution;
use merkledrop_tree::parse_address;

const OUTPUT_PATH: &str = "merkle_distribution.json";

fn main() {
    // Balances for three development accounts, in wei.
    let entries = [
        ("0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266", 1_000_000_000_000_000_000u128),
        ("0x70997970c51812dc3a010c7d01b50e0d17dc79c8", 2_000_000_000_000_000_000u128),
        ("0x3c44cdddb6a900fa2b585dd299e03d12fa4293bc", 3_000_000_000_000_000_000u128),
    ];

    let mut balances = IndexMap::new();
    for (address, amount) in entries {
        let recipient = parse_address(address).expect("valid recipient address");
        balances.insert(recipient, amount);
    }

    // Build the distribution document: commitment tree, claims, proofs.
    let distribution = Distribution::build(&balances).expect("successful distribution build");

    // Sanity-check every claim against the root before publishing.
    distribution.verify().expect("claims verify against the root");

    let json = distribution
        .to_json_pretty()
        .expect("successful serialization");
    std::fs::write(OUTPUT_PATH, &json).expect("successful write");

    println!("merkle root: {}", distribution.merkle_root);
    println!("token total: {}", distribution.token_total);
    println!("claims:      {}", distribution.claims.len());
    println!("wrote {}", OUTPUT_PATH);
}
