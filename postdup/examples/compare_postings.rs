use postdup::{DetectorConfig, MinHashDetector, Signature};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let postings = vec![
        "Senior Rust engineer wanted in Oakland. Competitive salary, remote friendly, great team.",
        "Senior Rust engineer wanted in Oakland. Competitive salary, remote friendly, great team!",
        "Junior Go developer wanted in Berlin. Relocation support and a great team.",
        "Hiring now",
    ];

    // Creates a detector with 20 hash functions (with seed value 42).
    let detector = MinHashDetector::new(&DetectorConfig::default().with_seed(42)).unwrap();

    // Signatures are computed once and stored in their text form.
    let stored: Vec<String> = detector
        .generate_minhashes(&postings)
        .iter()
        .map(Signature::to_string)
        .collect();

    for i in 0..postings.len() {
        for j in i + 1..postings.len() {
            let exact = postdup::jaccard_similarity(postings[i], postings[j]);
            let duplicate = detector.minhash_similar(&stored[i], &stored[j]).unwrap();
            println!("({i}, {j}) jaccard={exact:.3} duplicate={duplicate}");
        }
    }
}
