use serde_json::json;

/// Minimal deterministic PRNG (splitmix64)
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        SimpleRng { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E3779B97F4A7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
        z ^ (z >> 31)
    }

    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        let unit = (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64;
        lo + unit * (hi - lo)
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let varieties: &[(&str, &str, f64)] = &[
        ("Fuji", "apple", 180.0),
        ("Gala", "apple", 160.0),
        ("Granny Smith", "apple", 170.0),
        ("Bartlett", "pear", 210.0),
        ("Anjou", "pear", 230.0),
        ("Bing", "cherry", 9.0),
        ("Rainier", "cherry", 8.5),
        ("Cavendish", "banana", 120.0),
    ];
    let origins = ["Chile", "Spain", "New Zealand", "USA"];

    let mut records: Vec<serde_json::Value> = Vec::new();
    let mut id: i64 = 0;
    for &(name, kind, base_weight) in varieties {
        for origin in &origins {
            let weight = base_weight * rng.uniform(0.85, 1.15);
            let price = rng.uniform(0.5, 4.0);
            let organic = rng.next_u64() % 3 == 0;

            records.push(json!({
                "id": id,
                "name": name,
                "type": kind,
                "origin": origin,
                "weight_g": (weight * 10.0).round() / 10.0,
                "price_eur": (price * 100.0).round() / 100.0,
                "organic": organic,
            }));
            id += 1;
        }
    }

    // Write CSV
    let csv_path = "sample_data.csv";
    let mut wtr = csv::Writer::from_path(csv_path).expect("Failed to create CSV file");
    wtr.write_record(["id", "name", "type", "origin", "weight_g", "price_eur", "organic"])
        .expect("Failed to write CSV header");
    for rec in &records {
        wtr.write_record([
            rec["id"].to_string(),
            rec["name"].as_str().unwrap().to_string(),
            rec["type"].as_str().unwrap().to_string(),
            rec["origin"].as_str().unwrap().to_string(),
            rec["weight_g"].to_string(),
            rec["price_eur"].to_string(),
            rec["organic"].to_string(),
        ])
        .expect("Failed to write CSV row");
    }
    wtr.flush().expect("Failed to flush CSV");

    // Write JSON
    let json_path = "sample_data.json";
    let text = serde_json::to_string_pretty(&records).expect("Failed to serialize JSON");
    std::fs::write(json_path, text).expect("Failed to write JSON file");

    println!("Wrote {id} rows to {csv_path} and {json_path}");
}
