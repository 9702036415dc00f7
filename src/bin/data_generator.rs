use rand::Rng;
use std::fs::File;
use std::io::{BufWriter, Write};

fn main() {
    let path = "data/data.csv";
    let file = File::create(path).unwrap();
    let mut writer = BufWriter::new(file);

    writeln!(writer, "id,purpose,int_rate,grade").unwrap();

    let purposes = [
        "car",
        "credit_card",
        "debt_consolidation",
        "education",
        "home_improvement",
        "small_business",
    ];
    let grades = ["A", "B", "C", "D", "E"];

    let mut rng = rand::rng();
    for i in 0..10_000 {
        let purpose = purposes[rng.random_range(0..purposes.len())];
        let rate: f64 = rng.random_range(3.0..26.0);
        let grade = grades[rng.random_range(0..grades.len())];
        writeln!(writer, "{},{},{:.2},{}", i, purpose, rate, grade).unwrap();
    }

    println!("Sample CSV generated: {}", path);
}
