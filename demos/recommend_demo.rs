//! End-to-end walkthrough: build a space from an inline dataset, rank
//! neighbors for a query entity, and assemble the visualization scene.
//!
//! Run with `RUST_LOG=debug cargo run --example recommend_demo` to see the
//! build and query logging.

use recspace::builder::RecSpaceBuilder;

const DATASET: &str = "\
askscience; 0.82,0.11,0.43,0.28,0.64,0.32; -3.1,2.4,0.7
rust; 0.79,0.12,0.45,0.29,0.61,0.33; -2.8,2.1,0.9
programming; 0.81,0.10,0.44,0.27,0.63,0.31; -2.9,2.6,0.5
cooking; 0.12,0.78,0.09,0.67,0.21,0.70; 4.2,-1.3,2.2
baking; 0.10,0.80,0.11,0.65,0.19,0.72; 4.5,-1.1,2.0
gardening; 0.15,0.74,0.13,0.62,0.25,0.68; 3.9,-0.8,2.5
askreddit; 0.45,0.46,0.44,0.45,0.43,0.47; 0.2,0.3,1.4
worldnews; 0.48,0.41,0.47,0.42,0.46,0.44; 0.6,0.9,1.1";

fn parse_dataset() -> (Vec<String>, Vec<Vec<f64>>, Vec<Vec<f64>>) {
    let mut names = Vec::new();
    let mut embeddings = Vec::new();
    let mut projection = Vec::new();
    for line in DATASET.lines() {
        let mut parts = line.split(';');
        names.push(parts.next().unwrap().trim().to_string());
        let numbers = |s: &str| -> Vec<f64> {
            s.split(',').map(|v| v.trim().parse().unwrap()).collect()
        };
        embeddings.push(numbers(parts.next().unwrap()));
        projection.push(numbers(parts.next().unwrap()));
    }
    (names, embeddings, projection)
}

fn main() {
    env_logger::init();

    let (names, embeddings, projection) = parse_dataset();
    let space = RecSpaceBuilder::new()
        .with_embeddings(embeddings)
        .with_projection(projection)
        .with_entities(names)
        .with_default_k(3)
        .build()
        .expect("demo dataset is well-formed");

    let query = "Cooking";
    println!("Top neighbors of {:?}:", query);
    match space.recommend(query, 3) {
        Some(recs) => {
            for rec in &recs {
                println!("  {:<12} score={:<8} index={}", rec.name, rec.score, rec.index);
            }
        }
        None => println!("  no such entity"),
    }

    let scene = space.scene(query, None).expect("query entity exists");
    println!(
        "\nScene: {} recommended, {} in boxed neighborhood",
        scene.recommended.points.len(),
        scene.neighborhood.points.len()
    );
    println!(
        "Display ranges: x={:?} y={:?} z={:?}",
        scene.axis_ranges[0], scene.axis_ranges[1], scene.axis_ranges[2]
    );
    println!(
        "\nScene JSON:\n{}",
        serde_json::to_string_pretty(&scene).expect("scene serializes")
    );
}
