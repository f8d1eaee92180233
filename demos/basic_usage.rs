use euclid_vector::{
    serialization::{read_vectors, write_vectors},
    utils::{angle_between, cosine_similarity, generate_random_vectors},
    vector, Vector,
};
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("📐 Euclidean Vector Demo");
    println!("========================\n");

    let a = vector![1, 1, 1]?;
    let b = vector![2, 4, 6]?;

    println!("a = {}, |a| = {:.4}", a, a.length());
    println!("b = {}, |b| = {:.4}", b, b.length());

    println!("\n➕ Arithmetic");
    println!("  a + b     = {}", a.add(&b)?);
    println!("  a - b     = {}", a.subtract(&b)?);
    println!("  3a        = {}", a.scale(3.0));
    println!("  b / 2     = {}", b.divide(2.0));
    println!("  -b        = {}", -&b);

    println!("\n📏 Geometry");
    println!("  a · b     = {}", a.dot(&b)?);
    println!("  a × b     = {}", a.cross(&b)?);
    println!("  â         = {}", a.normalize());
    println!("  a⊥        = {}", a.perpendicular()?);
    println!("  cos(a, b) = {:.4}", cosine_similarity(&a, &b)?);
    println!("  ∠(a, b)   = {:.4} rad", angle_between(&a, &b)?);

    println!("\n⚠️  Errors");
    if let Err(e) = a.add(&vector![1, 2]?) {
        println!("  a + (1, 2): {}", e);
    }
    if let Err(e) = Vector::new(Vec::new()) {
        println!("  (): {}", e);
    }
    if let Err(e) = vector![1, 2, 3, 4]?.perpendicular() {
        println!("  (1, 2, 3, 4)⊥: {}", e);
    }

    println!("\n💾 JSON round trip");
    let vectors = generate_random_vectors(3, 4)?;
    let mut buffer = Vec::new();
    write_vectors(&vectors, &mut buffer)?;
    let loaded = read_vectors(buffer.as_slice())?;
    println!("  Wrote {} bytes, read back {} vectors", buffer.len(), loaded.len());

    println!("\n✅ Demo completed successfully!");
    Ok(())
}
