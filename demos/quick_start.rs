use outcome_rail::ops;
use outcome_rail::Outcome;

fn read_config() -> Outcome<String, String> {
    Outcome::from(std::fs::read_to_string("config.toml")).format(|e| format!("config.toml: {e}"))
}

fn main() {
    println!("Running Quick Start examples...");

    // 1. Method chaining
    println!("\n1. Method chaining:");
    let doubled = Outcome::<&str, i32>::ok(21).map(|x| x * 2);
    println!("ok(21).map(x * 2) = {:?}", doubled);

    // 2. Free functions
    println!("\n2. Free functions:");
    let failed: Outcome<&str, i32> = ops::error("bad input");
    println!("map(x + 1, error) = {:?}", ops::map(|x| x + 1, failed));

    // 3. Falling back
    println!("\n3. Falling back:");
    let config = read_config().recover(|e| {
        println!("using default config ({e})");
        String::from("[server]\nport = 8080\n")
    });
    println!("config length = {}", config.to_value(String::new()).len());

    // 4. Optional values
    println!("\n4. Optional values:");
    let port = Outcome::from_maybe("PORT not set", std::env::var("PORT").ok());
    match port.to_maybe() {
        Some(port) => println!("PORT = {port}"),
        None => println!("PORT not set"),
    }
}
