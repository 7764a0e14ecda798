use urlparams::{Value, add, create_url_object, remove, set};

fn main() -> Result<(), urlparams::ParseError> {
    let url = "http://www.example.com/search?tags=rust+wasm&page=2#results";

    // Inspect the decoded query
    let object = create_url_object(url)?;
    for (name, value) in object.query().iter() {
        println!("{name} = {:?}", value.values()); // tags = ["rust", "wasm"], page = ["2"]
    }
    println!();

    // Add values (duplicates are dropped)
    let url = add(url, "tags", ["wasm", "cli"])?;
    println!("After add: {url}"); // ...?tags=rust+wasm+cli&page=2#results

    // Remove a value
    let url = remove(&url, "tags", "rust")?;
    println!("After remove: {url}"); // ...?tags=wasm+cli&page=2#results

    // Replace a value
    let url = set(&url, "page", 3)?;
    println!("After set: {url}"); // ...?tags=wasm+cli&page=3#results

    // A parameter without a value is a flag
    let url = add(&url, "debug", Value::Absent)?;
    println!("After flag: {url}"); // ...&debug=true#results

    // Drop a parameter entirely
    let url = remove(&url, "page", ())?;
    println!("After remove all: {url}"); // ...?tags=wasm+cli&debug=true#results

    Ok(())
}
