/// Multi-value encoding example
use urlparams::{MultiValueEncoding, UrlParams};

fn main() -> Result<(), urlparams::ParseError> {
    let url = "http://www.example.com/?color=red";

    let joined = UrlParams::new();
    println!("{}", joined.add(url, "color", ["green", "blue"])?); // ?color=red+green+blue

    let repeated = UrlParams::new().with_encoding(MultiValueEncoding::RepeatedKeys);
    println!("{}", repeated.add(url, "color", ["green", "blue"])?); // ?color=red&color=green&color=blue

    Ok(())
}
