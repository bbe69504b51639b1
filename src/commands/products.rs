use eol_data::{EolClient, Result};
use regex::Regex;

use crate::output;

pub async fn list(client: &EolClient, matching: Option<&str>) -> Result<()> {
    let pattern = matching.map(Regex::new).transpose()?;

    let products = client.list_products().await?;
    let products = filter_products(products, pattern.as_ref());

    output::print_names(&products);

    Ok(())
}

fn filter_products(products: Vec<String>, pattern: Option<&Regex>) -> Vec<String> {
    match pattern {
        Some(re) => products.into_iter().filter(|p| re.is_match(p)).collect(),
        None => products,
    }
}
