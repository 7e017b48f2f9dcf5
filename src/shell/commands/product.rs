//! Product commands - add, list and delete.

use crate::{
    core::{product, validation},
    errors::Result,
    shell::{ShellData, args::ProductAction, render},
};
use std::io::Write;

/// Runs a product action.
pub async fn run(data: &ShellData, action: ProductAction, out: &mut dyn Write) -> Result<()> {
    match action {
        ProductAction::Add {
            name,
            price,
            category,
        } => {
            let new_product = validation::validate_product(&name, &price, category.as_deref())?;
            let saved = product::save_product(&data.database, new_product).await?;
            writeln!(
                out,
                "Product '{}' added with id {} at {}",
                saved.name,
                saved.id,
                render::format_money(saved.price)
            )?;
        }
        ProductAction::List => {
            let products = product::load_products(&data.database).await?;
            if products.is_empty() {
                writeln!(out, "No products")?;
            } else {
                write!(out, "{}", render::render_products(&products))?;
            }
        }
        ProductAction::Delete { id } => {
            product::delete_product(&data.database, id).await?;
            writeln!(out, "Product {id} deleted")?;
        }
    }
    Ok(())
}
