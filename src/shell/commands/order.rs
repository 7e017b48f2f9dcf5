//! Order commands - create, list, delete and export.

use crate::{
    core::{
        export,
        order::{self, OrderSort},
    },
    errors::{Error, Result},
    shell::{
        ShellData,
        args::{OrderAction, SortKey},
        render,
    },
};
use std::{fs::File, io::Write};

/// Runs an order action.
pub async fn run(data: &ShellData, action: OrderAction, out: &mut dyn Write) -> Result<()> {
    match action {
        OrderAction::Create {
            client,
            products,
            date,
        } => {
            let created = order::create_order(&data.database, &client, &products, date).await?;
            writeln!(
                out,
                "Order saved: {} for {} on {}",
                render::format_money(created.total()),
                created.client_id(),
                created.date()
            )?;
        }
        OrderAction::List { sort } => {
            let orders = order::load_orders(&data.database).await?;
            if orders.is_empty() {
                writeln!(out, "No orders")?;
                return Ok(());
            }
            // Number before sorting so positions match `order delete`
            let mut orders = order::number_orders(orders);
            if let Some(sort) = sort {
                order::sort_orders(&mut orders, sort.into());
            }
            write!(out, "{}", render::render_orders(&orders))?;
        }
        OrderAction::Delete { position } => {
            // Listings number orders from 1
            let Some(index) = position.checked_sub(1) else {
                return Err(Error::Validation {
                    errors: vec!["Positions start at 1".to_string()],
                });
            };
            if order::delete_order_by_index(&data.database, index).await? {
                writeln!(out, "Order {position} deleted")?;
            } else {
                writeln!(out, "No order at position {position}")?;
            }
        }
        OrderAction::Export { path } => {
            let path = path.unwrap_or_else(|| data.config.export.orders_file.clone());
            let orders = order::load_orders(&data.database).await?;
            let written = export::write_orders_csv(&orders, File::create(&path)?)?;
            tracing::info!(path = %path.display(), written, "Orders exported");
            writeln!(out, "Saved {written} orders to {}", path.display())?;
        }
    }
    Ok(())
}

impl From<SortKey> for OrderSort {
    fn from(key: SortKey) -> Self {
        match key {
            SortKey::Total => Self::TotalDescending,
            SortKey::Date => Self::DateAscending,
        }
    }
}
