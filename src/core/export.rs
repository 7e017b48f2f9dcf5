//! CSV and JSON interchange for orders and clients.
//!
//! Exports are direct dumps of in-memory records with a fixed field order.
//! The functions write to any `Write`/read from any `Read`, so the shell
//! decides where the bytes go.

use crate::{
    core::{client::NewClient, record::OrderRecord},
    entities::client,
    errors::Result,
};
use serde::Serialize;
use std::io::{Read, Write};

/// Header of the orders CSV, in column order
pub const ORDER_CSV_HEADER: [&str; 4] = ["client", "products", "date", "total"];

/// Header of the clients CSV, in column order
pub const CLIENT_CSV_HEADER: [&str; 4] = ["name", "email", "phone", "address"];

#[derive(Serialize)]
struct OrderRow<'a> {
    client: &'a str,
    products: String,
    date: &'a str,
    total: f64,
}

#[derive(Serialize)]
struct ClientRow<'a> {
    name: &'a str,
    email: &'a str,
    phone: &'a str,
    address: &'a str,
}

impl<'a> From<&'a client::Model> for ClientRow<'a> {
    fn from(model: &'a client::Model) -> Self {
        Self {
            name: &model.name,
            email: &model.email,
            phone: &model.phone,
            address: &model.address,
        }
    }
}

/// Writes orders as CSV, returning the number of data rows.
///
/// Products are written as comma-joined names. The header is written even
/// when there are no orders.
pub fn write_orders_csv<W: Write>(orders: &[OrderRecord], writer: W) -> Result<usize> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer.write_record(ORDER_CSV_HEADER)?;

    for order in orders {
        csv_writer.serialize(OrderRow {
            client: &order.client,
            products: order.products.joined_names(),
            date: &order.date,
            total: order.total,
        })?;
    }
    csv_writer.flush()?;
    Ok(orders.len())
}

/// Writes clients as CSV, returning the number of data rows.
pub fn write_clients_csv<W: Write>(clients: &[&client::Model], writer: W) -> Result<usize> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer.write_record(CLIENT_CSV_HEADER)?;

    for client in clients {
        csv_writer.serialize(ClientRow::from(*client))?;
    }
    csv_writer.flush()?;
    Ok(clients.len())
}

/// Writes clients as a pretty-printed JSON array of records.
pub fn write_clients_json<W: Write>(clients: &[&client::Model], mut writer: W) -> Result<usize> {
    let rows: Vec<ClientRow<'_>> = clients.iter().map(|client| ClientRow::from(*client)).collect();
    serde_json::to_writer_pretty(&mut writer, &rows)?;
    writer.write_all(b"\n")?;
    Ok(rows.len())
}

/// Reads clients from CSV with a `name,email,phone,address` header.
///
/// Cells are trimmed and rows without a name are skipped. Missing columns read
/// as empty strings. Imported rows are not run through form validation.
pub fn read_clients_csv<R: Read>(reader: R) -> Result<Vec<NewClient>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut clients = Vec::new();
    for row in csv_reader.deserialize::<NewClient>() {
        let client = row?;
        if client.name.is_empty() {
            tracing::debug!("Skipping CSV row without a name");
            continue;
        }
        tracing::debug!(name = %client.name, "Read client from CSV");
        clients.push(client);
    }
    Ok(clients)
}
