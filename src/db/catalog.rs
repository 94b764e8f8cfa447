// src/db/catalog.rs
use crate::domain::catalog::{
    button_text, AdditionalInfo, Event, News, Offering, OfferingKind, Period, Pet, Product,
};
use crate::errors::ServerError;
use rusqlite::{params, Connection, Row};
use std::collections::BTreeMap;

fn collect<T>(
    rows: impl Iterator<Item = rusqlite::Result<T>>,
) -> Result<Vec<T>, ServerError> {
    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(|e| ServerError::DbError(e.to_string()))?);
    }
    Ok(out)
}

/// Houses, wellness treatments or actions, in display order.
pub fn list_offerings(conn: &Connection, kind: OfferingKind) -> Result<Vec<Offering>, ServerError> {
    // Table name comes from a closed enum, never from input.
    let sql = format!(
        r#"
        select o.id, o.name, o.start_price, o.duration, o.description,
               o.additional_info_id, o.booking_identifier_id, o.booking_btn_text,
               p.singular, p.plural, p.plural_special
        from {} o
        join periods p on p.id = o.period_id
        order by o.display_order, o.id
        "#,
        kind.table()
    );

    let mut stmt = conn
        .prepare(&sql)
        .map_err(|e| ServerError::DbError(format!("prepare {} failed: {e}", kind.table())))?;

    let rows = stmt
        .query_map([], |row| offering_from_row(row, kind))
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    collect(rows)
}

fn offering_from_row(row: &Row<'_>, kind: OfferingKind) -> rusqlite::Result<Offering> {
    Ok(Offering {
        id: row.get(0)?,
        kind,
        name: row.get(1)?,
        start_price: row.get(2)?,
        duration: row.get(3)?,
        description: row.get(4)?,
        additional_info_id: row.get(5)?,
        booking_identifier_id: row.get(6)?,
        booking_btn_text: button_text(row.get::<_, Option<String>>(7)?.as_deref()),
        period: Period {
            singular: row.get(8)?,
            plural: row.get(9)?,
            plural_special: row.get(10)?,
        },
    })
}

pub fn list_additional_info(conn: &Connection) -> Result<Vec<AdditionalInfo>, ServerError> {
    let mut stmt = conn
        .prepare(
            r#"
            select a.id, a.displayed_name, i.text
            from additional_info a
            left join additional_info_items i on i.additional_info_id = a.id
            order by a.id, i.id
            "#,
        )
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let rows = stmt
        .query_map([], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, Option<String>>(2)?,
            ))
        })
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let mut grouped: BTreeMap<i64, AdditionalInfo> = BTreeMap::new();
    for (id, displayed_name, item) in collect(rows)? {
        let info = grouped.entry(id).or_insert_with(|| AdditionalInfo {
            id,
            displayed_name,
            items: Vec::new(),
        });
        if let Some(text) = item {
            info.items.push(text);
        }
    }

    Ok(grouped.into_values().collect())
}

/// Available products first, then by price. `only_available` drops the rest.
pub fn list_products(
    conn: &Connection,
    only_available: bool,
    limit: Option<i64>,
) -> Result<Vec<Product>, ServerError> {
    let mut stmt = conn
        .prepare(
            r#"
            select id, name, description, price, count, measure, is_available
            from products
            where (?1 = 0 or is_available = 1)
            order by is_available desc, price, id
            limit ?2
            "#,
        )
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let rows = stmt
        .query_map(params![only_available, limit.unwrap_or(-1)], |row| {
            Ok(Product {
                id: row.get(0)?,
                name: row.get(1)?,
                description: row.get(2)?,
                price: row.get(3)?,
                count: row.get(4)?,
                measure: row.get(5)?,
                is_available: row.get(6)?,
            })
        })
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    collect(rows)
}

pub fn list_events(conn: &Connection) -> Result<Vec<Event>, ServerError> {
    let mut stmt = conn
        .prepare("select id, title, description, date from events order by date")
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let rows = stmt
        .query_map([], |row| {
            Ok(Event {
                id: row.get(0)?,
                title: row.get(1)?,
                description: row.get(2)?,
                date: row.get(3)?,
            })
        })
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    collect(rows)
}

/// Newest first.
pub fn list_news(conn: &Connection, limit: Option<i64>) -> Result<Vec<News>, ServerError> {
    let mut stmt = conn
        .prepare("select id, title, description, date from news order by date desc, id desc limit ?")
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let rows = stmt
        .query_map(params![limit.unwrap_or(-1)], |row| {
            Ok(News {
                id: row.get(0)?,
                title: row.get(1)?,
                description: row.get(2)?,
                date: row.get(3)?,
            })
        })
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    collect(rows)
}

pub fn list_pets(conn: &Connection) -> Result<Vec<Pet>, ServerError> {
    let mut stmt = conn
        .prepare("select id, name, description from pets order by display_order, id")
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let rows = stmt
        .query_map([], |row| {
            Ok(Pet {
                id: row.get(0)?,
                name: row.get(1)?,
                description: row.get(2)?,
            })
        })
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    collect(rows)
}
