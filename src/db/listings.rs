// src/db/listings.rs
use crate::domain::Listing;
use crate::errors::ServerError;
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};
use serde::Serialize;

const SQL_LISTING_STATS: &str = include_str!("../../sql/listing_stats.sql");

const LISTING_COLUMNS: &str = "id, address, neighborhood, county, price, bedrooms, bathrooms, \
     square_feet, property_type, year_built, latitude, longitude, image_url, description";

/// Optional filters from the search form / query string. `None` means
/// "don't filter on this".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingFilter {
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub bedrooms: Option<i64>,
    pub county: Option<String>,
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingStats {
    pub total: i64,
    pub avg_price: Option<i64>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub avg_bedrooms: Option<f64>,
}

pub(crate) fn listing_from_row(row: &Row<'_>) -> rusqlite::Result<Listing> {
    Ok(Listing {
        id: row.get(0)?,
        address: row.get(1)?,
        neighborhood: row.get(2)?,
        county: row.get(3)?,
        price: row.get(4)?,
        bedrooms: row.get(5)?,
        bathrooms: row.get(6)?,
        square_feet: row.get(7)?,
        property_type: row.get(8)?,
        year_built: row.get(9)?,
        latitude: row.get(10)?,
        longitude: row.get(11)?,
        image_url: row.get(12)?,
        description: row.get(13)?,
    })
}

/// Builds the filtered listing query. Every user value is bound, never
/// spliced into the SQL text.
fn build_search_sql(filter: &ListingFilter) -> (String, Vec<Value>) {
    let mut sql = format!("SELECT {LISTING_COLUMNS} FROM properties WHERE 1=1");
    let mut args: Vec<Value> = Vec::new();

    if let Some(min) = filter.min_price {
        args.push(Value::Real(min));
        sql.push_str(&format!(" AND price >= ?{}", args.len()));
    }
    if let Some(max) = filter.max_price {
        args.push(Value::Real(max));
        sql.push_str(&format!(" AND price <= ?{}", args.len()));
    }
    if let Some(beds) = filter.bedrooms {
        args.push(Value::Integer(beds));
        sql.push_str(&format!(" AND bedrooms = ?{}", args.len()));
    }
    if let Some(county) = &filter.county {
        args.push(Value::Text(county.clone()));
        sql.push_str(&format!(" AND county = ?{}", args.len()));
    }

    sql.push_str(" ORDER BY price ASC, id ASC");

    if let Some(limit) = filter.limit {
        args.push(Value::Integer(limit));
        sql.push_str(&format!(" LIMIT ?{}", args.len()));
    }

    (sql, args)
}

pub fn search_listings(conn: &Connection, filter: &ListingFilter) -> Result<Vec<Listing>, ServerError> {
    let (sql, args) = build_search_sql(filter);

    let mut stmt = conn
        .prepare(&sql)
        .map_err(|e| ServerError::DbError(format!("prepare listing search failed: {e}")))?;

    let rows = stmt
        .query_map(params_from_iter(args), listing_from_row)
        .map_err(|e| ServerError::DbError(format!("listing search failed: {e}")))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(|e| ServerError::DbError(e.to_string()))?);
    }
    Ok(out)
}

pub fn get_listing(conn: &Connection, id: i64) -> Result<Option<Listing>, ServerError> {
    conn.query_row(
        &format!("SELECT {LISTING_COLUMNS} FROM properties WHERE id = ?1"),
        params![id],
        listing_from_row,
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("select listing failed: {e}")))
}

/// Fetch several listings, keeping the order of `ids` and skipping unknown ones.
pub fn get_listings_by_ids(conn: &Connection, ids: &[i64]) -> Result<Vec<Listing>, ServerError> {
    let mut out = Vec::with_capacity(ids.len());
    for id in ids {
        if out.iter().any(|l: &Listing| l.id == *id) {
            continue;
        }
        if let Some(listing) = get_listing(conn, *id)? {
            out.push(listing);
        }
    }
    Ok(out)
}

pub fn listing_stats(conn: &Connection) -> Result<ListingStats, ServerError> {
    conn.query_row(SQL_LISTING_STATS, [], |r| {
        let avg_price: Option<f64> = r.get(1)?;
        let min_price: Option<i64> = r.get(2)?;
        let max_price: Option<i64> = r.get(3)?;
        Ok(ListingStats {
            total: r.get(0)?,
            avg_price: avg_price.map(|p| p.round() as i64),
            min_price,
            max_price,
            avg_bedrooms: r.get(4)?,
        })
    })
    .map_err(|e| ServerError::DbError(format!("listing stats failed: {e}")))
}

/// Distinct counties with listing counts, for the search form.
pub fn counties(conn: &Connection) -> Result<Vec<(String, i64)>, ServerError> {
    let mut stmt = conn
        .prepare(
            "SELECT county, COUNT(*) FROM properties
             WHERE county IS NOT NULL
             GROUP BY county ORDER BY county",
        )
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let rows = stmt
        .query_map([], |row| Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?)))
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(|e| ServerError::DbError(e.to_string()))?);
    }
    Ok(out)
}
