// src/db/saved.rs
use crate::db::listings::listing_from_row;
use crate::domain::Listing;
use crate::errors::ServerError;
use rusqlite::{params, Connection};

/// Save a listing for a user. Saving twice is a no-op.
/// Returns `NotFound` for an unknown listing.
pub fn save_property(conn: &Connection, user_id: i64, property_id: i64, now: i64) -> Result<(), ServerError> {
    let exists: bool = conn
        .query_row(
            "select exists(select 1 from properties where id = ?)",
            params![property_id],
            |r| r.get(0),
        )
        .map_err(|e| ServerError::DbError(format!("check property failed: {e}")))?;
    if !exists {
        return Err(ServerError::NotFound);
    }

    conn.execute(
        "insert or ignore into saved_properties (user_id, property_id, saved_at) values (?, ?, ?)",
        params![user_id, property_id, now],
    )
    .map_err(|e| ServerError::DbError(format!("save property failed: {e}")))?;
    Ok(())
}

pub fn unsave_property(conn: &Connection, user_id: i64, property_id: i64) -> Result<(), ServerError> {
    conn.execute(
        "delete from saved_properties where user_id = ? and property_id = ?",
        params![user_id, property_id],
    )
    .map_err(|e| ServerError::DbError(format!("unsave property failed: {e}")))?;
    Ok(())
}

/// Saved listings, most recently saved first.
pub fn saved_listings(conn: &Connection, user_id: i64) -> Result<Vec<Listing>, ServerError> {
    let mut stmt = conn
        .prepare(
            r#"
            select p.id, p.address, p.neighborhood, p.county, p.price, p.bedrooms, p.bathrooms,
                   p.square_feet, p.property_type, p.year_built, p.latitude, p.longitude,
                   p.image_url, p.description
            from saved_properties s
            join properties p on p.id = s.property_id
            where s.user_id = ?
            order by s.saved_at desc, s.id desc
            "#,
        )
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let rows = stmt
        .query_map(params![user_id], listing_from_row)
        .map_err(|e| ServerError::DbError(e.to_string()))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(|e| ServerError::DbError(e.to_string()))?);
    }
    Ok(out)
}
