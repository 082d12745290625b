use serde_json::{Map, Number, Value};
use sqlx::sqlite::SqliteRow;
use sqlx::{Column, Row, TypeInfo, ValueRef};

/// A row from `SELECT *`, keyed by column name in table order.
pub type Record = Map<String, Value>;

/// Convert a row into a JSON object using each value's storage class.
pub fn row_to_record(row: &SqliteRow) -> Result<Record, sqlx::Error> {
    let mut record = Map::with_capacity(row.columns().len());
    for column in row.columns() {
        let index = column.ordinal();
        let value = column_value(row, index)?;
        record.insert(column.name().to_string(), value);
    }
    Ok(record)
}

fn column_value(row: &SqliteRow, index: usize) -> Result<Value, sqlx::Error> {
    let raw = row.try_get_raw(index)?;
    if raw.is_null() {
        return Ok(Value::Null);
    }

    let type_name = raw.type_info().name().to_string();
    let value = match type_name.as_str() {
        "INTEGER" | "BOOLEAN" => Value::from(row.try_get_unchecked::<i64, _>(index)?),
        "REAL" | "NUMERIC" => {
            let f = row.try_get_unchecked::<f64, _>(index)?;
            Number::from_f64(f).map_or(Value::Null, Value::Number)
        }
        "BLOB" => {
            let bytes = row.try_get_unchecked::<Vec<u8>, _>(index)?;
            Value::Array(bytes.into_iter().map(Value::from).collect())
        }
        _ => Value::String(row.try_get_unchecked::<String, _>(index)?),
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use sqlx::sqlite::SqlitePoolOptions;

    #[tokio::test]
    async fn maps_each_storage_class() {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();

        let row = sqlx::query("SELECT 7 AS n, 1.5 AS r, 'Nolan' AS t, NULL AS z, x'0102' AS b")
            .fetch_one(&pool)
            .await
            .unwrap();

        let record = row_to_record(&row).unwrap();
        assert_eq!(
            Value::Object(record.clone()),
            json!({ "n": 7, "r": 1.5, "t": "Nolan", "z": null, "b": [1, 2] })
        );
        let keys: Vec<&str> = record.keys().map(String::as_str).collect();
        assert_eq!(keys, ["n", "r", "t", "z", "b"]);
    }

    #[tokio::test]
    async fn uses_value_class_over_declared_type() {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();

        sqlx::query("CREATE TABLE loose (id INTEGER PRIMARY KEY, tag INTEGER)")
            .execute(&pool)
            .await
            .unwrap();
        sqlx::query("INSERT INTO loose (tag) VALUES ('not-a-number')")
            .execute(&pool)
            .await
            .unwrap();

        let row = sqlx::query("SELECT * FROM loose").fetch_one(&pool).await.unwrap();
        let record = row_to_record(&row).unwrap();
        assert_eq!(record["id"], json!(1));
        assert_eq!(record["tag"], json!("not-a-number"));
    }
}
