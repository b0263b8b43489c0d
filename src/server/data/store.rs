use sea_orm::{ConnectionTrait, DbErr, QueryResult, Statement, Value};

use crate::model::{report::RowSetDto, table::Table};

/// Raw SQL access returning generic, column-ordered row sets.
pub struct Store<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> Store<'a, C> {
    /// Creates a new instance of [`Store`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Snapshot of every row of a table, ordered by primary key, with columns in
    /// their persisted order.
    pub async fn fetch_all(&self, table: Table) -> Result<RowSetDto, DbErr> {
        let columns = table.columns();
        let sql = format!(
            "SELECT {} FROM {} ORDER BY {}",
            columns.join(", "),
            table.table_name(),
            table.primary_key()
        );

        self.query_rows(&sql, columns, Vec::new()).await
    }

    /// Executes a single statement and returns the number of affected rows.
    pub async fn execute(&self, sql: &str, values: Vec<Value>) -> Result<u64, DbErr> {
        let stmt = Statement::from_sql_and_values(self.db.get_database_backend(), sql, values);
        let result = self.db.execute_raw(stmt).await?;

        Ok(result.rows_affected())
    }

    /// Runs a query and decodes the named columns of each row in order.
    pub async fn query_rows(
        &self,
        sql: &str,
        columns: &[&str],
        values: Vec<Value>,
    ) -> Result<RowSetDto, DbErr> {
        let stmt = Statement::from_sql_and_values(self.db.get_database_backend(), sql, values);
        let results = self.db.query_all_raw(stmt).await?;

        let mut rows = Vec::with_capacity(results.len());
        for result in &results {
            let row = columns
                .iter()
                .map(|column| decode(result, column))
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(row);
        }

        Ok(RowSetDto {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows,
        })
    }
}

/// Decodes a single cell as integer, real or text, whichever its stored type is.
fn decode(result: &QueryResult, column: &str) -> Result<serde_json::Value, DbErr> {
    if let Ok(value) = result.try_get::<Option<i64>>("", column) {
        return Ok(value.map_or(serde_json::Value::Null, serde_json::Value::from));
    }
    if let Ok(value) = result.try_get::<Option<f64>>("", column) {
        return Ok(value.map_or(serde_json::Value::Null, serde_json::Value::from));
    }
    if let Ok(value) = result.try_get::<Option<String>>("", column) {
        return Ok(value.map_or(serde_json::Value::Null, serde_json::Value::from));
    }

    Err(DbErr::Type(format!(
        "Column {} holds a value that is not an integer, real or text",
        column
    )))
}
