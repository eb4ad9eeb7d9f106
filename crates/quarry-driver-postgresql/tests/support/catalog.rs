use quarry_core::{
    schema::IndexDescriptor,
    stmt::Value,
    Error, Result, Row,
};
use std::collections::{BTreeMap, HashMap};

/// Just enough of a PostgreSQL catalog to answer the adapter's introspection
/// queries and apply the DDL it generates.
#[derive(Debug, Default)]
pub struct FakeCatalog {
    pub tables: BTreeMap<String, Vec<FakeColumn>>,
    pub views: Vec<String>,
    pub indexes: HashMap<String, Vec<IndexDescriptor>>,
    pub databases: Vec<String>,

    /// `(appliesTo, version)` audit rows
    pub migrations: Vec<(String, String)>,

    /// Data rows per table, as inserted
    pub rows: HashMap<String, Vec<Row>>,

    /// Statements containing this text fail
    pub fail_on: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FakeColumn {
    pub name: String,
    pub ty: String,
    pub size: Option<i64>,
    pub nullable: bool,
    pub serial: bool,
}

impl FakeCatalog {
    pub fn with_table(mut self, name: &str, columns: &[(&str, &str, Option<i64>, bool)]) -> Self {
        self.tables.insert(
            name.to_string(),
            columns
                .iter()
                .map(|(name, ty, size, nullable)| FakeColumn {
                    name: name.to_string(),
                    ty: ty.to_string(),
                    size: *size,
                    nullable: *nullable,
                    serial: false,
                })
                .collect(),
        );
        self
    }

    pub fn column(&self, table: &str, column: &str) -> Option<&FakeColumn> {
        self.tables.get(table)?.iter().find(|c| c.name == column)
    }

    pub fn respond(&mut self, sql: &str) -> Result<Vec<Row>> {
        if let Some(text) = &self.fail_on {
            if sql.contains(text.as_str()) {
                return Err(Error::driver(std::io::Error::other(format!(
                    "statement failed: {sql}"
                ))));
            }
        }

        if sql.starts_with("SELECT COUNT(*) AS \"count\" FROM information_schema.tables") {
            let name = literal_after(sql, "table_name=").unwrap_or_default();
            let exists = if sql.contains("'VIEW'") {
                self.views.contains(&name)
            } else {
                self.tables.contains_key(&name)
            };
            return Ok(count(exists as i64));
        }

        if sql.starts_with("SELECT COUNT(*) AS \"count\" FROM information_schema.columns") {
            let name = literal_after(sql, "table_name=").unwrap_or_default();
            let serials = self
                .tables
                .get(&name)
                .map(|columns| columns.iter().filter(|c| c.serial).count())
                .unwrap_or_default();
            return Ok(count(serials as i64));
        }

        if sql.starts_with("SELECT COUNT(*) AS \"count\" FROM pg_catalog.pg_database") {
            let name = literal_after(sql, "datname=").unwrap_or_default();
            return Ok(count(self.databases.contains(&name) as i64));
        }

        if sql.starts_with("SELECT MAX(\"version\")") {
            let applies_to = literal_after(sql, "\"appliesTo\"=").unwrap_or_default();
            let version = self
                .migrations
                .iter()
                .filter(|(table, _)| *table == applies_to)
                .map(|(_, version)| version.clone())
                .max();
            return Ok(vec![Row::from_pairs([("version", Value::from(version))])]);
        }

        if sql.starts_with("SELECT column_name::text") {
            let name = literal_after(sql, "table_name=").unwrap_or_default();
            let columns = self.tables.get(&name).cloned().unwrap_or_default();
            return Ok(columns
                .iter()
                .enumerate()
                .map(|(index, column)| {
                    Row::from_pairs([
                        ("name", Value::from(column.name.as_str())),
                        ("ordinal", Value::from(index as i64 + 1)),
                        ("type", Value::from(column.ty.as_str())),
                        ("size", Value::from(column.size)),
                        ("nullable", Value::from(if column.nullable { "YES" } else { "NO" })),
                        (
                            "defaultValue",
                            if column.serial {
                                Value::from(format!("nextval('{}_{}_seq'::regclass)", name, column.name))
                            } else {
                                Value::Null
                            },
                        ),
                    ])
                })
                .collect());
        }

        if sql.contains("FROM pg_catalog.pg_index") {
            let name = literal_after(sql, "t.relname=").unwrap_or_default();
            return Ok(self
                .indexes
                .get(&name)
                .into_iter()
                .flatten()
                .flat_map(|index| {
                    index.columns.iter().map(move |column| {
                        Row::from_pairs([
                            ("name", Value::from(index.name.as_str())),
                            ("column", Value::from(column.as_str())),
                        ])
                    })
                })
                .collect());
        }

        if sql.starts_with("SELECT table_schema::text") {
            let names: Vec<String> = if sql.contains("'VIEW'") {
                self.views.clone()
            } else {
                self.tables.keys().cloned().collect()
            };
            return Ok(names
                .into_iter()
                .map(|name| {
                    Row::from_pairs([("schema", Value::from("public")), ("name", Value::from(name))])
                })
                .collect());
        }

        if sql.starts_with("SELECT MAX(") {
            // SELECT MAX("t"."c") AS "value" FROM "t"
            let names = idents(sql);
            let (table, column) = (&names[0], &names[1]);
            let max = self
                .rows
                .get(table)
                .into_iter()
                .flatten()
                .filter_map(|row| row.get(column).and_then(Value::to_i64))
                .max();
            return Ok(vec![Row::from_pairs([("value", Value::from(max))])]);
        }

        if sql.starts_with("SELECT * FROM") {
            let table = idents(sql)[0].clone();
            let filters: Vec<(String, String)> = sql
                .split(" AND ")
                .filter_map(|part| {
                    let ident = idents(part).pop()?;
                    let value = literal_after(part, "=")?;
                    Some((ident, value))
                })
                .collect();
            return Ok(self
                .rows
                .get(&table)
                .into_iter()
                .flatten()
                .filter(|row| {
                    filters
                        .iter()
                        .all(|(column, value)| row.get(column).and_then(Value::as_str) == Some(value.as_str()))
                })
                .cloned()
                .collect());
        }

        if sql.starts_with("CREATE TABLE") {
            let table = idents(sql)[0].clone();
            if sql.starts_with("CREATE TABLE IF NOT EXISTS") && self.tables.contains_key(&table) {
                return Ok(vec![]);
            }
            let body = &sql[sql.find('(').unwrap() + 1..sql.rfind(')').unwrap()];
            let columns = split_top_level(body)
                .iter()
                .filter(|part| !part.starts_with("PRIMARY KEY"))
                .map(|part| parse_column(part))
                .collect();
            self.tables.insert(table, columns);
            return Ok(vec![]);
        }

        if sql.starts_with("ALTER TABLE") && sql.contains(" ADD COLUMN ") {
            let table = idents(sql)[0].clone();
            let definition = &sql[sql.find(" ADD COLUMN ").unwrap() + " ADD COLUMN ".len()..];
            let column = parse_column(definition);
            self.tables.entry(table).or_default().push(column);
            return Ok(vec![]);
        }

        if sql.starts_with("ALTER TABLE") {
            let table = idents(sql)[0].clone();
            let actions = &sql[sql.find(" ALTER COLUMN ").unwrap() + 1..];
            for action in split_top_level(actions) {
                let name = idents(&action)[0].clone();
                let columns = self.tables.entry(table.clone()).or_default();
                let Some(column) = columns.iter_mut().find(|c| c.name == name) else {
                    continue;
                };

                if let Some(ty) = action.split(" TYPE ").nth(1) {
                    column.ty = ty.split('(').next().unwrap_or_default().to_string();
                    column.size = size_of(ty);
                } else if action.ends_with("DROP NOT NULL") {
                    column.nullable = true;
                } else if action.ends_with("SET NOT NULL") {
                    column.nullable = false;
                }
            }
            return Ok(vec![]);
        }

        if sql.starts_with("CREATE INDEX") {
            let names = idents(sql);
            let index = IndexDescriptor {
                name: names[0].clone(),
                columns: names[2..].to_vec(),
            };
            self.indexes.entry(names[1].clone()).or_default().push(index);
            return Ok(vec![]);
        }

        if sql.starts_with("DROP INDEX") {
            let name = idents(sql).pop().unwrap_or_default();
            for indexes in self.indexes.values_mut() {
                indexes.retain(|index| index.name != name);
            }
            return Ok(vec![]);
        }

        if sql.starts_with("CREATE VIEW") {
            self.views.push(idents(sql)[0].clone());
            return Ok(vec![]);
        }

        if sql.starts_with("DROP VIEW") {
            let name = idents(sql)[0].clone();
            self.views.retain(|view| *view != name);
            return Ok(vec![]);
        }

        if sql.starts_with("CREATE DATABASE") {
            self.databases.push(idents(sql)[0].clone());
            return Ok(vec![]);
        }

        if sql.starts_with("INSERT INTO") {
            let names = idents(&sql[..sql.find(" VALUES ").unwrap()]);
            let values = &sql[sql.find(" VALUES (").unwrap() + " VALUES (".len()..sql.len() - 1];
            let mut pairs: Vec<(String, Value)> = names[1..]
                .iter()
                .cloned()
                .zip(split_top_level(values).iter().map(|v| parse_value(v)))
                .collect();

            let table = names[0].clone();

            if table == "migrations" {
                let get = |column: &str| {
                    pairs
                        .iter()
                        .find(|(name, _)| name == column)
                        .and_then(|(_, value)| value.as_str())
                        .unwrap_or_default()
                        .to_string()
                };
                self.migrations.push((get("appliesTo"), get("version")));
            }

            let rows = self.rows.entry(table).or_default();
            pairs.insert(0, ("id".to_string(), Value::from(rows.len() as i64 + 1)));
            rows.push(Row::from_pairs(pairs));
            return Ok(vec![]);
        }

        if sql.starts_with("UPDATE") {
            // UPDATE "t" SET "c"=v WHERE ("t"."id"=n)
            let names = idents(sql);
            let set = &sql[sql.find("=").unwrap() + 1..sql.find(" WHERE").unwrap()];
            let id = sql[sql.rfind('=').unwrap() + 1..sql.len() - 1].parse::<i64>().unwrap();
            let value = parse_value(set);

            for row in self.rows.entry(names[0].clone()).or_default() {
                if row.get("id").and_then(Value::to_i64) == Some(id) {
                    let pairs = row
                        .columns()
                        .iter()
                        .cloned()
                        .zip(row.values().iter().cloned())
                        .map(|(name, v)| if name == names[1] { (name, value.clone()) } else { (name, v) });
                    *row = Row::from_pairs(pairs);
                }
            }
            return Ok(vec![]);
        }

        Ok(vec![])
    }

    pub fn insert_row(&mut self, table: &str, row: Row) {
        self.rows.entry(table.to_string()).or_default().push(row);
    }
}

fn count(n: i64) -> Vec<Row> {
    vec![Row::from_pairs([("count", Value::from(n))])]
}

/// Parses `"name" type [NULL|NOT NULL]`.
fn parse_column(definition: &str) -> FakeColumn {
    let name = idents(definition)[0].clone();
    let rest = definition[definition[1..].find('"').unwrap() + 2..].trim();
    let serial = rest.starts_with("SERIAL");

    FakeColumn {
        name,
        ty: rest.split(['(', ' ']).next().unwrap_or_default().to_string(),
        size: size_of(rest),
        nullable: !serial && !rest.ends_with("NOT NULL"),
        serial,
    }
}

fn size_of(ty: &str) -> Option<i64> {
    if !ty.starts_with("varchar(") {
        return None;
    }

    ty["varchar(".len()..].split(')').next()?.parse().ok()
}

fn parse_value(token: &str) -> Value {
    let token = token.trim();

    if let Some(text) = token.strip_prefix('\'').and_then(|t| t.strip_suffix('\'')) {
        Value::from(text.replace("''", "'"))
    } else if token == "NULL" {
        Value::Null
    } else if let Ok(n) = token.parse::<i64>() {
        Value::from(n)
    } else {
        Value::from(token)
    }
}

/// Reads the single-quoted literal following `marker`.
fn literal_after(sql: &str, marker: &str) -> Option<String> {
    let start = sql.find(marker)? + marker.len();
    let rest = sql[start..].strip_prefix('\'')?;

    let mut ret = String::new();
    let mut chars = rest.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\'' {
            if chars.peek() == Some(&'\'') {
                chars.next();
            } else {
                return Some(ret);
            }
        }
        ret.push(c);
    }
    None
}

/// All double-quoted identifiers, in order. Single-quoted literals are
/// skipped.
fn idents(sql: &str) -> Vec<String> {
    let mut ret = vec![];
    let mut chars = sql.chars();

    while let Some(c) = chars.next() {
        match c {
            '"' => ret.push(chars.by_ref().take_while(|c| *c != '"').collect()),
            '\'' => for c in chars.by_ref() {
                if c == '\'' {
                    break;
                }
            },
            _ => {}
        }
    }

    ret
}

/// Splits on commas outside parentheses and quotes.
fn split_top_level(s: &str) -> Vec<String> {
    let mut ret = vec![];
    let mut current = String::new();
    let mut depth = 0;
    let mut quote = None;

    for c in s.chars() {
        match (c, quote) {
            ('\'' | '"', None) => quote = Some(c),
            (c, Some(q)) if c == q => quote = None,
            ('(', None) => depth += 1,
            (')', None) => depth -= 1,
            (',', None) if depth == 0 => {
                ret.push(current.trim().to_string());
                current.clear();
                continue;
            }
            _ => {}
        }
        current.push(c);
    }

    if !current.trim().is_empty() {
        ret.push(current.trim().to_string());
    }

    ret
}
